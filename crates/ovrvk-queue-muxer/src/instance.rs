//! Instance hooks: lifecycle, proc-addr table, and queue-count inflation
//! on the queue-family enumeration calls.

use std::ffi::CStr;
use std::mem;
use std::os::raw::c_char;
use std::slice;
use std::sync::Arc;

use ash::vk;
use parking_lot::Mutex;
use tracing::{debug, trace};

use ovrvk_core::chain;
use ovrvk_core::config;
use ovrvk_core::dispatch::dispatch_key;
use ovrvk_core::handle_map::HandleMap;
use ovrvk_core::load_proc;

use crate::MIN_ADVERTISED_QUEUE_COUNT;

/// Registry of live instances, keyed by dispatch key. Physical devices
/// share their instance's dispatch key and resolve here as well.
pub(crate) static INSTANCES: Mutex<HandleMap<Arc<InstanceRecord>>> = Mutex::new(HandleMap::new());

/// Next-layer functions captured when the instance was created.
pub(crate) struct InstanceRecord {
    pub next_get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr,
    pub destroy_instance: Option<vk::PFN_vkDestroyInstance>,
    pub get_physical_device_queue_family_properties:
        Option<vk::PFN_vkGetPhysicalDeviceQueueFamilyProperties>,
    pub get_physical_device_queue_family_properties2:
        Option<vk::PFN_vkGetPhysicalDeviceQueueFamilyProperties2>,
    pub get_physical_device_queue_family_properties2_khr:
        Option<vk::PFN_vkGetPhysicalDeviceQueueFamilyProperties2>,
}

impl InstanceRecord {
    fn new(
        next_get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr,
        instance: vk::Instance,
    ) -> Self {
        macro_rules! proc {
            ($name:literal : $ty:ty) => {
                unsafe { load_proc!(next_get_instance_proc_addr => instance, $name : $ty) }
            };
        }
        Self {
            destroy_instance: proc!(c"vkDestroyInstance": vk::PFN_vkDestroyInstance),
            get_physical_device_queue_family_properties: proc!(
                c"vkGetPhysicalDeviceQueueFamilyProperties":
                    vk::PFN_vkGetPhysicalDeviceQueueFamilyProperties
            ),
            get_physical_device_queue_family_properties2: proc!(
                c"vkGetPhysicalDeviceQueueFamilyProperties2":
                    vk::PFN_vkGetPhysicalDeviceQueueFamilyProperties2
            ),
            get_physical_device_queue_family_properties2_khr: proc!(
                c"vkGetPhysicalDeviceQueueFamilyProperties2KHR":
                    vk::PFN_vkGetPhysicalDeviceQueueFamilyProperties2
            ),
            next_get_instance_proc_addr,
        }
    }
}

/// Layer's implementation of `vkGetInstanceProcAddr`.
pub(crate) unsafe extern "system" fn get_proc_addr(
    instance: vk::Instance,
    p_name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    if p_name.is_null() {
        return None;
    }
    let name = unsafe { CStr::from_ptr(p_name) }.to_str().ok()?;
    trace!("vkGetInstanceProcAddr called name: {}", name);

    match name {
        "vkGetInstanceProcAddr" => {
            return Some(unsafe { mem::transmute(crate::vkGetInstanceProcAddr as *const ()) });
        }
        "vkGetDeviceProcAddr" => {
            return Some(unsafe { mem::transmute(crate::vkGetDeviceProcAddr as *const ()) });
        }
        "vkCreateInstance" => {
            return Some(unsafe { mem::transmute(create_instance as *const ()) });
        }
        "vkDestroyInstance" => {
            return Some(unsafe { mem::transmute(destroy_instance as *const ()) });
        }
        "vkCreateDevice" => {
            return Some(unsafe { mem::transmute(crate::device::create_device as *const ()) });
        }
        "vkGetPhysicalDeviceQueueFamilyProperties" => {
            return Some(unsafe {
                mem::transmute(get_physical_device_queue_family_properties as *const ())
            });
        }
        "vkGetPhysicalDeviceQueueFamilyProperties2" => {
            return Some(unsafe {
                mem::transmute(get_physical_device_queue_family_properties2 as *const ())
            });
        }
        "vkGetPhysicalDeviceQueueFamilyProperties2KHR" => {
            return Some(unsafe {
                mem::transmute(get_physical_device_queue_family_properties2_khr as *const ())
            });
        }
        _ => {}
    }

    if instance == vk::Instance::null() {
        return None;
    }
    let record = INSTANCES.lock().find(unsafe { dispatch_key(instance) }).cloned()?;
    unsafe { (record.next_get_instance_proc_addr)(instance, p_name) }
}

/// Layer's implementation of `vkCreateInstance`.
pub unsafe extern "system" fn create_instance(
    p_create_info: *const vk::InstanceCreateInfo<'_>,
    p_allocator: *const vk::AllocationCallbacks<'_>,
    p_instance: *mut vk::Instance,
) -> vk::Result {
    ovrvk_common::logging::init_logging();
    trace!("vkCreateInstance called");

    if p_create_info.is_null() || p_instance.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }

    let link = match unsafe { chain::instance_chain(p_create_info) } {
        Ok(link) => link,
        Err(err) => return err.to_vk(),
    };
    let next_get_instance_proc_addr = link.next_get_instance_proc_addr;

    let Some(next_create_instance) = (unsafe {
        load_proc!(next_get_instance_proc_addr => vk::Instance::null(),
            c"vkCreateInstance": vk::PFN_vkCreateInstance)
    }) else {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    };

    let res = unsafe { next_create_instance(p_create_info, p_allocator, p_instance) };
    if res != vk::Result::SUCCESS {
        return res;
    }

    let instance = unsafe { *p_instance };
    debug!("recording instance dispatch for {:?}", instance);
    let record = InstanceRecord::new(next_get_instance_proc_addr, instance);
    INSTANCES
        .lock()
        .add(unsafe { dispatch_key(instance) }, Arc::new(record));

    vk::Result::SUCCESS
}

/// Layer's implementation of `vkDestroyInstance`.
pub unsafe extern "system" fn destroy_instance(
    instance: vk::Instance,
    p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    trace!("vkDestroyInstance called");

    if instance == vk::Instance::null() {
        return;
    }
    let key = unsafe { dispatch_key(instance) };
    let Some(record) = INSTANCES.lock().find(key).cloned() else {
        return;
    };
    if let Some(next_destroy_instance) = record.destroy_instance {
        unsafe { next_destroy_instance(instance, p_allocator) };
    }
    debug!("dropping instance record for {:?}", instance);
    INSTANCES.lock().remove(key);
}

/// Layer's implementation of `vkGetPhysicalDeviceQueueFamilyProperties`:
/// forward, then raise each family's `queueCount` to the advertised
/// minimum. Count queries and the family count itself pass through.
pub unsafe extern "system" fn get_physical_device_queue_family_properties(
    physical_device: vk::PhysicalDevice,
    p_count: *mut u32,
    p_properties: *mut vk::QueueFamilyProperties,
) {
    trace!("vkGetPhysicalDeviceQueueFamilyProperties called");

    let Some(record) = INSTANCES
        .lock()
        .find(unsafe { dispatch_key(physical_device) })
        .cloned()
    else {
        return;
    };
    let Some(next) = record.get_physical_device_queue_family_properties else {
        return;
    };
    unsafe { next(physical_device, p_count, p_properties) };

    if p_properties.is_null() || !config::get().queue_muxer.enabled {
        return;
    }
    let count = unsafe { *p_count } as usize;
    for properties in unsafe { slice::from_raw_parts_mut(p_properties, count) } {
        inflate_queue_count(&mut properties.queue_count);
    }
}

/// Structure-2 variant of the inflation hook.
pub unsafe extern "system" fn get_physical_device_queue_family_properties2(
    physical_device: vk::PhysicalDevice,
    p_count: *mut u32,
    p_properties: *mut vk::QueueFamilyProperties2<'_>,
) {
    trace!("vkGetPhysicalDeviceQueueFamilyProperties2 called");

    let Some(record) = INSTANCES
        .lock()
        .find(unsafe { dispatch_key(physical_device) })
        .cloned()
    else {
        return;
    };
    let Some(next) = record.get_physical_device_queue_family_properties2 else {
        return;
    };
    unsafe { next(physical_device, p_count, p_properties) };
    unsafe { inflate_properties2(p_count, p_properties) };
}

/// KHR alias of the structure-2 hook.
pub unsafe extern "system" fn get_physical_device_queue_family_properties2_khr(
    physical_device: vk::PhysicalDevice,
    p_count: *mut u32,
    p_properties: *mut vk::QueueFamilyProperties2<'_>,
) {
    trace!("vkGetPhysicalDeviceQueueFamilyProperties2KHR called");

    let Some(record) = INSTANCES
        .lock()
        .find(unsafe { dispatch_key(physical_device) })
        .cloned()
    else {
        return;
    };
    let Some(next) = record.get_physical_device_queue_family_properties2_khr else {
        return;
    };
    unsafe { next(physical_device, p_count, p_properties) };
    unsafe { inflate_properties2(p_count, p_properties) };
}

unsafe fn inflate_properties2(p_count: *mut u32, p_properties: *mut vk::QueueFamilyProperties2<'_>) {
    if p_properties.is_null() || !config::get().queue_muxer.enabled {
        return;
    }
    let count = unsafe { *p_count } as usize;
    for properties in unsafe { slice::from_raw_parts_mut(p_properties, count) } {
        inflate_queue_count(&mut properties.queue_family_properties.queue_count);
    }
}

fn inflate_queue_count(queue_count: &mut u32) {
    if *queue_count < MIN_ADVERTISED_QUEUE_COUNT {
        debug!(
            "advertising {} queues in place of {}",
            MIN_ADVERTISED_QUEUE_COUNT, *queue_count
        );
        *queue_count = MIN_ADVERTISED_QUEUE_COUNT;
    }
}
