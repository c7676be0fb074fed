//! Instance lifecycle hooks and the instance-level proc-addr table.

use std::ffi::CStr;
use std::mem;
use std::os::raw::c_char;
use std::sync::Arc;

use ash::vk;
use parking_lot::Mutex;
use tracing::{debug, trace};

use ovrvk_core::chain;
use ovrvk_core::dispatch::dispatch_key;
use ovrvk_core::handle_map::HandleMap;
use ovrvk_core::load_proc;

/// Registry of live instances, keyed by dispatch key. Physical devices
/// carry their instance's dispatch key, so hooks handed one resolve here
/// too.
pub(crate) static INSTANCES: Mutex<HandleMap<Arc<InstanceRecord>>> = Mutex::new(HandleMap::new());

/// Next-layer functions captured when the instance was created.
pub(crate) struct InstanceRecord {
    pub next_get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr,
    pub destroy_instance: Option<vk::PFN_vkDestroyInstance>,
}

impl InstanceRecord {
    fn new(
        next_get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr,
        instance: vk::Instance,
    ) -> Self {
        Self {
            destroy_instance: unsafe {
                load_proc!(next_get_instance_proc_addr => instance,
                    c"vkDestroyInstance": vk::PFN_vkDestroyInstance)
            },
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
        _ => {}
    }

    if instance == vk::Instance::null() {
        return None;
    }
    let record = INSTANCES.lock().find(unsafe { dispatch_key(instance) }).cloned()?;
    unsafe { (record.next_get_instance_proc_addr)(instance, p_name) }
}

/// Layer's implementation of `vkCreateInstance`: capture the next layer's
/// getter from the loader chain, forward, then record the new instance.
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

/// Layer's implementation of `vkDestroyInstance`: forward downstream
/// first, then drop the record.
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
