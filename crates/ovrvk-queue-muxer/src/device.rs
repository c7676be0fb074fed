//! Device hooks: clamp queue requests at creation, fold virtual queue
//! indices at retrieval, and keep the real queue-family snapshot each
//! device's folding decisions are made against.

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
use ovrvk_core::dispatch::{dispatch_key, raw_key};
use ovrvk_core::handle_map::HandleMap;
use ovrvk_core::load_proc;

use crate::instance::INSTANCES;
use crate::queue::{QueueRecord, QUEUES};

/// Registry of live devices, keyed by dispatch key. Queues share their
/// device's dispatch key and resolve here from the per-queue hooks.
pub(crate) static DEVICES: Mutex<HandleMap<Arc<DeviceRecord>>> = Mutex::new(HandleMap::new());

pub(crate) struct DeviceRecord {
    pub next_get_device_proc_addr: vk::PFN_vkGetDeviceProcAddr,
    pub destroy_device: Option<vk::PFN_vkDestroyDevice>,
    pub get_device_queue: Option<vk::PFN_vkGetDeviceQueue>,
    pub get_device_queue2: Option<vk::PFN_vkGetDeviceQueue2>,
    pub queue_submit: Option<vk::PFN_vkQueueSubmit>,
    pub queue_wait_idle: Option<vk::PFN_vkQueueWaitIdle>,
    pub queue_present_khr: Option<vk::PFN_vkQueuePresentKHR>,
    pub queue_bind_sparse: Option<vk::PFN_vkQueueBindSparse>,

    /// Dispatch key of the owning instance's record.
    pub instance_key: usize,

    /// The driver's real queue-family properties, captured at creation
    /// and immutable for the life of the device.
    pub queue_families: Vec<vk::QueueFamilyProperties>,

    /// Serialises queue retrieval and record pre-seeding.
    pub queue_seed_lock: Mutex<()>,
}

impl DeviceRecord {
    fn new(
        next_get_device_proc_addr: vk::PFN_vkGetDeviceProcAddr,
        device: vk::Device,
        instance_key: usize,
        queue_families: Vec<vk::QueueFamilyProperties>,
    ) -> Self {
        macro_rules! proc {
            ($name:literal : $ty:ty) => {
                unsafe { load_proc!(next_get_device_proc_addr => device, $name : $ty) }
            };
        }
        Self {
            destroy_device: proc!(c"vkDestroyDevice": vk::PFN_vkDestroyDevice),
            get_device_queue: proc!(c"vkGetDeviceQueue": vk::PFN_vkGetDeviceQueue),
            get_device_queue2: proc!(c"vkGetDeviceQueue2": vk::PFN_vkGetDeviceQueue2),
            queue_submit: proc!(c"vkQueueSubmit": vk::PFN_vkQueueSubmit),
            queue_wait_idle: proc!(c"vkQueueWaitIdle": vk::PFN_vkQueueWaitIdle),
            queue_present_khr: proc!(c"vkQueuePresentKHR": vk::PFN_vkQueuePresentKHR),
            queue_bind_sparse: proc!(c"vkQueueBindSparse": vk::PFN_vkQueueBindSparse),
            next_get_device_proc_addr,
            instance_key,
            queue_families,
            queue_seed_lock: Mutex::new(()),
        }
    }

    /// The real queue count of a family, before any inflation.
    pub fn real_queue_count(&self, family_index: u32) -> Option<u32> {
        self.queue_families
            .get(family_index as usize)
            .map(|family| family.queue_count)
    }
}

/// Layer's implementation of `vkGetDeviceProcAddr`.
pub(crate) unsafe extern "system" fn get_proc_addr(
    device: vk::Device,
    p_name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    if p_name.is_null() {
        return None;
    }
    let name = unsafe { CStr::from_ptr(p_name) }.to_str().ok()?;
    trace!("vkGetDeviceProcAddr called name: {}", name);

    match name {
        "vkGetDeviceProcAddr" => {
            return Some(unsafe { mem::transmute(crate::vkGetDeviceProcAddr as *const ()) });
        }
        "vkDestroyDevice" => {
            return Some(unsafe { mem::transmute(destroy_device as *const ()) });
        }
        "vkGetDeviceQueue" => {
            return Some(unsafe { mem::transmute(get_device_queue as *const ()) });
        }
        "vkGetDeviceQueue2" => {
            return Some(unsafe { mem::transmute(get_device_queue2 as *const ()) });
        }
        "vkQueueSubmit" => {
            return Some(unsafe { mem::transmute(crate::queue::queue_submit as *const ()) });
        }
        "vkQueueWaitIdle" => {
            return Some(unsafe { mem::transmute(crate::queue::queue_wait_idle as *const ()) });
        }
        "vkQueuePresentKHR" => {
            return Some(unsafe { mem::transmute(crate::queue::queue_present_khr as *const ()) });
        }
        "vkQueueBindSparse" => {
            return Some(unsafe { mem::transmute(crate::queue::queue_bind_sparse as *const ()) });
        }
        _ => {}
    }

    if device == vk::Device::null() {
        return None;
    }
    let record = DEVICES.lock().find(unsafe { dispatch_key(device) }).cloned()?;
    unsafe { (record.next_get_device_proc_addr)(device, p_name) }
}

/// Layer's implementation of `vkCreateDevice`: snapshot the driver's real
/// queue-family properties, clamp every requested queue count to them,
/// and forward the rebuilt create-info.
pub unsafe extern "system" fn create_device(
    physical_device: vk::PhysicalDevice,
    p_create_info: *const vk::DeviceCreateInfo<'_>,
    p_allocator: *const vk::AllocationCallbacks<'_>,
    p_device: *mut vk::Device,
) -> vk::Result {
    trace!("vkCreateDevice called");

    if p_create_info.is_null() || p_device.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }

    let instance_key = unsafe { dispatch_key(physical_device) };
    let Some(instance_record) = INSTANCES.lock().find(instance_key).cloned() else {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    };

    let link = match unsafe { chain::device_chain(p_create_info) } {
        Ok(link) => link,
        Err(err) => return err.to_vk(),
    };

    let Some(next_create_device) = (unsafe {
        load_proc!(link.next_get_instance_proc_addr => vk::Instance::null(),
            c"vkCreateDevice": vk::PFN_vkCreateDevice)
    }) else {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    };

    let queue_families =
        unsafe { query_real_queue_families(&instance_record, physical_device) };

    let create_info = unsafe { &*p_create_info };
    let requested: &[vk::DeviceQueueCreateInfo] = if create_info.p_queue_create_infos.is_null() {
        &[]
    } else {
        unsafe {
            slice::from_raw_parts(
                create_info.p_queue_create_infos,
                create_info.queue_create_info_count as usize,
            )
        }
    };

    let mut clamped = requested.to_vec();
    if config::get().queue_muxer.enabled {
        for queue_info in &mut clamped {
            let Some(family) = queue_families.get(queue_info.queue_family_index as usize) else {
                continue;
            };
            if queue_info.queue_count > family.queue_count {
                debug!(
                    "clamping family {} queue request {} to {}",
                    queue_info.queue_family_index, queue_info.queue_count, family.queue_count
                );
                queue_info.queue_count = family.queue_count;
            }
        }
    }

    let mut new_info = *create_info;
    if !clamped.is_empty() {
        new_info.p_queue_create_infos = clamped.as_ptr();
    }

    let res = unsafe { next_create_device(physical_device, &new_info, p_allocator, p_device) };
    if res != vk::Result::SUCCESS {
        return res;
    }

    let device = unsafe { *p_device };
    debug!(
        "recording device dispatch for {:?} (instance key {:#x})",
        device, instance_key
    );
    let record = DeviceRecord::new(
        link.next_get_device_proc_addr,
        device,
        instance_key,
        queue_families,
    );
    DEVICES
        .lock()
        .add(unsafe { dispatch_key(device) }, Arc::new(record));

    vk::Result::SUCCESS
}

/// Layer's implementation of `vkDestroyDevice`: forward downstream, then
/// purge the device record and every queue record folded onto it.
pub unsafe extern "system" fn destroy_device(
    device: vk::Device,
    p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    trace!("vkDestroyDevice called");

    if device == vk::Device::null() {
        return;
    }
    let key = unsafe { dispatch_key(device) };
    let Some(record) = DEVICES.lock().find(key).cloned() else {
        return;
    };
    if let Some(next_destroy_device) = record.destroy_device {
        unsafe { next_destroy_device(device, p_allocator) };
    }
    debug!("dropping device record and queue records for {:?}", device);
    QUEUES.lock().retain(|_, queue| queue.device_key != key);
    DEVICES.lock().remove(key);
}

/// Layer's implementation of `vkGetDeviceQueue`: fold virtual indices
/// onto the last physical queue and pre-seed the queue record under the
/// device lock so later per-queue hooks observe it.
pub unsafe extern "system" fn get_device_queue(
    device: vk::Device,
    queue_family_index: u32,
    queue_index: u32,
    p_queue: *mut vk::Queue,
) {
    trace!("vkGetDeviceQueue called");

    if p_queue.is_null() {
        return;
    }
    let key = unsafe { dispatch_key(device) };
    let Some(record) = DEVICES.lock().find(key).cloned() else {
        return;
    };
    let Some(next_get_device_queue) = record.get_device_queue else {
        return;
    };

    let forwarded_index = folded_index(&record, queue_family_index, queue_index);

    let _seed_guard = record.queue_seed_lock.lock();
    unsafe { next_get_device_queue(device, queue_family_index, forwarded_index, p_queue) };

    unsafe { seed_queue_record(p_queue, key) };
}

/// Vulkan 1.1 variant: the queue index travels inside a structure, the
/// folding is the same.
pub unsafe extern "system" fn get_device_queue2(
    device: vk::Device,
    p_queue_info: *const vk::DeviceQueueInfo2<'_>,
    p_queue: *mut vk::Queue,
) {
    trace!("vkGetDeviceQueue2 called");

    if p_queue_info.is_null() || p_queue.is_null() {
        return;
    }
    let key = unsafe { dispatch_key(device) };
    let Some(record) = DEVICES.lock().find(key).cloned() else {
        return;
    };
    let Some(next_get_device_queue2) = record.get_device_queue2 else {
        return;
    };

    let queue_info = unsafe { &*p_queue_info };
    let mut forwarded_info = *queue_info;
    forwarded_info.queue_index =
        folded_index(&record, queue_info.queue_family_index, queue_info.queue_index);

    let _seed_guard = record.queue_seed_lock.lock();
    unsafe { next_get_device_queue2(device, &forwarded_info, p_queue) };

    unsafe { seed_queue_record(p_queue, key) };
}

/// Fold a virtual queue index onto the family's last physical queue.
fn folded_index(record: &DeviceRecord, queue_family_index: u32, queue_index: u32) -> u32 {
    if !config::get().queue_muxer.enabled {
        return queue_index;
    }
    let Some(real_count) = record.real_queue_count(queue_family_index) else {
        return queue_index;
    };
    if real_count > 0 && queue_index >= real_count {
        let folded = real_count - 1;
        debug!(
            "folding queue ({}, {}) onto ({}, {})",
            queue_family_index, queue_index, queue_family_index, folded
        );
        return folded;
    }
    queue_index
}

/// Record the returned queue handle so later per-queue hooks observe it.
/// Every virtual index folds onto an already-seen handle, so the insert
/// only happens on first sight.
unsafe fn seed_queue_record(p_queue: *mut vk::Queue, device_key: usize) {
    let queue = unsafe { *p_queue };
    if queue != vk::Queue::null() {
        let mut queues = QUEUES.lock();
        if queues.find(raw_key(queue)).is_none() {
            queues.add(raw_key(queue), Arc::new(QueueRecord::new(device_key)));
        }
    }
}

/// Read the driver's own queue-family properties through the captured
/// instance dispatch, bypassing this layer's inflation.
unsafe fn query_real_queue_families(
    instance_record: &crate::instance::InstanceRecord,
    physical_device: vk::PhysicalDevice,
) -> Vec<vk::QueueFamilyProperties> {
    let Some(next) = instance_record.get_physical_device_queue_family_properties else {
        return Vec::new();
    };
    let mut count = 0u32;
    unsafe { next(physical_device, &mut count, std::ptr::null_mut()) };
    let mut families = vec![vk::QueueFamilyProperties::default(); count as usize];
    unsafe { next(physical_device, &mut count, families.as_mut_ptr()) };
    families.truncate(count as usize);
    families
}
