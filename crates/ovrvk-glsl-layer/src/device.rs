//! Device lifecycle hooks and the device-level proc-addr table.

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

/// Registry of live devices, keyed by dispatch key.
pub(crate) static DEVICES: Mutex<HandleMap<Arc<DeviceRecord>>> = Mutex::new(HandleMap::new());

/// Next-layer functions captured when the device was created.
pub(crate) struct DeviceRecord {
    pub next_get_device_proc_addr: vk::PFN_vkGetDeviceProcAddr,
    pub destroy_device: Option<vk::PFN_vkDestroyDevice>,
    pub create_shader_module: Option<vk::PFN_vkCreateShaderModule>,
}

impl DeviceRecord {
    fn new(next_get_device_proc_addr: vk::PFN_vkGetDeviceProcAddr, device: vk::Device) -> Self {
        macro_rules! proc {
            ($name:literal : $ty:ty) => {
                unsafe { load_proc!(next_get_device_proc_addr => device, $name : $ty) }
            };
        }
        Self {
            destroy_device: proc!(c"vkDestroyDevice": vk::PFN_vkDestroyDevice),
            create_shader_module: proc!(c"vkCreateShaderModule": vk::PFN_vkCreateShaderModule),
            next_get_device_proc_addr,
        }
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
        "vkCreateShaderModule" => {
            return Some(unsafe {
                mem::transmute(crate::shader::create_shader_module as *const ())
            });
        }
        _ => {}
    }

    if device == vk::Device::null() {
        return None;
    }
    let record = DEVICES.lock().find(unsafe { dispatch_key(device) }).cloned()?;
    unsafe { (record.next_get_device_proc_addr)(device, p_name) }
}

/// Layer's implementation of `vkCreateDevice`: the layer has no device
/// semantics of its own, but must capture the next layer's device getter
/// so `vkCreateShaderModule` can be interposed later.
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

    let res = unsafe { next_create_device(physical_device, p_create_info, p_allocator, p_device) };
    if res != vk::Result::SUCCESS {
        return res;
    }

    let device = unsafe { *p_device };
    debug!("recording device dispatch for {:?}", device);
    let record = DeviceRecord::new(link.next_get_device_proc_addr, device);
    DEVICES
        .lock()
        .add(unsafe { dispatch_key(device) }, Arc::new(record));

    vk::Result::SUCCESS
}

/// Layer's implementation of `vkDestroyDevice`.
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
    debug!("dropping device record for {:?}", device);
    DEVICES.lock().remove(key);
}
