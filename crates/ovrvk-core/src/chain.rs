//! Loader chain-info plumbing.
//!
//! The loader passes each layer its downstream neighbour through a
//! `VK_STRUCTURE_TYPE_LOADER_*_CREATE_INFO` node on the create-info's
//! `pNext` chain. A layer reads the link at the head of that node's list,
//! then advances the list head so the next layer down sees its own link.
//! The node is mutated exactly once per create call; everything else on
//! the chain is left untouched.

use core::ffi::c_void;
use core::ptr::NonNull;

use ash::vk::{self, BaseInStructure};
use tracing::debug;

use crate::error::LayerError;

/// `function` discriminator selecting the link-info payload of a loader
/// create-info node.
pub const VK_LAYER_LINK_INFO: i32 = 0;

/// Mirror of the loader's `VkLayerInstanceLink`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct LayerInstanceLink {
    pub p_next: *mut LayerInstanceLink,
    pub pfn_next_get_instance_proc_addr: Option<vk::PFN_vkGetInstanceProcAddr>,
    pub pfn_next_get_physical_device_proc_addr: vk::PFN_vkVoidFunction,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union LayerInstanceCreateInfoUnion {
    pub p_layer_info: *mut LayerInstanceLink,
}

/// Mirror of the loader's `VkLayerInstanceCreateInfo`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct LayerInstanceCreateInfo {
    pub s_type: vk::StructureType,
    pub p_next: *mut c_void,
    pub function: i32,
    pub u: LayerInstanceCreateInfoUnion,
}

/// Mirror of the loader's `VkLayerDeviceLink`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct LayerDeviceLink {
    pub p_next: *mut LayerDeviceLink,
    pub pfn_next_get_instance_proc_addr: Option<vk::PFN_vkGetInstanceProcAddr>,
    pub pfn_next_get_device_proc_addr: Option<vk::PFN_vkGetDeviceProcAddr>,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union LayerDeviceCreateInfoUnion {
    pub p_layer_info: *mut LayerDeviceLink,
}

/// Mirror of the loader's `VkLayerDeviceCreateInfo`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct LayerDeviceCreateInfo {
    pub s_type: vk::StructureType,
    pub p_next: *mut c_void,
    pub function: i32,
    pub u: LayerDeviceCreateInfoUnion,
}

/// Next-layer getters extracted from an instance create-info chain.
#[derive(Debug)]
pub struct InstanceChain {
    pub next_get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr,
}

/// Next-layer getters extracted from a device create-info chain.
#[derive(Debug)]
pub struct DeviceChain {
    pub next_get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr,
    pub next_get_device_proc_addr: vk::PFN_vkGetDeviceProcAddr,
}

/// Extract the next layer's getter from an instance create-info and
/// advance the chain link for the layer below.
///
/// # Safety
/// `create_info` and its whole `pNext` chain must be valid for the
/// duration of the call; the loader node found is mutated in place.
pub unsafe fn instance_chain(
    create_info: *const vk::InstanceCreateInfo,
) -> Result<InstanceChain, LayerError> {
    let mut node = unsafe {
        find_chain_node::<vk::InstanceCreateInfo, LayerInstanceCreateInfo>(
            create_info,
            vk::StructureType::LOADER_INSTANCE_CREATE_INFO,
        )
    }
    .ok_or(LayerError::ChainMalformed)?;
    let node = unsafe { node.as_mut() };

    let link = unsafe { node.u.p_layer_info.as_ref() }.ok_or(LayerError::ChainMalformed)?;
    let next_get_instance_proc_addr = link
        .pfn_next_get_instance_proc_addr
        .ok_or(LayerError::ChainMalformed)?;

    // Advance the chain for the next layer down.
    node.u.p_layer_info = link.p_next;
    debug!("captured next-layer instance getter, advanced chain link");

    Ok(InstanceChain {
        next_get_instance_proc_addr,
    })
}

/// Device-side counterpart of [`instance_chain`].
///
/// # Safety
/// Same contract as [`instance_chain`].
pub unsafe fn device_chain(
    create_info: *const vk::DeviceCreateInfo,
) -> Result<DeviceChain, LayerError> {
    let mut node = unsafe {
        find_chain_node::<vk::DeviceCreateInfo, LayerDeviceCreateInfo>(
            create_info,
            vk::StructureType::LOADER_DEVICE_CREATE_INFO,
        )
    }
    .ok_or(LayerError::ChainMalformed)?;
    let node = unsafe { node.as_mut() };

    let link = unsafe { node.u.p_layer_info.as_ref() }.ok_or(LayerError::ChainMalformed)?;
    let next_get_instance_proc_addr = link
        .pfn_next_get_instance_proc_addr
        .ok_or(LayerError::ChainMalformed)?;
    let next_get_device_proc_addr = link
        .pfn_next_get_device_proc_addr
        .ok_or(LayerError::ChainMalformed)?;

    node.u.p_layer_info = link.p_next;
    debug!("captured next-layer device getters, advanced chain link");

    Ok(DeviceChain {
        next_get_instance_proc_addr,
        next_get_device_proc_addr,
    })
}

/// Walk a `pNext` chain for the loader node with the link-info
/// discriminator. The chain is only read here.
unsafe fn find_chain_node<S, N>(
    create_info: *const S,
    s_type: vk::StructureType,
) -> Option<NonNull<N>> {
    let mut cursor: NonNull<BaseInStructure> =
        NonNull::new(create_info.cast::<BaseInStructure>().cast_mut())?;
    loop {
        cursor = NonNull::new(
            unsafe { cursor.as_ref() }
                .p_next
                .cast::<BaseInStructure>()
                .cast_mut(),
        )?;

        if unsafe { cursor.as_ref() }.s_type == s_type {
            let node = cursor.cast::<N>();
            // All loader create-info layouts share the `function` slot.
            let function =
                unsafe { node.cast::<LayerInstanceCreateInfo>().as_ref() }.function;
            if function == VK_LAYER_LINK_INFO {
                return Some(node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ptr;
    use std::os::raw::c_char;

    unsafe extern "system" fn dummy_getter(
        _instance: vk::Instance,
        _name: *const c_char,
    ) -> vk::PFN_vkVoidFunction {
        None
    }

    unsafe extern "system" fn dummy_device_getter(
        _device: vk::Device,
        _name: *const c_char,
    ) -> vk::PFN_vkVoidFunction {
        None
    }

    #[test]
    fn instance_chain_extracts_getter_and_advances() {
        let mut second_link = LayerInstanceLink {
            p_next: ptr::null_mut(),
            pfn_next_get_instance_proc_addr: Some(dummy_getter),
            pfn_next_get_physical_device_proc_addr: None,
        };
        let mut first_link = LayerInstanceLink {
            p_next: &mut second_link,
            pfn_next_get_instance_proc_addr: Some(dummy_getter),
            pfn_next_get_physical_device_proc_addr: None,
        };
        let mut node = LayerInstanceCreateInfo {
            s_type: vk::StructureType::LOADER_INSTANCE_CREATE_INFO,
            p_next: ptr::null_mut(),
            function: VK_LAYER_LINK_INFO,
            u: LayerInstanceCreateInfoUnion {
                p_layer_info: &mut first_link,
            },
        };
        let create_info = vk::InstanceCreateInfo {
            p_next: &mut node as *mut LayerInstanceCreateInfo as *const core::ffi::c_void,
            ..Default::default()
        };

        let chain = unsafe { instance_chain(&create_info) }.expect("chain");
        assert_eq!(
            chain.next_get_instance_proc_addr as usize,
            dummy_getter as vk::PFN_vkGetInstanceProcAddr as usize
        );
        // The node now points at the second link, ready for the layer
        // below this one.
        assert_eq!(
            unsafe { node.u.p_layer_info },
            &mut second_link as *mut LayerInstanceLink
        );
    }

    #[test]
    fn missing_node_is_chain_malformed() {
        let create_info = vk::InstanceCreateInfo::default();
        let err = unsafe { instance_chain(&create_info) }.expect_err("no chain");
        assert!(matches!(err, LayerError::ChainMalformed));
    }

    #[test]
    fn node_with_wrong_function_is_skipped() {
        let mut node = LayerInstanceCreateInfo {
            s_type: vk::StructureType::LOADER_INSTANCE_CREATE_INFO,
            p_next: ptr::null_mut(),
            function: 1, // loader data callback, not link info
            u: LayerInstanceCreateInfoUnion {
                p_layer_info: ptr::null_mut(),
            },
        };
        let create_info = vk::InstanceCreateInfo {
            p_next: &mut node as *mut LayerInstanceCreateInfo as *const core::ffi::c_void,
            ..Default::default()
        };
        let err = unsafe { instance_chain(&create_info) }.expect_err("no link info");
        assert!(matches!(err, LayerError::ChainMalformed));
    }

    #[test]
    fn device_chain_requires_both_getters() {
        let mut link = LayerDeviceLink {
            p_next: ptr::null_mut(),
            pfn_next_get_instance_proc_addr: Some(dummy_getter),
            pfn_next_get_device_proc_addr: None,
        };
        let mut node = LayerDeviceCreateInfo {
            s_type: vk::StructureType::LOADER_DEVICE_CREATE_INFO,
            p_next: ptr::null_mut(),
            function: VK_LAYER_LINK_INFO,
            u: LayerDeviceCreateInfoUnion {
                p_layer_info: &mut link,
            },
        };
        let create_info = vk::DeviceCreateInfo {
            p_next: &mut node as *mut LayerDeviceCreateInfo as *const core::ffi::c_void,
            ..Default::default()
        };
        let err = unsafe { device_chain(&create_info) }.expect_err("missing device getter");
        assert!(matches!(err, LayerError::ChainMalformed));

        link.pfn_next_get_device_proc_addr = Some(dummy_device_getter);
        node.u.p_layer_info = &mut link;
        let chain = unsafe { device_chain(&create_info) }.expect("chain");
        assert!(chain.next_get_instance_proc_addr as usize != 0);
    }
}
