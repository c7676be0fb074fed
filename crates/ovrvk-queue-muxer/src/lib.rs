//! VK_LAYER_OCULUS_queue_muxer
//!
//! An intercepting layer that virtualises device queues. A driver that
//! exposes `N` queues in a family is advertised as exposing at least 16;
//! requests beyond `N` are clamped at device creation, queue indices
//! beyond `N` fold onto the last physical queue, and per-queue work on a
//! folded queue is serialised under a per-queue mutex. Applications that
//! stay within the driver's real counts see no behavioural change.

// The loader resolves the layer ABI by symbol name.
#![allow(non_snake_case)]

use std::os::raw::c_char;

use ash::vk;
use ovrvk_core::meta::{self, LayerMetadata};

pub mod device;
pub mod instance;
pub mod queue;

/// The minimum queue count advertised per family.
pub const MIN_ADVERTISED_QUEUE_COUNT: u32 = 16;

pub(crate) const LAYER_METADATA: LayerMetadata = LayerMetadata {
    name: "VK_LAYER_OCULUS_queue_muxer",
    spec_version: vk::API_VERSION_1_0,
    implementation_version: 1,
    description: "Queue multiplexer layer",
};

// ── Loader-facing exports ───────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkEnumerateInstanceLayerProperties(
    p_property_count: *mut u32,
    p_properties: *mut vk::LayerProperties,
) -> vk::Result {
    unsafe { LAYER_METADATA.write_layer_properties(p_property_count, p_properties) }
}

#[no_mangle]
pub unsafe extern "system" fn vkEnumerateDeviceLayerProperties(
    _physical_device: vk::PhysicalDevice,
    p_property_count: *mut u32,
    p_properties: *mut vk::LayerProperties,
) -> vk::Result {
    unsafe { LAYER_METADATA.write_layer_properties(p_property_count, p_properties) }
}

#[no_mangle]
pub unsafe extern "system" fn vkEnumerateInstanceExtensionProperties(
    _p_layer_name: *const c_char,
    p_property_count: *mut u32,
    p_properties: *mut vk::ExtensionProperties,
) -> vk::Result {
    unsafe { meta::write_no_extension_properties(p_property_count, p_properties) }
}

#[no_mangle]
pub unsafe extern "system" fn vkEnumerateDeviceExtensionProperties(
    _physical_device: vk::PhysicalDevice,
    _p_layer_name: *const c_char,
    p_property_count: *mut u32,
    p_properties: *mut vk::ExtensionProperties,
) -> vk::Result {
    unsafe { meta::write_no_extension_properties(p_property_count, p_properties) }
}

#[no_mangle]
pub unsafe extern "system" fn vkGetInstanceProcAddr(
    instance: vk::Instance,
    p_name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    unsafe { instance::get_proc_addr(instance, p_name) }
}

#[no_mangle]
pub unsafe extern "system" fn vkGetDeviceProcAddr(
    device: vk::Device,
    p_name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    unsafe { device::get_proc_addr(device, p_name) }
}
