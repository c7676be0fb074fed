//! VK_LAYER_OCULUS_glsl_shader
//!
//! An intercepting layer that lets applications hand `vkCreateShaderModule`
//! GLSL source in a tagged SPIR-V container: the SPIR-V magic word, a zero
//! where the version word would be (no real SPIR-V has version zero), a
//! pipeline-stage word, then UTF-8 GLSL. The layer lowers the source to
//! SPIR-V and the driver below only ever sees a genuine word stream.
//! Everything else is forwarded untouched.

// The loader resolves the layer ABI by symbol name.
#![allow(non_snake_case)]

use std::os::raw::c_char;

use ash::vk;
use ovrvk_core::meta::{self, LayerMetadata};

pub mod compiler;
pub mod device;
pub mod instance;
pub mod shader;

pub(crate) const LAYER_METADATA: LayerMetadata = LayerMetadata {
    name: "VK_LAYER_OCULUS_glsl_shader",
    spec_version: vk::API_VERSION_1_0,
    implementation_version: 1,
    description: "GLSL shader layer",
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
