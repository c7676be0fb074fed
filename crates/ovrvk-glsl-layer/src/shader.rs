//! The shader-module interceptor: recognise tagged GLSL containers and
//! substitute compiled SPIR-V into the downstream create call.

use std::slice;

use ash::vk;
use tracing::{trace, warn};

use ovrvk_core::config;
use ovrvk_core::dispatch::dispatch_key;

use crate::compiler;
use crate::device::DEVICES;

/// First word of every SPIR-V stream.
pub const SPIRV_MAGIC: u32 = 0x0723_0203;

/// Recognise a tagged GLSL container: the SPIR-V magic followed by a zero
/// version word (no real SPIR-V stream carries version zero), then a
/// pipeline-stage word and UTF-8 source. Returns the stage word and the
/// source bytes, or `None` for anything that should be forwarded as-is.
pub fn parse_container(code: &[u8]) -> Option<(u32, &[u8])> {
    if code.len() < 12 || code.len() % 4 != 0 {
        return None;
    }
    if read_word(code, 0) != SPIRV_MAGIC || read_word(code, 1) != 0 {
        return None;
    }
    Some((read_word(code, 2), &code[12..]))
}

fn read_word(code: &[u8], index: usize) -> u32 {
    let offset = index * 4;
    u32::from_le_bytes([
        code[offset],
        code[offset + 1],
        code[offset + 2],
        code[offset + 3],
    ])
}

/// Layer's implementation of `vkCreateShaderModule`.
pub unsafe extern "system" fn create_shader_module(
    device: vk::Device,
    p_create_info: *const vk::ShaderModuleCreateInfo<'_>,
    p_allocator: *const vk::AllocationCallbacks<'_>,
    p_shader_module: *mut vk::ShaderModule,
) -> vk::Result {
    trace!("vkCreateShaderModule called");

    if p_create_info.is_null() || p_shader_module.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    let Some(record) = DEVICES.lock().find(unsafe { dispatch_key(device) }).cloned() else {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    };
    let Some(next_create_shader_module) = record.create_shader_module else {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    };

    let create_info = unsafe { &*p_create_info };
    let code: &[u8] = if create_info.p_code.is_null() {
        &[]
    } else {
        unsafe { slice::from_raw_parts(create_info.p_code.cast::<u8>(), create_info.code_size) }
    };

    if config::get().glsl_shader.enabled {
        if let Some((stage_word, source)) = parse_container(code) {
            return match compiler::compile_tagged(stage_word, source) {
                Ok(words) => {
                    trace!(
                        "compiled {} bytes of GLSL to {} SPIR-V words",
                        source.len(),
                        words.len()
                    );
                    let mut new_info = *create_info;
                    new_info.code_size = words.len() * 4;
                    new_info.p_code = words.as_ptr();
                    unsafe {
                        next_create_shader_module(device, &new_info, p_allocator, p_shader_module)
                    }
                }
                Err(err) => {
                    warn!("shader compilation failed: {err}");
                    err.to_vk()
                }
            };
        }
    }

    unsafe { next_create_shader_module(device, p_create_info, p_allocator, p_shader_module) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_tagged_vertex_container() {
        let mut payload = vec![
            0x03, 0x02, 0x23, 0x07, // SPIR-V magic, little-endian
            0x00, 0x00, 0x00, 0x00, // zero version word: tagged GLSL
            0x01, 0x00, 0x00, 0x00, // stage word: vertex
        ];
        payload.extend_from_slice(b"void main(){}");
        // Total length must stay a word multiple.
        payload.extend_from_slice(&[0, 0, 0]);

        let (stage, source) = parse_container(&payload).expect("tagged payload");
        assert_eq!(stage, vk::ShaderStageFlags::VERTEX.as_raw());
        assert!(source.starts_with(b"void main(){}"));
    }

    #[test]
    fn real_spirv_is_not_recognised() {
        // SPIR-V 1.1: magic then a non-zero version word.
        let payload = [
            0x03, 0x02, 0x23, 0x07, 0x00, 0x01, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00,
        ];
        assert!(parse_container(&payload).is_none());
    }

    #[test]
    fn short_or_unaligned_payloads_are_not_recognised() {
        assert!(parse_container(&[0x03, 0x02, 0x23, 0x07]).is_none());
        let mut payload = vec![
            0x03, 0x02, 0x23, 0x07, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00,
        ];
        payload.push(b'x');
        assert!(parse_container(&payload).is_none());
    }

    #[test]
    fn foreign_magic_is_not_recognised() {
        let payload = [
            0xde, 0xad, 0xbe, 0xef, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
        ];
        assert!(parse_container(&payload).is_none());
    }
}
