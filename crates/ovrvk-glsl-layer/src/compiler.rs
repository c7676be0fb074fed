//! The GLSL-to-SPIR-V back-end wrapper.
//!
//! The back-end is glslang via shaderc. Each call builds a fresh compiler
//! with the same fixed resource-limit set; nothing is cached across calls.

use ash::vk;
use ovrvk_core::error::LayerError;

/// The limit set handed to every compilation. Generous enough that no
/// shader a mobile driver could run is rejected on limits alone.
const RESOURCE_LIMITS: &[(shaderc::Limit, i32)] = &[
    (shaderc::Limit::MaxLights, 32),
    (shaderc::Limit::MaxClipPlanes, 6),
    (shaderc::Limit::MaxTextureUnits, 32),
    (shaderc::Limit::MaxTextureCoords, 32),
    (shaderc::Limit::MaxVertexAttribs, 64),
    (shaderc::Limit::MaxVertexUniformComponents, 4096),
    (shaderc::Limit::MaxVaryingFloats, 64),
    (shaderc::Limit::MaxVertexTextureImageUnits, 32),
    (shaderc::Limit::MaxCombinedTextureImageUnits, 80),
    (shaderc::Limit::MaxTextureImageUnits, 32),
    (shaderc::Limit::MaxFragmentUniformComponents, 4096),
    (shaderc::Limit::MaxDrawBuffers, 32),
    (shaderc::Limit::MaxVertexUniformVectors, 128),
    (shaderc::Limit::MaxVaryingVectors, 8),
    (shaderc::Limit::MaxFragmentUniformVectors, 16),
    (shaderc::Limit::MaxVertexOutputVectors, 16),
    (shaderc::Limit::MaxFragmentInputVectors, 15),
    (shaderc::Limit::MinProgramTexelOffset, -8),
    (shaderc::Limit::MaxProgramTexelOffset, 7),
    (shaderc::Limit::MaxClipDistances, 8),
    (shaderc::Limit::MaxComputeWorkGroupCountX, 65535),
    (shaderc::Limit::MaxComputeWorkGroupCountY, 65535),
    (shaderc::Limit::MaxComputeWorkGroupCountZ, 65535),
    (shaderc::Limit::MaxComputeWorkGroupSizeX, 1024),
    (shaderc::Limit::MaxComputeWorkGroupSizeY, 1024),
    (shaderc::Limit::MaxComputeWorkGroupSizeZ, 64),
    (shaderc::Limit::MaxComputeUniformComponents, 1024),
    (shaderc::Limit::MaxComputeTextureImageUnits, 16),
    (shaderc::Limit::MaxComputeImageUniforms, 8),
    (shaderc::Limit::MaxGeometryOutputVertices, 256),
    (shaderc::Limit::MaxTessGenLevel, 64),
    (shaderc::Limit::MaxPatchVertices, 32),
    (shaderc::Limit::MaxViewports, 16),
    (shaderc::Limit::MaxSamples, 4),
];

/// Map a `VkShaderStageFlagBits` single-bit value to the back-end's stage.
fn shader_kind(stage_word: u32) -> Option<shaderc::ShaderKind> {
    let stage = vk::ShaderStageFlags::from_raw(stage_word);
    if stage == vk::ShaderStageFlags::VERTEX {
        Some(shaderc::ShaderKind::Vertex)
    } else if stage == vk::ShaderStageFlags::TESSELLATION_CONTROL {
        Some(shaderc::ShaderKind::TessControl)
    } else if stage == vk::ShaderStageFlags::TESSELLATION_EVALUATION {
        Some(shaderc::ShaderKind::TessEvaluation)
    } else if stage == vk::ShaderStageFlags::GEOMETRY {
        Some(shaderc::ShaderKind::Geometry)
    } else if stage == vk::ShaderStageFlags::FRAGMENT {
        Some(shaderc::ShaderKind::Fragment)
    } else if stage == vk::ShaderStageFlags::COMPUTE {
        Some(shaderc::ShaderKind::Compute)
    } else {
        None
    }
}

/// Compile the payload of a recognised container: stage word plus UTF-8
/// GLSL source bytes.
pub fn compile_tagged(stage_word: u32, source: &[u8]) -> Result<Vec<u32>, LayerError> {
    let kind = shader_kind(stage_word)
        .ok_or_else(|| LayerError::ShaderCompile(format!("unknown stage {stage_word:#x}")))?;
    let source = std::str::from_utf8(source)
        .map_err(|err| LayerError::ShaderCompile(format!("source is not UTF-8: {err}")))?;
    compile_glsl(source, kind)
}

/// Lower GLSL to a SPIR-V word stream.
pub fn compile_glsl(source: &str, kind: shaderc::ShaderKind) -> Result<Vec<u32>, LayerError> {
    let compiler = shaderc::Compiler::new()
        .ok_or_else(|| LayerError::ShaderCompile("compiler unavailable".to_string()))?;
    let mut options = shaderc::CompileOptions::new()
        .ok_or_else(|| LayerError::ShaderCompile("compile options unavailable".to_string()))?;
    options.set_target_env(
        shaderc::TargetEnv::Vulkan,
        shaderc::EnvVersion::Vulkan1_0 as u32,
    );
    for &(limit, value) in RESOURCE_LIMITS {
        options.set_limit(limit, value);
    }

    let artifact = compiler
        .compile_into_spirv(source, kind, "shader.glsl", "main", Some(&options))
        .map_err(|err| LayerError::ShaderCompile(err.to_string()))?;
    Ok(artifact.as_binary().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::SPIRV_MAGIC;

    #[test]
    fn stage_words_map_to_kinds() {
        assert!(matches!(shader_kind(0x01), Some(shaderc::ShaderKind::Vertex)));
        assert!(matches!(shader_kind(0x02), Some(shaderc::ShaderKind::TessControl)));
        assert!(matches!(shader_kind(0x04), Some(shaderc::ShaderKind::TessEvaluation)));
        assert!(matches!(shader_kind(0x08), Some(shaderc::ShaderKind::Geometry)));
        assert!(matches!(shader_kind(0x10), Some(shaderc::ShaderKind::Fragment)));
        assert!(matches!(shader_kind(0x20), Some(shaderc::ShaderKind::Compute)));
        assert!(shader_kind(0x40).is_none());
        assert!(shader_kind(0x03).is_none());
    }

    #[test]
    fn compiles_minimal_vertex_shader() {
        let words = compile_glsl("#version 450\nvoid main() {}\n", shaderc::ShaderKind::Vertex)
            .expect("compile");
        assert_eq!(words[0], SPIRV_MAGIC);
        assert_ne!(words[1], 0);
    }

    #[test]
    fn rejects_malformed_source() {
        let err = compile_glsl("this is not glsl", shaderc::ShaderKind::Vertex)
            .expect_err("must fail");
        assert!(matches!(err, LayerError::ShaderCompile(_)));
    }

    #[test]
    fn rejects_non_utf8_and_unknown_stage() {
        assert!(compile_tagged(0x01, &[0xff, 0xfe, 0x00]).is_err());
        assert!(compile_tagged(0x1234, b"#version 450\nvoid main() {}\n").is_err());
    }
}
