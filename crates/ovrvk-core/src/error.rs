use ash::vk;

#[derive(Debug, thiserror::Error)]
pub enum LayerError {
    #[error("loader chain info missing or malformed")]
    ChainMalformed,

    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),
}

impl LayerError {
    /// The `VkResult` this error surfaces as at the ABI boundary.
    pub fn to_vk(&self) -> vk::Result {
        match self {
            LayerError::ChainMalformed => vk::Result::ERROR_INITIALIZATION_FAILED,
            LayerError::ShaderCompile(_) => vk::Result::ERROR_INVALID_SHADER_NV,
        }
    }
}
