use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Top-level layer configuration, loaded from ovrvk.toml.
///
/// Everything here defaults to the behaviour an application gets with no
/// config file at all; the file exists so a layer can be parked (forward
/// everything untouched) without editing the loader's layer lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvrVkConfig {
    #[serde(default)]
    pub glsl_shader: GlslShaderConfig,
    #[serde(default)]
    pub queue_muxer: QueueMuxerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlslShaderConfig {
    /// When false, shader payloads are forwarded verbatim, tagged or not.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueMuxerConfig {
    /// When false, queue counts are neither inflated nor clamped and no
    /// queue serialisation happens.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for OvrVkConfig {
    fn default() -> Self {
        Self {
            glsl_shader: GlslShaderConfig::default(),
            queue_muxer: QueueMuxerConfig::default(),
        }
    }
}

impl Default for GlslShaderConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for QueueMuxerConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl OvrVkConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: OvrVkConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from file if it exists, otherwise return defaults.
    pub fn load_or_default(path: &str) -> Self {
        Self::load(path).unwrap_or_default()
    }
}

static CONFIG: OnceLock<OvrVkConfig> = OnceLock::new();

/// Process-wide configuration, read once on first use.
pub fn get() -> &'static OvrVkConfig {
    CONFIG.get_or_init(|| {
        OvrVkConfig::load_or_default(&ovrvk_common::platform::default_config_path())
    })
}

fn default_true() -> bool {
    true
}
