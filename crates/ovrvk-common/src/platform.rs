/// Returns the default config file path based on platform conventions.
/// Search order:
/// 1. System-wide config: `%PROGRAMDATA%\OvrVk\ovrvk.toml` (Windows) or
///    `/etc/ovrvk/ovrvk.toml` (Linux/macOS/Android)
/// 2. Local fallback: `./ovrvk.toml`
pub fn default_config_path() -> String {
    #[cfg(windows)]
    {
        let programdata = std::env::var("PROGRAMDATA")
            .unwrap_or_else(|_| r"C:\ProgramData".to_string());
        let system_path = format!(r"{}\OvrVk\ovrvk.toml", programdata);
        if std::path::Path::new(&system_path).exists() {
            return system_path;
        }
    }
    #[cfg(not(windows))]
    {
        let system_path = "/etc/ovrvk/ovrvk.toml";
        if std::path::Path::new(system_path).exists() {
            return system_path.to_string();
        }
    }
    "ovrvk.toml".to_string()
}

/// Returns the platform name string.
pub fn platform_name() -> &'static str {
    #[cfg(target_os = "windows")]
    { "windows" }
    #[cfg(target_os = "linux")]
    { "linux" }
    #[cfg(target_os = "android")]
    { "android" }
    #[cfg(target_os = "macos")]
    { "macos" }
    #[cfg(not(any(
        target_os = "windows",
        target_os = "linux",
        target_os = "android",
        target_os = "macos"
    )))]
    { "unknown" }
}
