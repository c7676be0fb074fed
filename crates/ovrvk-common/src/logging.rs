use tracing_subscriber::{fmt, EnvFilter};

/// Initialize structured logging with environment filter.
/// Set OVRVK_LOG=debug (or trace, info, warn, error) for verbosity control.
///
/// A layer is loaded into someone else's process, so this must be both
/// idempotent and quiet by default; the host may have installed its own
/// global subscriber already, in which case ours loses and that is fine.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env("OVRVK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .try_init();
}
