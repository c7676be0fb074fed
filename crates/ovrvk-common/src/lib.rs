//! Shared bits used by both layers: logging setup and platform paths.

pub mod logging;
pub mod platform;
