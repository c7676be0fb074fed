//! Core plumbing shared by the OVR Vulkan layers.
//!
//! Both layers are structurally identical: they capture the next layer's
//! proc-addr getters from the loader's chain info, keep per-handle records
//! in hash-indexed registries, and forward everything they do not hook.
//! This crate owns that machinery; the layer crates own only their hooks.

pub mod base64;
pub mod chain;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod handle_map;
pub mod meta;
