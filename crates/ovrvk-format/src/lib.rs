//! Translation between the OpenGL format namespaces and `VkFormat`, plus
//! the per-format block metadata needed to size image data.
//!
//! Everything here is a pure function over static tables. Lookups that
//! miss return [`ash::vk::Format::UNDEFINED`] (or a zeroed
//! [`FormatSize`]); callers decide whether that is an error.

pub mod gl;
mod size;
mod tables;

use ash::vk;

/// Bits set in [`FormatSize::flags`].
pub mod format_flags {
    /// Components share machine words; `block_size` covers the packed unit.
    pub const PACKED: u32 = 1 << 0;
    /// Block-compressed; `block_*` are the codec's block dimensions.
    pub const COMPRESSED: u32 = 1 << 1;
}

/// Block shape and size of one texel block of a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatSize {
    pub flags: u32,
    /// Bytes per block (per pixel for uncompressed formats).
    pub block_size: u32,
    pub block_width: u32,
    pub block_height: u32,
    pub block_depth: u32,
}

/// Map a GL pixel `format`/`type` pair to the Vulkan format with the same
/// in-memory layout. Untabulated pairs yield `UNDEFINED`.
pub fn from_gl_format_type(format: u32, type_: u32) -> vk::Format {
    tables::FORMAT_TYPE_TABLE
        .iter()
        .find(|&&(f, t, _)| f == format && t == type_)
        .map(|&(_, _, out)| out)
        .unwrap_or(vk::Format::UNDEFINED)
}

/// Map a GL component type and arity to a Vulkan format, for callers that
/// describe data as "n components of type t".
pub fn from_gl_type(type_: u32, components: u32) -> vk::Format {
    tables::TYPE_COMPONENTS_TABLE
        .iter()
        .find(|&&(t, n, _)| t == type_ && n == components)
        .map(|&(_, _, out)| out)
        .unwrap_or(vk::Format::UNDEFINED)
}

/// Map a GL sized internal format to its Vulkan format.
pub fn from_gl_internal_format(internal_format: u32) -> vk::Format {
    tables::INTERNAL_FORMAT_TABLE
        .iter()
        .find(|&&(f, _)| f == internal_format)
        .map(|&(_, out)| out)
        .unwrap_or(vk::Format::UNDEFINED)
}

/// Block metadata for a format; zeroed for anything untabulated.
pub fn format_size(format: vk::Format) -> FormatSize {
    size::FORMAT_SIZE_TABLE
        .iter()
        .find(|&&(f, _)| f == format)
        .map(|&(_, out)| out)
        .unwrap_or_default()
}
