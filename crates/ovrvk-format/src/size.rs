//! Per-format block metadata, the raw material for image-data size
//! arithmetic. Uncompressed formats are 1x1x1 blocks of one pixel.

use ash::vk::Format;

use crate::{format_flags, FormatSize};

const fn uncompressed(block_size: u32) -> FormatSize {
    FormatSize {
        flags: 0,
        block_size,
        block_width: 1,
        block_height: 1,
        block_depth: 1,
    }
}

const fn packed(block_size: u32) -> FormatSize {
    FormatSize {
        flags: format_flags::PACKED,
        block_size,
        block_width: 1,
        block_height: 1,
        block_depth: 1,
    }
}

const fn compressed(block_size: u32, block_width: u32, block_height: u32) -> FormatSize {
    FormatSize {
        flags: format_flags::COMPRESSED,
        block_size,
        block_width,
        block_height,
        block_depth: 1,
    }
}

pub(crate) static FORMAT_SIZE_TABLE: &[(Format, FormatSize)] = &[
    // 8-bit
    (Format::R8_UNORM, uncompressed(1)),
    (Format::R8_SNORM, uncompressed(1)),
    (Format::R8_UINT, uncompressed(1)),
    (Format::R8_SINT, uncompressed(1)),
    (Format::R8G8_UNORM, uncompressed(2)),
    (Format::R8G8_SNORM, uncompressed(2)),
    (Format::R8G8_UINT, uncompressed(2)),
    (Format::R8G8_SINT, uncompressed(2)),
    (Format::R8G8B8_UNORM, uncompressed(3)),
    (Format::R8G8B8_SNORM, uncompressed(3)),
    (Format::R8G8B8_UINT, uncompressed(3)),
    (Format::R8G8B8_SINT, uncompressed(3)),
    (Format::R8G8B8_SRGB, uncompressed(3)),
    (Format::B8G8R8_UNORM, uncompressed(3)),
    (Format::B8G8R8_SNORM, uncompressed(3)),
    (Format::B8G8R8_UINT, uncompressed(3)),
    (Format::B8G8R8_SINT, uncompressed(3)),
    (Format::R8G8B8A8_UNORM, uncompressed(4)),
    (Format::R8G8B8A8_SNORM, uncompressed(4)),
    (Format::R8G8B8A8_UINT, uncompressed(4)),
    (Format::R8G8B8A8_SINT, uncompressed(4)),
    (Format::R8G8B8A8_SRGB, uncompressed(4)),
    (Format::B8G8R8A8_UNORM, uncompressed(4)),
    (Format::B8G8R8A8_SNORM, uncompressed(4)),
    (Format::B8G8R8A8_UINT, uncompressed(4)),
    (Format::B8G8R8A8_SINT, uncompressed(4)),
    // 16-bit
    (Format::R16_UNORM, uncompressed(2)),
    (Format::R16_SNORM, uncompressed(2)),
    (Format::R16_UINT, uncompressed(2)),
    (Format::R16_SINT, uncompressed(2)),
    (Format::R16_SFLOAT, uncompressed(2)),
    (Format::R16G16_UNORM, uncompressed(4)),
    (Format::R16G16_SNORM, uncompressed(4)),
    (Format::R16G16_UINT, uncompressed(4)),
    (Format::R16G16_SINT, uncompressed(4)),
    (Format::R16G16_SFLOAT, uncompressed(4)),
    (Format::R16G16B16_UNORM, uncompressed(6)),
    (Format::R16G16B16_SNORM, uncompressed(6)),
    (Format::R16G16B16_UINT, uncompressed(6)),
    (Format::R16G16B16_SINT, uncompressed(6)),
    (Format::R16G16B16_SFLOAT, uncompressed(6)),
    (Format::R16G16B16A16_UNORM, uncompressed(8)),
    (Format::R16G16B16A16_SNORM, uncompressed(8)),
    (Format::R16G16B16A16_UINT, uncompressed(8)),
    (Format::R16G16B16A16_SINT, uncompressed(8)),
    (Format::R16G16B16A16_SFLOAT, uncompressed(8)),
    // 32-bit
    (Format::R32_UINT, uncompressed(4)),
    (Format::R32_SINT, uncompressed(4)),
    (Format::R32_SFLOAT, uncompressed(4)),
    (Format::R32G32_UINT, uncompressed(8)),
    (Format::R32G32_SINT, uncompressed(8)),
    (Format::R32G32_SFLOAT, uncompressed(8)),
    (Format::R32G32B32_UINT, uncompressed(12)),
    (Format::R32G32B32_SINT, uncompressed(12)),
    (Format::R32G32B32_SFLOAT, uncompressed(12)),
    (Format::R32G32B32A32_UINT, uncompressed(16)),
    (Format::R32G32B32A32_SINT, uncompressed(16)),
    (Format::R32G32B32A32_SFLOAT, uncompressed(16)),
    // Packed
    (Format::R5G6B5_UNORM_PACK16, packed(2)),
    (Format::R4G4B4A4_UNORM_PACK16, packed(2)),
    (Format::R5G5B5A1_UNORM_PACK16, packed(2)),
    (Format::A2B10G10R10_UNORM_PACK32, packed(4)),
    (Format::A2B10G10R10_UINT_PACK32, packed(4)),
    (Format::B10G11R11_UFLOAT_PACK32, packed(4)),
    (Format::E5B9G9R9_UFLOAT_PACK32, packed(4)),
    (Format::X8_D24_UNORM_PACK32, packed(4)),
    // Depth / stencil
    (Format::D16_UNORM, uncompressed(2)),
    (Format::D32_SFLOAT, uncompressed(4)),
    (Format::S8_UINT, uncompressed(1)),
    (Format::D24_UNORM_S8_UINT, uncompressed(4)),
    (Format::D32_SFLOAT_S8_UINT, uncompressed(8)),
    // BC
    (Format::BC1_RGB_UNORM_BLOCK, compressed(8, 4, 4)),
    (Format::BC1_RGB_SRGB_BLOCK, compressed(8, 4, 4)),
    (Format::BC1_RGBA_UNORM_BLOCK, compressed(8, 4, 4)),
    (Format::BC1_RGBA_SRGB_BLOCK, compressed(8, 4, 4)),
    (Format::BC2_UNORM_BLOCK, compressed(16, 4, 4)),
    (Format::BC2_SRGB_BLOCK, compressed(16, 4, 4)),
    (Format::BC3_UNORM_BLOCK, compressed(16, 4, 4)),
    (Format::BC3_SRGB_BLOCK, compressed(16, 4, 4)),
    (Format::BC4_UNORM_BLOCK, compressed(8, 4, 4)),
    (Format::BC4_SNORM_BLOCK, compressed(8, 4, 4)),
    (Format::BC5_UNORM_BLOCK, compressed(16, 4, 4)),
    (Format::BC5_SNORM_BLOCK, compressed(16, 4, 4)),
    (Format::BC6H_UFLOAT_BLOCK, compressed(16, 4, 4)),
    (Format::BC6H_SFLOAT_BLOCK, compressed(16, 4, 4)),
    (Format::BC7_UNORM_BLOCK, compressed(16, 4, 4)),
    (Format::BC7_SRGB_BLOCK, compressed(16, 4, 4)),
    // ETC2 / EAC
    (Format::ETC2_R8G8B8_UNORM_BLOCK, compressed(8, 4, 4)),
    (Format::ETC2_R8G8B8_SRGB_BLOCK, compressed(8, 4, 4)),
    (Format::ETC2_R8G8B8A1_UNORM_BLOCK, compressed(8, 4, 4)),
    (Format::ETC2_R8G8B8A1_SRGB_BLOCK, compressed(8, 4, 4)),
    (Format::ETC2_R8G8B8A8_UNORM_BLOCK, compressed(16, 4, 4)),
    (Format::ETC2_R8G8B8A8_SRGB_BLOCK, compressed(16, 4, 4)),
    (Format::EAC_R11_UNORM_BLOCK, compressed(8, 4, 4)),
    (Format::EAC_R11_SNORM_BLOCK, compressed(8, 4, 4)),
    (Format::EAC_R11G11_UNORM_BLOCK, compressed(16, 4, 4)),
    (Format::EAC_R11G11_SNORM_BLOCK, compressed(16, 4, 4)),
    // ASTC 2D
    (Format::ASTC_4X4_UNORM_BLOCK, compressed(16, 4, 4)),
    (Format::ASTC_4X4_SRGB_BLOCK, compressed(16, 4, 4)),
    (Format::ASTC_5X4_UNORM_BLOCK, compressed(16, 5, 4)),
    (Format::ASTC_5X4_SRGB_BLOCK, compressed(16, 5, 4)),
    (Format::ASTC_5X5_UNORM_BLOCK, compressed(16, 5, 5)),
    (Format::ASTC_5X5_SRGB_BLOCK, compressed(16, 5, 5)),
    (Format::ASTC_6X5_UNORM_BLOCK, compressed(16, 6, 5)),
    (Format::ASTC_6X5_SRGB_BLOCK, compressed(16, 6, 5)),
    (Format::ASTC_6X6_UNORM_BLOCK, compressed(16, 6, 6)),
    (Format::ASTC_6X6_SRGB_BLOCK, compressed(16, 6, 6)),
    (Format::ASTC_8X5_UNORM_BLOCK, compressed(16, 8, 5)),
    (Format::ASTC_8X5_SRGB_BLOCK, compressed(16, 8, 5)),
    (Format::ASTC_8X6_UNORM_BLOCK, compressed(16, 8, 6)),
    (Format::ASTC_8X6_SRGB_BLOCK, compressed(16, 8, 6)),
    (Format::ASTC_8X8_UNORM_BLOCK, compressed(16, 8, 8)),
    (Format::ASTC_8X8_SRGB_BLOCK, compressed(16, 8, 8)),
    (Format::ASTC_10X5_UNORM_BLOCK, compressed(16, 10, 5)),
    (Format::ASTC_10X5_SRGB_BLOCK, compressed(16, 10, 5)),
    (Format::ASTC_10X6_UNORM_BLOCK, compressed(16, 10, 6)),
    (Format::ASTC_10X6_SRGB_BLOCK, compressed(16, 10, 6)),
    (Format::ASTC_10X8_UNORM_BLOCK, compressed(16, 10, 8)),
    (Format::ASTC_10X8_SRGB_BLOCK, compressed(16, 10, 8)),
    (Format::ASTC_10X10_UNORM_BLOCK, compressed(16, 10, 10)),
    (Format::ASTC_10X10_SRGB_BLOCK, compressed(16, 10, 10)),
    (Format::ASTC_12X10_UNORM_BLOCK, compressed(16, 12, 10)),
    (Format::ASTC_12X10_SRGB_BLOCK, compressed(16, 12, 10)),
    (Format::ASTC_12X12_UNORM_BLOCK, compressed(16, 12, 12)),
    (Format::ASTC_12X12_SRGB_BLOCK, compressed(16, 12, 12)),
];
