//! The translation tables themselves. Pure data; the lookup functions in
//! the crate root scan these slices and fall back to `UNDEFINED`.

use ash::vk::Format;

use crate::gl::*;

/// `(GL pixel format, GL component type) -> VkFormat`.
pub(crate) static FORMAT_TYPE_TABLE: &[(u32, u32, Format)] = &[
    // 8-bit unsigned normalised / integer
    (GL_RED, GL_UNSIGNED_BYTE, Format::R8_UNORM),
    (GL_RG, GL_UNSIGNED_BYTE, Format::R8G8_UNORM),
    (GL_RGB, GL_UNSIGNED_BYTE, Format::R8G8B8_UNORM),
    (GL_BGR, GL_UNSIGNED_BYTE, Format::B8G8R8_UNORM),
    (GL_RGBA, GL_UNSIGNED_BYTE, Format::R8G8B8A8_UNORM),
    (GL_BGRA, GL_UNSIGNED_BYTE, Format::B8G8R8A8_UNORM),
    (GL_RED_INTEGER, GL_UNSIGNED_BYTE, Format::R8_UINT),
    (GL_RG_INTEGER, GL_UNSIGNED_BYTE, Format::R8G8_UINT),
    (GL_RGB_INTEGER, GL_UNSIGNED_BYTE, Format::R8G8B8_UINT),
    (GL_BGR_INTEGER, GL_UNSIGNED_BYTE, Format::B8G8R8_UINT),
    (GL_RGBA_INTEGER, GL_UNSIGNED_BYTE, Format::R8G8B8A8_UINT),
    (GL_BGRA_INTEGER, GL_UNSIGNED_BYTE, Format::B8G8R8A8_UINT),
    (GL_STENCIL_INDEX, GL_UNSIGNED_BYTE, Format::S8_UINT),
    // 8-bit signed
    (GL_RED, GL_BYTE, Format::R8_SNORM),
    (GL_RG, GL_BYTE, Format::R8G8_SNORM),
    (GL_RGB, GL_BYTE, Format::R8G8B8_SNORM),
    (GL_BGR, GL_BYTE, Format::B8G8R8_SNORM),
    (GL_RGBA, GL_BYTE, Format::R8G8B8A8_SNORM),
    (GL_BGRA, GL_BYTE, Format::B8G8R8A8_SNORM),
    (GL_RED_INTEGER, GL_BYTE, Format::R8_SINT),
    (GL_RG_INTEGER, GL_BYTE, Format::R8G8_SINT),
    (GL_RGB_INTEGER, GL_BYTE, Format::R8G8B8_SINT),
    (GL_BGR_INTEGER, GL_BYTE, Format::B8G8R8_SINT),
    (GL_RGBA_INTEGER, GL_BYTE, Format::R8G8B8A8_SINT),
    (GL_BGRA_INTEGER, GL_BYTE, Format::B8G8R8A8_SINT),
    // 16-bit unsigned
    (GL_RED, GL_UNSIGNED_SHORT, Format::R16_UNORM),
    (GL_RG, GL_UNSIGNED_SHORT, Format::R16G16_UNORM),
    (GL_RGB, GL_UNSIGNED_SHORT, Format::R16G16B16_UNORM),
    (GL_RGBA, GL_UNSIGNED_SHORT, Format::R16G16B16A16_UNORM),
    (GL_RED_INTEGER, GL_UNSIGNED_SHORT, Format::R16_UINT),
    (GL_RG_INTEGER, GL_UNSIGNED_SHORT, Format::R16G16_UINT),
    (GL_RGB_INTEGER, GL_UNSIGNED_SHORT, Format::R16G16B16_UINT),
    (GL_RGBA_INTEGER, GL_UNSIGNED_SHORT, Format::R16G16B16A16_UINT),
    (GL_DEPTH_COMPONENT, GL_UNSIGNED_SHORT, Format::D16_UNORM),
    // 16-bit signed
    (GL_RED, GL_SHORT, Format::R16_SNORM),
    (GL_RG, GL_SHORT, Format::R16G16_SNORM),
    (GL_RGB, GL_SHORT, Format::R16G16B16_SNORM),
    (GL_RGBA, GL_SHORT, Format::R16G16B16A16_SNORM),
    (GL_RED_INTEGER, GL_SHORT, Format::R16_SINT),
    (GL_RG_INTEGER, GL_SHORT, Format::R16G16_SINT),
    (GL_RGB_INTEGER, GL_SHORT, Format::R16G16B16_SINT),
    (GL_RGBA_INTEGER, GL_SHORT, Format::R16G16B16A16_SINT),
    // 16-bit float
    (GL_RED, GL_HALF_FLOAT, Format::R16_SFLOAT),
    (GL_RG, GL_HALF_FLOAT, Format::R16G16_SFLOAT),
    (GL_RGB, GL_HALF_FLOAT, Format::R16G16B16_SFLOAT),
    (GL_RGBA, GL_HALF_FLOAT, Format::R16G16B16A16_SFLOAT),
    // 32-bit unsigned
    (GL_RED, GL_UNSIGNED_INT, Format::R32_UINT),
    (GL_RG, GL_UNSIGNED_INT, Format::R32G32_UINT),
    (GL_RGB, GL_UNSIGNED_INT, Format::R32G32B32_UINT),
    (GL_RGBA, GL_UNSIGNED_INT, Format::R32G32B32A32_UINT),
    (GL_RED_INTEGER, GL_UNSIGNED_INT, Format::R32_UINT),
    (GL_RG_INTEGER, GL_UNSIGNED_INT, Format::R32G32_UINT),
    (GL_RGB_INTEGER, GL_UNSIGNED_INT, Format::R32G32B32_UINT),
    (GL_RGBA_INTEGER, GL_UNSIGNED_INT, Format::R32G32B32A32_UINT),
    (GL_DEPTH_COMPONENT, GL_UNSIGNED_INT, Format::X8_D24_UNORM_PACK32),
    // 32-bit signed
    (GL_RED, GL_INT, Format::R32_SINT),
    (GL_RG, GL_INT, Format::R32G32_SINT),
    (GL_RGB, GL_INT, Format::R32G32B32_SINT),
    (GL_RGBA, GL_INT, Format::R32G32B32A32_SINT),
    (GL_RED_INTEGER, GL_INT, Format::R32_SINT),
    (GL_RG_INTEGER, GL_INT, Format::R32G32_SINT),
    (GL_RGB_INTEGER, GL_INT, Format::R32G32B32_SINT),
    (GL_RGBA_INTEGER, GL_INT, Format::R32G32B32A32_SINT),
    // 32-bit float
    (GL_RED, GL_FLOAT, Format::R32_SFLOAT),
    (GL_RG, GL_FLOAT, Format::R32G32_SFLOAT),
    (GL_RGB, GL_FLOAT, Format::R32G32B32_SFLOAT),
    (GL_RGBA, GL_FLOAT, Format::R32G32B32A32_SFLOAT),
    (GL_DEPTH_COMPONENT, GL_FLOAT, Format::D32_SFLOAT),
    // Combined depth-stencil
    (GL_DEPTH_STENCIL, GL_UNSIGNED_INT_24_8, Format::D24_UNORM_S8_UINT),
    (
        GL_DEPTH_STENCIL,
        GL_FLOAT_32_UNSIGNED_INT_24_8_REV,
        Format::D32_SFLOAT_S8_UINT,
    ),
];

/// `(GL component type, component count) -> VkFormat`, the
/// vertex-attribute-style lookup. 8/16-bit integers resolve to the
/// normalised formats, 32-bit integers to the integer formats.
pub(crate) static TYPE_COMPONENTS_TABLE: &[(u32, u32, Format)] = &[
    (GL_UNSIGNED_BYTE, 1, Format::R8_UNORM),
    (GL_UNSIGNED_BYTE, 2, Format::R8G8_UNORM),
    (GL_UNSIGNED_BYTE, 3, Format::R8G8B8_UNORM),
    (GL_UNSIGNED_BYTE, 4, Format::R8G8B8A8_UNORM),
    (GL_BYTE, 1, Format::R8_SNORM),
    (GL_BYTE, 2, Format::R8G8_SNORM),
    (GL_BYTE, 3, Format::R8G8B8_SNORM),
    (GL_BYTE, 4, Format::R8G8B8A8_SNORM),
    (GL_UNSIGNED_SHORT, 1, Format::R16_UNORM),
    (GL_UNSIGNED_SHORT, 2, Format::R16G16_UNORM),
    (GL_UNSIGNED_SHORT, 3, Format::R16G16B16_UNORM),
    (GL_UNSIGNED_SHORT, 4, Format::R16G16B16A16_UNORM),
    (GL_SHORT, 1, Format::R16_SNORM),
    (GL_SHORT, 2, Format::R16G16_SNORM),
    (GL_SHORT, 3, Format::R16G16B16_SNORM),
    (GL_SHORT, 4, Format::R16G16B16A16_SNORM),
    (GL_HALF_FLOAT, 1, Format::R16_SFLOAT),
    (GL_HALF_FLOAT, 2, Format::R16G16_SFLOAT),
    (GL_HALF_FLOAT, 3, Format::R16G16B16_SFLOAT),
    (GL_HALF_FLOAT, 4, Format::R16G16B16A16_SFLOAT),
    (GL_UNSIGNED_INT, 1, Format::R32_UINT),
    (GL_UNSIGNED_INT, 2, Format::R32G32_UINT),
    (GL_UNSIGNED_INT, 3, Format::R32G32B32_UINT),
    (GL_UNSIGNED_INT, 4, Format::R32G32B32A32_UINT),
    (GL_INT, 1, Format::R32_SINT),
    (GL_INT, 2, Format::R32G32_SINT),
    (GL_INT, 3, Format::R32G32B32_SINT),
    (GL_INT, 4, Format::R32G32B32A32_SINT),
    (GL_FLOAT, 1, Format::R32_SFLOAT),
    (GL_FLOAT, 2, Format::R32G32_SFLOAT),
    (GL_FLOAT, 3, Format::R32G32B32_SFLOAT),
    (GL_FLOAT, 4, Format::R32G32B32A32_SFLOAT),
];

/// `GL sized internal format -> VkFormat`.
pub(crate) static INTERNAL_FORMAT_TABLE: &[(u32, Format)] = &[
    // Unsized legacy
    (GL_RGB, Format::R8G8B8_UNORM),
    (GL_RGBA, Format::R8G8B8A8_UNORM),
    // 8-bit
    (GL_R8, Format::R8_UNORM),
    (GL_RG8, Format::R8G8_UNORM),
    (GL_RGB8, Format::R8G8B8_UNORM),
    (GL_RGBA8, Format::R8G8B8A8_UNORM),
    (GL_R8_SNORM, Format::R8_SNORM),
    (GL_RG8_SNORM, Format::R8G8_SNORM),
    (GL_RGB8_SNORM, Format::R8G8B8_SNORM),
    (GL_RGBA8_SNORM, Format::R8G8B8A8_SNORM),
    (GL_R8UI, Format::R8_UINT),
    (GL_RG8UI, Format::R8G8_UINT),
    (GL_RGB8UI, Format::R8G8B8_UINT),
    (GL_RGBA8UI, Format::R8G8B8A8_UINT),
    (GL_R8I, Format::R8_SINT),
    (GL_RG8I, Format::R8G8_SINT),
    (GL_RGB8I, Format::R8G8B8_SINT),
    (GL_RGBA8I, Format::R8G8B8A8_SINT),
    (GL_SRGB8, Format::R8G8B8_SRGB),
    (GL_SRGB8_ALPHA8, Format::R8G8B8A8_SRGB),
    // 16-bit
    (GL_R16, Format::R16_UNORM),
    (GL_RG16, Format::R16G16_UNORM),
    (GL_RGB16, Format::R16G16B16_UNORM),
    (GL_RGBA16, Format::R16G16B16A16_UNORM),
    (GL_R16_SNORM, Format::R16_SNORM),
    (GL_RG16_SNORM, Format::R16G16_SNORM),
    (GL_RGB16_SNORM, Format::R16G16B16_SNORM),
    (GL_RGBA16_SNORM, Format::R16G16B16A16_SNORM),
    (GL_R16UI, Format::R16_UINT),
    (GL_RG16UI, Format::R16G16_UINT),
    (GL_RGB16UI, Format::R16G16B16_UINT),
    (GL_RGBA16UI, Format::R16G16B16A16_UINT),
    (GL_R16I, Format::R16_SINT),
    (GL_RG16I, Format::R16G16_SINT),
    (GL_RGB16I, Format::R16G16B16_SINT),
    (GL_RGBA16I, Format::R16G16B16A16_SINT),
    (GL_R16F, Format::R16_SFLOAT),
    (GL_RG16F, Format::R16G16_SFLOAT),
    (GL_RGB16F, Format::R16G16B16_SFLOAT),
    (GL_RGBA16F, Format::R16G16B16A16_SFLOAT),
    // 32-bit
    (GL_R32UI, Format::R32_UINT),
    (GL_RG32UI, Format::R32G32_UINT),
    (GL_RGB32UI, Format::R32G32B32_UINT),
    (GL_RGBA32UI, Format::R32G32B32A32_UINT),
    (GL_R32I, Format::R32_SINT),
    (GL_RG32I, Format::R32G32_SINT),
    (GL_RGB32I, Format::R32G32B32_SINT),
    (GL_RGBA32I, Format::R32G32B32A32_SINT),
    (GL_R32F, Format::R32_SFLOAT),
    (GL_RG32F, Format::R32G32_SFLOAT),
    (GL_RGB32F, Format::R32G32B32_SFLOAT),
    (GL_RGBA32F, Format::R32G32B32A32_SFLOAT),
    // Packed
    (GL_RGB565, Format::R5G6B5_UNORM_PACK16),
    (GL_RGBA4, Format::R4G4B4A4_UNORM_PACK16),
    (GL_RGB5_A1, Format::R5G5B5A1_UNORM_PACK16),
    (GL_RGB10_A2, Format::A2B10G10R10_UNORM_PACK32),
    (GL_RGB10_A2UI, Format::A2B10G10R10_UINT_PACK32),
    (GL_R11F_G11F_B10F, Format::B10G11R11_UFLOAT_PACK32),
    (GL_RGB9_E5, Format::E5B9G9R9_UFLOAT_PACK32),
    // S3TC
    (GL_COMPRESSED_RGB_S3TC_DXT1_EXT, Format::BC1_RGB_UNORM_BLOCK),
    (GL_COMPRESSED_RGBA_S3TC_DXT1_EXT, Format::BC1_RGBA_UNORM_BLOCK),
    (GL_COMPRESSED_RGBA_S3TC_DXT3_EXT, Format::BC2_UNORM_BLOCK),
    (GL_COMPRESSED_RGBA_S3TC_DXT5_EXT, Format::BC3_UNORM_BLOCK),
    (GL_COMPRESSED_SRGB_S3TC_DXT1_EXT, Format::BC1_RGB_SRGB_BLOCK),
    (GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT1_EXT, Format::BC1_RGBA_SRGB_BLOCK),
    (GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT3_EXT, Format::BC2_SRGB_BLOCK),
    (GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT5_EXT, Format::BC3_SRGB_BLOCK),
    // RGTC
    (GL_COMPRESSED_RED_RGTC1, Format::BC4_UNORM_BLOCK),
    (GL_COMPRESSED_SIGNED_RED_RGTC1, Format::BC4_SNORM_BLOCK),
    (GL_COMPRESSED_RG_RGTC2, Format::BC5_UNORM_BLOCK),
    (GL_COMPRESSED_SIGNED_RG_RGTC2, Format::BC5_SNORM_BLOCK),
    // BPTC
    (GL_COMPRESSED_RGBA_BPTC_UNORM, Format::BC7_UNORM_BLOCK),
    (GL_COMPRESSED_SRGB_ALPHA_BPTC_UNORM, Format::BC7_SRGB_BLOCK),
    (GL_COMPRESSED_RGB_BPTC_SIGNED_FLOAT, Format::BC6H_SFLOAT_BLOCK),
    (GL_COMPRESSED_RGB_BPTC_UNSIGNED_FLOAT, Format::BC6H_UFLOAT_BLOCK),
    // ETC2 / EAC
    (GL_COMPRESSED_RGB8_ETC2, Format::ETC2_R8G8B8_UNORM_BLOCK),
    (GL_COMPRESSED_SRGB8_ETC2, Format::ETC2_R8G8B8_SRGB_BLOCK),
    (
        GL_COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2,
        Format::ETC2_R8G8B8A1_UNORM_BLOCK,
    ),
    (
        GL_COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2,
        Format::ETC2_R8G8B8A1_SRGB_BLOCK,
    ),
    (GL_COMPRESSED_RGBA8_ETC2_EAC, Format::ETC2_R8G8B8A8_UNORM_BLOCK),
    (GL_COMPRESSED_SRGB8_ALPHA8_ETC2_EAC, Format::ETC2_R8G8B8A8_SRGB_BLOCK),
    (GL_COMPRESSED_R11_EAC, Format::EAC_R11_UNORM_BLOCK),
    (GL_COMPRESSED_SIGNED_R11_EAC, Format::EAC_R11_SNORM_BLOCK),
    (GL_COMPRESSED_RG11_EAC, Format::EAC_R11G11_UNORM_BLOCK),
    (GL_COMPRESSED_SIGNED_RG11_EAC, Format::EAC_R11G11_SNORM_BLOCK),
    // ASTC 2D
    (GL_COMPRESSED_RGBA_ASTC_4X4_KHR, Format::ASTC_4X4_UNORM_BLOCK),
    (GL_COMPRESSED_RGBA_ASTC_5X4_KHR, Format::ASTC_5X4_UNORM_BLOCK),
    (GL_COMPRESSED_RGBA_ASTC_5X5_KHR, Format::ASTC_5X5_UNORM_BLOCK),
    (GL_COMPRESSED_RGBA_ASTC_6X5_KHR, Format::ASTC_6X5_UNORM_BLOCK),
    (GL_COMPRESSED_RGBA_ASTC_6X6_KHR, Format::ASTC_6X6_UNORM_BLOCK),
    (GL_COMPRESSED_RGBA_ASTC_8X5_KHR, Format::ASTC_8X5_UNORM_BLOCK),
    (GL_COMPRESSED_RGBA_ASTC_8X6_KHR, Format::ASTC_8X6_UNORM_BLOCK),
    (GL_COMPRESSED_RGBA_ASTC_8X8_KHR, Format::ASTC_8X8_UNORM_BLOCK),
    (GL_COMPRESSED_RGBA_ASTC_10X5_KHR, Format::ASTC_10X5_UNORM_BLOCK),
    (GL_COMPRESSED_RGBA_ASTC_10X6_KHR, Format::ASTC_10X6_UNORM_BLOCK),
    (GL_COMPRESSED_RGBA_ASTC_10X8_KHR, Format::ASTC_10X8_UNORM_BLOCK),
    (GL_COMPRESSED_RGBA_ASTC_10X10_KHR, Format::ASTC_10X10_UNORM_BLOCK),
    (GL_COMPRESSED_RGBA_ASTC_12X10_KHR, Format::ASTC_12X10_UNORM_BLOCK),
    (GL_COMPRESSED_RGBA_ASTC_12X12_KHR, Format::ASTC_12X12_UNORM_BLOCK),
    (GL_COMPRESSED_SRGB8_ALPHA8_ASTC_4X4_KHR, Format::ASTC_4X4_SRGB_BLOCK),
    (GL_COMPRESSED_SRGB8_ALPHA8_ASTC_5X4_KHR, Format::ASTC_5X4_SRGB_BLOCK),
    (GL_COMPRESSED_SRGB8_ALPHA8_ASTC_5X5_KHR, Format::ASTC_5X5_SRGB_BLOCK),
    (GL_COMPRESSED_SRGB8_ALPHA8_ASTC_6X5_KHR, Format::ASTC_6X5_SRGB_BLOCK),
    (GL_COMPRESSED_SRGB8_ALPHA8_ASTC_6X6_KHR, Format::ASTC_6X6_SRGB_BLOCK),
    (GL_COMPRESSED_SRGB8_ALPHA8_ASTC_8X5_KHR, Format::ASTC_8X5_SRGB_BLOCK),
    (GL_COMPRESSED_SRGB8_ALPHA8_ASTC_8X6_KHR, Format::ASTC_8X6_SRGB_BLOCK),
    (GL_COMPRESSED_SRGB8_ALPHA8_ASTC_8X8_KHR, Format::ASTC_8X8_SRGB_BLOCK),
    (GL_COMPRESSED_SRGB8_ALPHA8_ASTC_10X5_KHR, Format::ASTC_10X5_SRGB_BLOCK),
    (GL_COMPRESSED_SRGB8_ALPHA8_ASTC_10X6_KHR, Format::ASTC_10X6_SRGB_BLOCK),
    (GL_COMPRESSED_SRGB8_ALPHA8_ASTC_10X8_KHR, Format::ASTC_10X8_SRGB_BLOCK),
    (
        GL_COMPRESSED_SRGB8_ALPHA8_ASTC_10X10_KHR,
        Format::ASTC_10X10_SRGB_BLOCK,
    ),
    (
        GL_COMPRESSED_SRGB8_ALPHA8_ASTC_12X10_KHR,
        Format::ASTC_12X10_SRGB_BLOCK,
    ),
    (
        GL_COMPRESSED_SRGB8_ALPHA8_ASTC_12X12_KHR,
        Format::ASTC_12X12_SRGB_BLOCK,
    ),
    // Depth / stencil
    (GL_DEPTH_COMPONENT16, Format::D16_UNORM),
    (GL_DEPTH_COMPONENT24, Format::X8_D24_UNORM_PACK32),
    (GL_DEPTH_COMPONENT32F, Format::D32_SFLOAT),
    (GL_DEPTH24_STENCIL8, Format::D24_UNORM_S8_UINT),
    (GL_DEPTH32F_STENCIL8, Format::D32_SFLOAT_S8_UINT),
    (GL_STENCIL_INDEX8, Format::S8_UINT),
];
