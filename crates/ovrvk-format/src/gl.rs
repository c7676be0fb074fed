//! The OpenGL enum values the translation tables are defined over.
//! Scoped to what the tables reference; this is not a GL binding.

// Component types
pub const GL_BYTE: u32 = 0x1400;
pub const GL_UNSIGNED_BYTE: u32 = 0x1401;
pub const GL_SHORT: u32 = 0x1402;
pub const GL_UNSIGNED_SHORT: u32 = 0x1403;
pub const GL_INT: u32 = 0x1404;
pub const GL_UNSIGNED_INT: u32 = 0x1405;
pub const GL_FLOAT: u32 = 0x1406;
pub const GL_HALF_FLOAT: u32 = 0x140B;
pub const GL_UNSIGNED_INT_24_8: u32 = 0x84FA;
pub const GL_FLOAT_32_UNSIGNED_INT_24_8_REV: u32 = 0x8DAD;

// Pixel formats
pub const GL_STENCIL_INDEX: u32 = 0x1901;
pub const GL_DEPTH_COMPONENT: u32 = 0x1902;
pub const GL_RED: u32 = 0x1903;
pub const GL_RGB: u32 = 0x1907;
pub const GL_RGBA: u32 = 0x1908;
pub const GL_BGR: u32 = 0x80E0;
pub const GL_BGRA: u32 = 0x80E1;
pub const GL_RG: u32 = 0x8227;
pub const GL_RG_INTEGER: u32 = 0x8228;
pub const GL_DEPTH_STENCIL: u32 = 0x84F9;
pub const GL_RED_INTEGER: u32 = 0x8D94;
pub const GL_RGB_INTEGER: u32 = 0x8D98;
pub const GL_RGBA_INTEGER: u32 = 0x8D99;
pub const GL_BGR_INTEGER: u32 = 0x8D9A;
pub const GL_BGRA_INTEGER: u32 = 0x8D9B;

// Sized internal formats, 8-bit components
pub const GL_R8: u32 = 0x8229;
pub const GL_RG8: u32 = 0x822B;
pub const GL_RGB8: u32 = 0x8051;
pub const GL_RGBA8: u32 = 0x8058;
pub const GL_R8_SNORM: u32 = 0x8F94;
pub const GL_RG8_SNORM: u32 = 0x8F95;
pub const GL_RGB8_SNORM: u32 = 0x8F96;
pub const GL_RGBA8_SNORM: u32 = 0x8F97;
pub const GL_R8UI: u32 = 0x8232;
pub const GL_RG8UI: u32 = 0x8238;
pub const GL_RGB8UI: u32 = 0x8D7D;
pub const GL_RGBA8UI: u32 = 0x8D7C;
pub const GL_R8I: u32 = 0x8231;
pub const GL_RG8I: u32 = 0x8237;
pub const GL_RGB8I: u32 = 0x8D8F;
pub const GL_RGBA8I: u32 = 0x8D8E;
pub const GL_SRGB8: u32 = 0x8C41;
pub const GL_SRGB8_ALPHA8: u32 = 0x8C43;

// Sized internal formats, 16-bit components
pub const GL_R16: u32 = 0x822A;
pub const GL_RG16: u32 = 0x822C;
pub const GL_RGB16: u32 = 0x8054;
pub const GL_RGBA16: u32 = 0x805B;
pub const GL_R16_SNORM: u32 = 0x8F98;
pub const GL_RG16_SNORM: u32 = 0x8F99;
pub const GL_RGB16_SNORM: u32 = 0x8F9A;
pub const GL_RGBA16_SNORM: u32 = 0x8F9B;
pub const GL_R16UI: u32 = 0x8234;
pub const GL_RG16UI: u32 = 0x823A;
pub const GL_RGB16UI: u32 = 0x8D77;
pub const GL_RGBA16UI: u32 = 0x8D76;
pub const GL_R16I: u32 = 0x8233;
pub const GL_RG16I: u32 = 0x8239;
pub const GL_RGB16I: u32 = 0x8D89;
pub const GL_RGBA16I: u32 = 0x8D88;
pub const GL_R16F: u32 = 0x822D;
pub const GL_RG16F: u32 = 0x822F;
pub const GL_RGB16F: u32 = 0x881B;
pub const GL_RGBA16F: u32 = 0x881A;

// Sized internal formats, 32-bit components
pub const GL_R32UI: u32 = 0x8236;
pub const GL_RG32UI: u32 = 0x823C;
pub const GL_RGB32UI: u32 = 0x8D71;
pub const GL_RGBA32UI: u32 = 0x8D70;
pub const GL_R32I: u32 = 0x8235;
pub const GL_RG32I: u32 = 0x823B;
pub const GL_RGB32I: u32 = 0x8D83;
pub const GL_RGBA32I: u32 = 0x8D82;
pub const GL_R32F: u32 = 0x822E;
pub const GL_RG32F: u32 = 0x8230;
pub const GL_RGB32F: u32 = 0x8815;
pub const GL_RGBA32F: u32 = 0x8814;

// Packed internal formats
pub const GL_RGB565: u32 = 0x8D62;
pub const GL_RGBA4: u32 = 0x8056;
pub const GL_RGB5_A1: u32 = 0x8057;
pub const GL_RGB10_A2: u32 = 0x8059;
pub const GL_RGB10_A2UI: u32 = 0x906F;
pub const GL_R11F_G11F_B10F: u32 = 0x8C3A;
pub const GL_RGB9_E5: u32 = 0x8C3D;

// S3TC
pub const GL_COMPRESSED_RGB_S3TC_DXT1_EXT: u32 = 0x83F0;
pub const GL_COMPRESSED_RGBA_S3TC_DXT1_EXT: u32 = 0x83F1;
pub const GL_COMPRESSED_RGBA_S3TC_DXT3_EXT: u32 = 0x83F2;
pub const GL_COMPRESSED_RGBA_S3TC_DXT5_EXT: u32 = 0x83F3;
pub const GL_COMPRESSED_SRGB_S3TC_DXT1_EXT: u32 = 0x8C4C;
pub const GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT1_EXT: u32 = 0x8C4D;
pub const GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT3_EXT: u32 = 0x8C4E;
pub const GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT5_EXT: u32 = 0x8C4F;

// RGTC
pub const GL_COMPRESSED_RED_RGTC1: u32 = 0x8DBB;
pub const GL_COMPRESSED_SIGNED_RED_RGTC1: u32 = 0x8DBC;
pub const GL_COMPRESSED_RG_RGTC2: u32 = 0x8DBD;
pub const GL_COMPRESSED_SIGNED_RG_RGTC2: u32 = 0x8DBE;

// BPTC
pub const GL_COMPRESSED_RGBA_BPTC_UNORM: u32 = 0x8E8C;
pub const GL_COMPRESSED_SRGB_ALPHA_BPTC_UNORM: u32 = 0x8E8D;
pub const GL_COMPRESSED_RGB_BPTC_SIGNED_FLOAT: u32 = 0x8E8E;
pub const GL_COMPRESSED_RGB_BPTC_UNSIGNED_FLOAT: u32 = 0x8E8F;

// ETC2 / EAC
pub const GL_COMPRESSED_R11_EAC: u32 = 0x9270;
pub const GL_COMPRESSED_SIGNED_R11_EAC: u32 = 0x9271;
pub const GL_COMPRESSED_RG11_EAC: u32 = 0x9272;
pub const GL_COMPRESSED_SIGNED_RG11_EAC: u32 = 0x9273;
pub const GL_COMPRESSED_RGB8_ETC2: u32 = 0x9274;
pub const GL_COMPRESSED_SRGB8_ETC2: u32 = 0x9275;
pub const GL_COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2: u32 = 0x9276;
pub const GL_COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2: u32 = 0x9277;
pub const GL_COMPRESSED_RGBA8_ETC2_EAC: u32 = 0x9278;
pub const GL_COMPRESSED_SRGB8_ALPHA8_ETC2_EAC: u32 = 0x9279;

// ASTC 2D
pub const GL_COMPRESSED_RGBA_ASTC_4X4_KHR: u32 = 0x93B0;
pub const GL_COMPRESSED_RGBA_ASTC_5X4_KHR: u32 = 0x93B1;
pub const GL_COMPRESSED_RGBA_ASTC_5X5_KHR: u32 = 0x93B2;
pub const GL_COMPRESSED_RGBA_ASTC_6X5_KHR: u32 = 0x93B3;
pub const GL_COMPRESSED_RGBA_ASTC_6X6_KHR: u32 = 0x93B4;
pub const GL_COMPRESSED_RGBA_ASTC_8X5_KHR: u32 = 0x93B5;
pub const GL_COMPRESSED_RGBA_ASTC_8X6_KHR: u32 = 0x93B6;
pub const GL_COMPRESSED_RGBA_ASTC_8X8_KHR: u32 = 0x93B7;
pub const GL_COMPRESSED_RGBA_ASTC_10X5_KHR: u32 = 0x93B8;
pub const GL_COMPRESSED_RGBA_ASTC_10X6_KHR: u32 = 0x93B9;
pub const GL_COMPRESSED_RGBA_ASTC_10X8_KHR: u32 = 0x93BA;
pub const GL_COMPRESSED_RGBA_ASTC_10X10_KHR: u32 = 0x93BB;
pub const GL_COMPRESSED_RGBA_ASTC_12X10_KHR: u32 = 0x93BC;
pub const GL_COMPRESSED_RGBA_ASTC_12X12_KHR: u32 = 0x93BD;
pub const GL_COMPRESSED_SRGB8_ALPHA8_ASTC_4X4_KHR: u32 = 0x93D0;
pub const GL_COMPRESSED_SRGB8_ALPHA8_ASTC_5X4_KHR: u32 = 0x93D1;
pub const GL_COMPRESSED_SRGB8_ALPHA8_ASTC_5X5_KHR: u32 = 0x93D2;
pub const GL_COMPRESSED_SRGB8_ALPHA8_ASTC_6X5_KHR: u32 = 0x93D3;
pub const GL_COMPRESSED_SRGB8_ALPHA8_ASTC_6X6_KHR: u32 = 0x93D4;
pub const GL_COMPRESSED_SRGB8_ALPHA8_ASTC_8X5_KHR: u32 = 0x93D5;
pub const GL_COMPRESSED_SRGB8_ALPHA8_ASTC_8X6_KHR: u32 = 0x93D6;
pub const GL_COMPRESSED_SRGB8_ALPHA8_ASTC_8X8_KHR: u32 = 0x93D7;
pub const GL_COMPRESSED_SRGB8_ALPHA8_ASTC_10X5_KHR: u32 = 0x93D8;
pub const GL_COMPRESSED_SRGB8_ALPHA8_ASTC_10X6_KHR: u32 = 0x93D9;
pub const GL_COMPRESSED_SRGB8_ALPHA8_ASTC_10X8_KHR: u32 = 0x93DA;
pub const GL_COMPRESSED_SRGB8_ALPHA8_ASTC_10X10_KHR: u32 = 0x93DB;
pub const GL_COMPRESSED_SRGB8_ALPHA8_ASTC_12X10_KHR: u32 = 0x93DC;
pub const GL_COMPRESSED_SRGB8_ALPHA8_ASTC_12X12_KHR: u32 = 0x93DD;

// ASTC 3D (OES); no Vulkan counterpart exists, tabulated callers get
// UNDEFINED through the lookup miss path.
pub const GL_COMPRESSED_RGBA_ASTC_3X3X3_OES: u32 = 0x93C0;
pub const GL_COMPRESSED_RGBA_ASTC_4X4X4_OES: u32 = 0x93C1;
pub const GL_COMPRESSED_RGBA_ASTC_5X5X5_OES: u32 = 0x93C4;
pub const GL_COMPRESSED_RGBA_ASTC_6X6X6_OES: u32 = 0x93C9;

// Depth / stencil internal formats
pub const GL_DEPTH_COMPONENT16: u32 = 0x81A5;
pub const GL_DEPTH_COMPONENT24: u32 = 0x81A6;
pub const GL_DEPTH_COMPONENT32F: u32 = 0x8CAC;
pub const GL_DEPTH24_STENCIL8: u32 = 0x88F0;
pub const GL_DEPTH32F_STENCIL8: u32 = 0x8CAD;
pub const GL_STENCIL_INDEX8: u32 = 0x8D48;
