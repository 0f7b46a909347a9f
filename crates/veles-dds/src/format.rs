//! Canonical pixel formats.
//!
//! The enumeration follows the DXGI numbering so DX10 header ids map onto it
//! directly.

use num_enum::{FromPrimitive, IntoPrimitive};

/// GPU-neutral pixel format a DDS file is normalized to.
///
/// Numeric ids that are not listed decode to [`CanonicalFormat::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u32)]
pub enum CanonicalFormat {
    #[num_enum(default)]
    Unknown = 0,
    R32G32B32A32Typeless = 1,
    R32G32B32A32Float = 2,
    R32G32B32A32Uint = 3,
    R32G32B32A32Sint = 4,
    R32G32B32Typeless = 5,
    R32G32B32Float = 6,
    R32G32B32Uint = 7,
    R32G32B32Sint = 8,
    R16G16B16A16Typeless = 9,
    R16G16B16A16Float = 10,
    R16G16B16A16Unorm = 11,
    R16G16B16A16Uint = 12,
    R16G16B16A16Snorm = 13,
    R16G16B16A16Sint = 14,
    R32G32Typeless = 15,
    R32G32Float = 16,
    R32G32Uint = 17,
    R32G32Sint = 18,
    R32G8X24Typeless = 19,
    D32FloatS8X24Uint = 20,
    R32FloatX8X24Typeless = 21,
    X32TypelessG8X24Uint = 22,
    R10G10B10A2Typeless = 23,
    R10G10B10A2Unorm = 24,
    R10G10B10A2Uint = 25,
    R11G11B10Float = 26,
    R8G8B8A8Typeless = 27,
    R8G8B8A8Unorm = 28,
    R8G8B8A8UnormSrgb = 29,
    R8G8B8A8Uint = 30,
    R8G8B8A8Snorm = 31,
    R8G8B8A8Sint = 32,
    R16G16Typeless = 33,
    R16G16Float = 34,
    R16G16Unorm = 35,
    R16G16Uint = 36,
    R16G16Snorm = 37,
    R16G16Sint = 38,
    R32Typeless = 39,
    D32Float = 40,
    R32Float = 41,
    R32Uint = 42,
    R32Sint = 43,
    R24G8Typeless = 44,
    D24UnormS8Uint = 45,
    R24UnormX8Typeless = 46,
    X24TypelessG8Uint = 47,
    R8G8Typeless = 48,
    R8G8Unorm = 49,
    R8G8Uint = 50,
    R8G8Snorm = 51,
    R8G8Sint = 52,
    R16Typeless = 53,
    R16Float = 54,
    D16Unorm = 55,
    R16Unorm = 56,
    R16Uint = 57,
    R16Snorm = 58,
    R16Sint = 59,
    R8Typeless = 60,
    R8Unorm = 61,
    R8Uint = 62,
    R8Snorm = 63,
    R8Sint = 64,
    A8Unorm = 65,
    R1Unorm = 66,
    R9G9B9E5SharedExp = 67,
    R8G8B8G8Unorm = 68,
    G8R8G8B8Unorm = 69,
    Bc1Typeless = 70,
    Bc1Unorm = 71,
    Bc1UnormSrgb = 72,
    Bc2Typeless = 73,
    Bc2Unorm = 74,
    Bc2UnormSrgb = 75,
    Bc3Typeless = 76,
    Bc3Unorm = 77,
    Bc3UnormSrgb = 78,
    Bc4Typeless = 79,
    Bc4Unorm = 80,
    Bc4Snorm = 81,
    Bc5Typeless = 82,
    Bc5Unorm = 83,
    Bc5Snorm = 84,
    B5G6R5Unorm = 85,
    B5G5R5A1Unorm = 86,
    B8G8R8A8Unorm = 87,
    B8G8R8X8Unorm = 88,
    R10G10B10XrBiasA2Unorm = 89,
    B8G8R8A8Typeless = 90,
    B8G8R8A8UnormSrgb = 91,
    B8G8R8X8Typeless = 92,
    B8G8R8X8UnormSrgb = 93,
    Bc6hTypeless = 94,
    Bc6hUf16 = 95,
    Bc6hSf16 = 96,
    Bc7Typeless = 97,
    Bc7Unorm = 98,
    Bc7UnormSrgb = 99,
    Ayuv = 100,
    Y410 = 101,
    Y416 = 102,
    Nv12 = 103,
    P010 = 104,
    P016 = 105,
    Opaque420 = 106,
    Yuy2 = 107,
    Y210 = 108,
    Y216 = 109,
    Nv11 = 110,
    Ai44 = 111,
    Ia44 = 112,
    P8 = 113,
    A8P8 = 114,
    B4G4R4A4Unorm = 115,
    P208 = 130,
    V208 = 131,
    V408 = 132,
}

impl CanonicalFormat {
    /// Bits per pixel, or 0 for formats without a defined pixel size.
    pub fn bits_per_pixel(self) -> u32 {
        use CanonicalFormat::*;

        match self {
            R32G32B32A32Typeless | R32G32B32A32Float | R32G32B32A32Uint | R32G32B32A32Sint => 128,

            R32G32B32Typeless | R32G32B32Float | R32G32B32Uint | R32G32B32Sint => 96,

            R16G16B16A16Typeless
            | R16G16B16A16Float
            | R16G16B16A16Unorm
            | R16G16B16A16Uint
            | R16G16B16A16Snorm
            | R16G16B16A16Sint
            | R32G32Typeless
            | R32G32Float
            | R32G32Uint
            | R32G32Sint
            | R32G8X24Typeless
            | D32FloatS8X24Uint
            | R32FloatX8X24Typeless
            | X32TypelessG8X24Uint
            | Y416
            | Y210
            | Y216 => 64,

            R10G10B10A2Typeless
            | R10G10B10A2Unorm
            | R10G10B10A2Uint
            | R11G11B10Float
            | R8G8B8A8Typeless
            | R8G8B8A8Unorm
            | R8G8B8A8UnormSrgb
            | R8G8B8A8Uint
            | R8G8B8A8Snorm
            | R8G8B8A8Sint
            | R16G16Typeless
            | R16G16Float
            | R16G16Unorm
            | R16G16Uint
            | R16G16Snorm
            | R16G16Sint
            | R32Typeless
            | D32Float
            | R32Float
            | R32Uint
            | R32Sint
            | R24G8Typeless
            | D24UnormS8Uint
            | R24UnormX8Typeless
            | X24TypelessG8Uint
            | R9G9B9E5SharedExp
            | R8G8B8G8Unorm
            | G8R8G8B8Unorm
            | B8G8R8A8Unorm
            | B8G8R8X8Unorm
            | R10G10B10XrBiasA2Unorm
            | B8G8R8A8Typeless
            | B8G8R8A8UnormSrgb
            | B8G8R8X8Typeless
            | B8G8R8X8UnormSrgb
            | Ayuv
            | Y410
            | Yuy2 => 32,

            P010 | P016 => 24,

            R8G8Typeless
            | R8G8Unorm
            | R8G8Uint
            | R8G8Snorm
            | R8G8Sint
            | R16Typeless
            | R16Float
            | D16Unorm
            | R16Unorm
            | R16Uint
            | R16Snorm
            | R16Sint
            | B5G6R5Unorm
            | B5G5R5A1Unorm
            | A8P8
            | B4G4R4A4Unorm => 16,

            Nv12 | Opaque420 | Nv11 => 12,

            R8Typeless | R8Unorm | R8Uint | R8Snorm | R8Sint | A8Unorm | Ai44 | Ia44 | P8 => 8,

            R1Unorm => 1,

            Bc1Typeless | Bc1Unorm | Bc1UnormSrgb | Bc4Typeless | Bc4Unorm | Bc4Snorm => 4,

            Bc2Typeless
            | Bc2Unorm
            | Bc2UnormSrgb
            | Bc3Typeless
            | Bc3Unorm
            | Bc3UnormSrgb
            | Bc5Typeless
            | Bc5Unorm
            | Bc5Snorm
            | Bc6hTypeless
            | Bc6hUf16
            | Bc6hSf16
            | Bc7Typeless
            | Bc7Unorm
            | Bc7UnormSrgb => 8,

            Unknown | P208 | V208 | V408 => 0,
        }
    }

    /// Whether this format stores 4×4 compressed blocks.
    pub fn is_block_compressed(self) -> bool {
        self.block_bytes().is_some()
    }

    /// Bytes per 4×4 block for block-compressed formats.
    pub fn block_bytes(self) -> Option<u32> {
        use CanonicalFormat::*;

        match self {
            Bc1Typeless | Bc1Unorm | Bc1UnormSrgb | Bc4Typeless | Bc4Unorm | Bc4Snorm => Some(8),
            Bc2Typeless | Bc2Unorm | Bc2UnormSrgb | Bc3Typeless | Bc3Unorm | Bc3UnormSrgb
            | Bc5Typeless | Bc5Unorm | Bc5Snorm | Bc6hTypeless | Bc6hUf16 | Bc6hSf16
            | Bc7Typeless | Bc7Unorm | Bc7UnormSrgb => Some(16),
            _ => None,
        }
    }

    /// Palette formats, which have no canonical GPU representation.
    pub fn is_palettized(self) -> bool {
        matches!(
            self,
            CanonicalFormat::Ai44 | CanonicalFormat::Ia44 | CanonicalFormat::P8 | CanonicalFormat::A8P8
        )
    }

    /// The sRGB twin of this format, or the format itself when it has none.
    pub fn to_srgb(self) -> Self {
        use CanonicalFormat::*;

        match self {
            R8G8B8A8Unorm => R8G8B8A8UnormSrgb,
            Bc1Unorm => Bc1UnormSrgb,
            Bc2Unorm => Bc2UnormSrgb,
            Bc3Unorm => Bc3UnormSrgb,
            B8G8R8A8Unorm => B8G8R8A8UnormSrgb,
            B8G8R8X8Unorm => B8G8R8X8UnormSrgb,
            Bc7Unorm => Bc7UnormSrgb,
            other => other,
        }
    }

    pub fn is_srgb(self) -> bool {
        use CanonicalFormat::*;

        matches!(
            self,
            R8G8B8A8UnormSrgb
                | Bc1UnormSrgb
                | Bc2UnormSrgb
                | Bc3UnormSrgb
                | B8G8R8A8UnormSrgb
                | B8G8R8X8UnormSrgb
                | Bc7UnormSrgb
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dxgi_id() {
        assert_eq!(CanonicalFormat::from(71u32), CanonicalFormat::Bc1Unorm);
        assert_eq!(CanonicalFormat::from(115u32), CanonicalFormat::B4G4R4A4Unorm);
        assert_eq!(CanonicalFormat::from(132u32), CanonicalFormat::V408);
        assert_eq!(u32::from(CanonicalFormat::Bc7UnormSrgb), 99);
    }

    #[test]
    fn test_unlisted_ids_are_unknown() {
        for id in [116u32, 129, 133, 0xFFFF_FFFF] {
            assert_eq!(CanonicalFormat::from(id), CanonicalFormat::Unknown);
        }
    }

    #[test]
    fn test_bits_per_pixel() {
        assert_eq!(CanonicalFormat::R32G32B32A32Float.bits_per_pixel(), 128);
        assert_eq!(CanonicalFormat::R32G32B32Float.bits_per_pixel(), 96);
        assert_eq!(CanonicalFormat::Y210.bits_per_pixel(), 64);
        assert_eq!(CanonicalFormat::R8G8B8A8Unorm.bits_per_pixel(), 32);
        assert_eq!(CanonicalFormat::P010.bits_per_pixel(), 24);
        assert_eq!(CanonicalFormat::B5G6R5Unorm.bits_per_pixel(), 16);
        assert_eq!(CanonicalFormat::Nv11.bits_per_pixel(), 12);
        assert_eq!(CanonicalFormat::A8Unorm.bits_per_pixel(), 8);
        assert_eq!(CanonicalFormat::Bc1Unorm.bits_per_pixel(), 4);
        assert_eq!(CanonicalFormat::Bc7Unorm.bits_per_pixel(), 8);
        assert_eq!(CanonicalFormat::R1Unorm.bits_per_pixel(), 1);
        assert_eq!(CanonicalFormat::Unknown.bits_per_pixel(), 0);
        assert_eq!(CanonicalFormat::V208.bits_per_pixel(), 0);
    }

    #[test]
    fn test_block_bytes() {
        assert_eq!(CanonicalFormat::Bc4Snorm.block_bytes(), Some(8));
        assert_eq!(CanonicalFormat::Bc6hSf16.block_bytes(), Some(16));
        assert!(!CanonicalFormat::R8G8B8A8Unorm.is_block_compressed());
    }

    #[test]
    fn test_srgb_twins() {
        assert_eq!(CanonicalFormat::Bc3Unorm.to_srgb(), CanonicalFormat::Bc3UnormSrgb);
        assert_eq!(CanonicalFormat::B8G8R8X8Unorm.to_srgb(), CanonicalFormat::B8G8R8X8UnormSrgb);
        assert_eq!(CanonicalFormat::Bc4Unorm.to_srgb(), CanonicalFormat::Bc4Unorm);
        assert!(CanonicalFormat::Bc7Unorm.to_srgb().is_srgb());
        assert!(!CanonicalFormat::Bc7Unorm.is_srgb());
    }
}
