//! Alpha channel interpretation.

use crate::header::{DdsHeader, DdsHeaderDxt10, FourCC};

/// How the alpha channel of a texture should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u32)]
pub enum AlphaMode {
    #[default]
    Unknown = 0,
    Straight = 1,
    Premultiplied = 2,
    Opaque = 3,
    Custom = 4,
}

impl AlphaMode {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => AlphaMode::Straight,
            2 => AlphaMode::Premultiplied,
            3 => AlphaMode::Opaque,
            4 => AlphaMode::Custom,
            _ => AlphaMode::Unknown,
        }
    }
}

/// Resolve the alpha mode from the DX10 extension, or from the legacy
/// premultiplied FourCC codes when there is none.
pub fn resolve_alpha_mode(header: &DdsHeader, dx10: Option<&DdsHeaderDxt10>) -> AlphaMode {
    if let Some(dx10) = dx10 {
        return AlphaMode::from_bits(dx10.misc_flags2 & DdsHeaderDxt10::ALPHA_MODE_MASK);
    }

    let pf = &header.pixel_format;
    if pf.has_four_cc(FourCC::DXT2) || pf.has_four_cc(FourCC::DXT4) {
        return AlphaMode::Premultiplied;
    }

    AlphaMode::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{Caps2Flags, DdsPixelFormat, HeaderFlags, MiscFlags, PixelFormatFlags};

    fn header(four_cc: FourCC) -> DdsHeader {
        DdsHeader {
            size: 124,
            flags: HeaderFlags::CAPS | HeaderFlags::PIXEL_FORMAT,
            height: 4,
            width: 4,
            pitch_or_linear_size: 0,
            depth: 0,
            mipmap_count: 1,
            reserved1: [0; 11],
            pixel_format: DdsPixelFormat {
                size: 32,
                flags: PixelFormatFlags::FOURCC,
                four_cc,
                rgb_bit_count: 0,
                r_bit_mask: 0,
                g_bit_mask: 0,
                b_bit_mask: 0,
                a_bit_mask: 0,
            },
            caps: 0x1000,
            caps2: Caps2Flags::empty(),
            caps3: 0,
            caps4: 0,
            reserved2: 0,
        }
    }

    fn dx10(misc_flags2: u32) -> DdsHeaderDxt10 {
        DdsHeaderDxt10 {
            dxgi_format: 28,
            resource_dimension: DdsHeaderDxt10::DIMENSION_TEXTURE2D,
            misc_flag: MiscFlags::empty(),
            array_size: 1,
            misc_flags2,
        }
    }

    #[test]
    fn test_dx10_alpha_bits() {
        let h = header(FourCC::DX10);
        let expected = [
            AlphaMode::Unknown,
            AlphaMode::Straight,
            AlphaMode::Premultiplied,
            AlphaMode::Opaque,
            AlphaMode::Custom,
            AlphaMode::Unknown,
            AlphaMode::Unknown,
            AlphaMode::Unknown,
        ];
        for (bits, mode) in expected.into_iter().enumerate() {
            assert_eq!(resolve_alpha_mode(&h, Some(&dx10(bits as u32))), mode);
        }

        // Only the low three bits carry the mode.
        assert_eq!(resolve_alpha_mode(&h, Some(&dx10(0xf0 | 2))), AlphaMode::Premultiplied);
    }

    #[test]
    fn test_legacy_premultiplied_codes() {
        assert_eq!(resolve_alpha_mode(&header(FourCC::DXT2), None), AlphaMode::Premultiplied);
        assert_eq!(resolve_alpha_mode(&header(FourCC::DXT4), None), AlphaMode::Premultiplied);
        assert_eq!(resolve_alpha_mode(&header(FourCC::DXT5), None), AlphaMode::Unknown);
        assert_eq!(resolve_alpha_mode(&header(FourCC::DXT1), None), AlphaMode::Unknown);
    }

    #[test]
    fn test_dx10_overrides_legacy_code() {
        // A DXT4 code is meaningless once a DX10 extension is present.
        let h = header(FourCC::DXT4);
        assert_eq!(resolve_alpha_mode(&h, Some(&dx10(0))), AlphaMode::Unknown);
    }
}
