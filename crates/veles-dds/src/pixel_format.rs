//! Pixel format canonicalization.
//!
//! Maps a DX10 format id, or a legacy bitmask / FourCC descriptor, onto a
//! [`CanonicalFormat`].

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::format::CanonicalFormat;
use crate::header::{DdsHeader, DdsHeaderDxt10, DdsPixelFormat, FourCC, PixelFormatFlags};
use crate::{Error, Result};

/// The four channel masks of a legacy pixel format, used as a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelMasks {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub a: u32,
}

impl ChannelMasks {
    pub const fn new(r: u32, g: u32, b: u32, a: u32) -> Self {
        Self { r, g, b, a }
    }

    pub fn of(pixel_format: &DdsPixelFormat) -> Self {
        Self::new(
            pixel_format.r_bit_mask,
            pixel_format.g_bit_mask,
            pixel_format.b_bit_mask,
            pixel_format.a_bit_mask,
        )
    }
}

/// Legacy RGB / luminance layouts with an exact canonical equivalent.
///
/// A2R10G10B10 and X1R5G5B5 have no canonical twin and are deliberately absent.
pub const BITMASK_FORMATS: [(ChannelMasks, CanonicalFormat); 12] = [
    (ChannelMasks::new(0x0000_00ff, 0x0000_ff00, 0x00ff_0000, 0xff00_0000), CanonicalFormat::R8G8B8A8Unorm),
    (ChannelMasks::new(0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0xff00_0000), CanonicalFormat::B8G8R8A8Unorm),
    (ChannelMasks::new(0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0x0000_0000), CanonicalFormat::B8G8R8X8Unorm),
    (ChannelMasks::new(0x3ff0_0000, 0x000f_fc00, 0x0000_03ff, 0xc000_0000), CanonicalFormat::R10G10B10A2Unorm),
    (ChannelMasks::new(0x0000_ffff, 0xffff_0000, 0x0000_0000, 0x0000_0000), CanonicalFormat::R16G16Unorm),
    // D3D9 had no other single 32-bit channel format.
    (ChannelMasks::new(0xffff_ffff, 0x0000_0000, 0x0000_0000, 0x0000_0000), CanonicalFormat::R32Float),
    (ChannelMasks::new(0x7c00, 0x03e0, 0x001f, 0x8000), CanonicalFormat::B5G5R5A1Unorm),
    (ChannelMasks::new(0xf800, 0x07e0, 0x001f, 0x0000), CanonicalFormat::B5G6R5Unorm),
    (ChannelMasks::new(0x0f00, 0x00f0, 0x000f, 0xf000), CanonicalFormat::B4G4R4A4Unorm),
    (ChannelMasks::new(0x0000_00ff, 0x0000_0000, 0x0000_0000, 0x0000_0000), CanonicalFormat::R8Unorm),
    (ChannelMasks::new(0x0000_ffff, 0x0000_0000, 0x0000_0000, 0x0000_0000), CanonicalFormat::R16Unorm),
    (ChannelMasks::new(0x0000_00ff, 0x0000_0000, 0x0000_0000, 0x0000_ff00), CanonicalFormat::R8G8Unorm),
];

/// Legacy FourCC codes in match order.
///
/// DXT2 and DXT4 are the premultiplied-alpha variants of DXT3 and DXT5 and
/// share their block layout.
pub const FOURCC_FORMATS: [(FourCC, CanonicalFormat); 22] = [
    (FourCC::DXT1, CanonicalFormat::Bc1Unorm),
    (FourCC::DXT3, CanonicalFormat::Bc2Unorm),
    (FourCC::DXT5, CanonicalFormat::Bc3Unorm),
    (FourCC::DXT2, CanonicalFormat::Bc2Unorm),
    (FourCC::DXT4, CanonicalFormat::Bc3Unorm),
    (FourCC::ATI1, CanonicalFormat::Bc4Unorm),
    (FourCC::BC4U, CanonicalFormat::Bc4Unorm),
    (FourCC::BC4S, CanonicalFormat::Bc4Snorm),
    (FourCC::ATI2, CanonicalFormat::Bc5Unorm),
    (FourCC::BC5U, CanonicalFormat::Bc5Unorm),
    (FourCC::BC5S, CanonicalFormat::Bc5Snorm),
    (FourCC::RGBG, CanonicalFormat::R8G8B8G8Unorm),
    (FourCC::GRGB, CanonicalFormat::G8R8G8B8Unorm),
    (FourCC::YUY2, CanonicalFormat::Yuy2),
    (FourCC::A16B16G16R16, CanonicalFormat::R16G16B16A16Unorm),
    (FourCC::Q16W16V16U16, CanonicalFormat::R16G16B16A16Snorm),
    (FourCC::R16F, CanonicalFormat::R16Float),
    (FourCC::G16R16F, CanonicalFormat::R16G16Float),
    (FourCC::A16B16G16R16F, CanonicalFormat::R16G16B16A16Float),
    (FourCC::R32F, CanonicalFormat::R32Float),
    (FourCC::G32R32F, CanonicalFormat::R32G32Float),
    (FourCC::A32B32G32R32F, CanonicalFormat::R32G32B32A32Float),
];

fn bitmask_map() -> &'static HashMap<ChannelMasks, CanonicalFormat> {
    static MAP: OnceLock<HashMap<ChannelMasks, CanonicalFormat>> = OnceLock::new();
    MAP.get_or_init(|| BITMASK_FORMATS.iter().copied().collect())
}

/// Look up an exact channel-mask layout.
pub fn format_from_masks(masks: ChannelMasks) -> CanonicalFormat {
    bitmask_map()
        .get(&masks)
        .copied()
        .unwrap_or(CanonicalFormat::Unknown)
}

/// Look up a legacy FourCC code.
pub fn format_from_four_cc(code: FourCC) -> CanonicalFormat {
    FOURCC_FORMATS
        .iter()
        .find(|(cc, _)| *cc == code)
        .map_or(CanonicalFormat::Unknown, |&(_, format)| format)
}

/// Resolve a legacy (pre-DX10) pixel format descriptor.
///
/// Returns [`CanonicalFormat::Unknown`] when no mapping exists.
pub fn resolve_legacy(pixel_format: &DdsPixelFormat) -> CanonicalFormat {
    let flags = pixel_format.flags;

    if flags.intersects(PixelFormatFlags::RGB | PixelFormatFlags::LUMINANCE) {
        return format_from_masks(ChannelMasks::of(pixel_format));
    }

    if flags.contains(PixelFormatFlags::ALPHA) {
        if pixel_format.rgb_bit_count == 8 {
            return CanonicalFormat::A8Unorm;
        }
    } else if flags.contains(PixelFormatFlags::FOURCC) {
        return format_from_four_cc(pixel_format.four_cc);
    }

    CanonicalFormat::Unknown
}

/// Resolve the format id carried by a DX10 header.
pub fn resolve_dx10(dx10: &DdsHeaderDxt10) -> Result<CanonicalFormat> {
    let format = CanonicalFormat::from(dx10.dxgi_format);

    if format.is_palettized() {
        return Err(Error::UnsupportedFormat(format!(
            "palette format {:?} is not supported",
            format
        )));
    }
    if format.bits_per_pixel() == 0 {
        return Err(Error::UnsupportedFormat(format!(
            "DXGI format {} has no defined pixel size",
            dx10.dxgi_format
        )));
    }

    Ok(format)
}

/// Resolve the canonical format of a DDS file.
pub fn resolve_format(header: &DdsHeader, dx10: Option<&DdsHeaderDxt10>) -> Result<CanonicalFormat> {
    if let Some(dx10) = dx10 {
        return resolve_dx10(dx10);
    }

    match resolve_legacy(&header.pixel_format) {
        CanonicalFormat::Unknown => {
            let pf = &header.pixel_format;
            Err(Error::UnsupportedFormat(format!(
                "no canonical format for legacy pixel format (flags {:#x}, fourCC {}, masks {:#x}/{:#x}/{:#x}/{:#x})",
                pf.flags.bits(),
                pf.four_cc,
                pf.r_bit_mask,
                pf.g_bit_mask,
                pf.b_bit_mask,
                pf.a_bit_mask
            )))
        }
        format => Ok(format),
    }
}
