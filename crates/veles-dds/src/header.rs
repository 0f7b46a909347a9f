//! DDS header structures.
//!
//! Headers are decoded field by field from little-endian bytes. Offsets below
//! are relative to the start of the file:
//!
//! | Offset | Size | Field |
//! |-------:|-----:|-------|
//! | 0   | 4  | magic `"DDS "` |
//! | 4   | 4  | size |
//! | 8   | 4  | flags |
//! | 12  | 4  | height |
//! | 16  | 4  | width |
//! | 20  | 4  | pitch or linear size |
//! | 24  | 4  | depth |
//! | 28  | 4  | mipmap count |
//! | 32  | 44 | reserved (11 × u32) |
//! | 76  | 32 | pixel format: size, flags, fourCC, rgbBitCount, R, G, B, A masks |
//! | 108 | 4  | caps |
//! | 112 | 4  | caps2 |
//! | 116 | 4  | caps3 |
//! | 120 | 4  | caps4 |
//! | 124 | 4  | reserved2 |
//! | 128 | 20 | DX10 header (only when the fourCC is `"DX10"`) |
//!
//! Everything after the headers is the pixel data blob.

use std::fmt;

use bitflags::bitflags;
use veles_common::BinaryReader;

use crate::{Error, Result, DDS_MAGIC};

bitflags! {
    /// Flags indicating which header members contain valid data.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HeaderFlags: u32 {
        const CAPS = 0x1;
        const HEIGHT = 0x2;
        const WIDTH = 0x4;
        const PITCH = 0x8;
        const PIXEL_FORMAT = 0x1000;
        const MIPMAP_COUNT = 0x2_0000;
        const LINEAR_SIZE = 0x8_0000;
        /// Also written as `DDSD_DEPTH`; marks a volume texture.
        const VOLUME = 0x80_0000;
    }
}

bitflags! {
    /// Pixel format flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PixelFormatFlags: u32 {
        const ALPHA_PIXELS = 0x1;
        const ALPHA = 0x2;
        const FOURCC = 0x4;
        const RGB = 0x40;
        const YUV = 0x200;
        const LUMINANCE = 0x2_0000;
    }
}

bitflags! {
    /// Additional surface capabilities (`dwCaps2`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Caps2Flags: u32 {
        const CUBEMAP = 0x200;
        const CUBEMAP_POSITIVE_X = 0x400;
        const CUBEMAP_NEGATIVE_X = 0x800;
        const CUBEMAP_POSITIVE_Y = 0x1000;
        const CUBEMAP_NEGATIVE_Y = 0x2000;
        const CUBEMAP_POSITIVE_Z = 0x4000;
        const CUBEMAP_NEGATIVE_Z = 0x8000;
        const CUBEMAP_ALL_FACES = Self::CUBEMAP_POSITIVE_X.bits()
            | Self::CUBEMAP_NEGATIVE_X.bits()
            | Self::CUBEMAP_POSITIVE_Y.bits()
            | Self::CUBEMAP_NEGATIVE_Y.bits()
            | Self::CUBEMAP_POSITIVE_Z.bits()
            | Self::CUBEMAP_NEGATIVE_Z.bits();
        const VOLUME = 0x20_0000;
    }
}

bitflags! {
    /// Resource misc flags carried by the DX10 header.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MiscFlags: u32 {
        const TEXTURE_CUBE = 0x4;
    }
}

/// Four-character code identifying a legacy pixel format.
///
/// Besides ASCII codes such as `DXT1`, legacy writers store plain numeric
/// `D3DFORMAT` ids here (e.g. `113` for A16B16G16R16F).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCC(pub u32);

impl FourCC {
    pub const DXT1: Self = Self::from_bytes(*b"DXT1");
    pub const DXT2: Self = Self::from_bytes(*b"DXT2");
    pub const DXT3: Self = Self::from_bytes(*b"DXT3");
    pub const DXT4: Self = Self::from_bytes(*b"DXT4");
    pub const DXT5: Self = Self::from_bytes(*b"DXT5");
    pub const ATI1: Self = Self::from_bytes(*b"ATI1");
    pub const ATI2: Self = Self::from_bytes(*b"ATI2");
    pub const BC4U: Self = Self::from_bytes(*b"BC4U");
    pub const BC4S: Self = Self::from_bytes(*b"BC4S");
    pub const BC5U: Self = Self::from_bytes(*b"BC5U");
    pub const BC5S: Self = Self::from_bytes(*b"BC5S");
    pub const RGBG: Self = Self::from_bytes(*b"RGBG");
    pub const GRGB: Self = Self::from_bytes(*b"GRGB");
    pub const YUY2: Self = Self::from_bytes(*b"YUY2");
    /// DX10 extended header follows.
    pub const DX10: Self = Self::from_bytes(*b"DX10");

    // Numeric D3DFORMAT ids.
    pub const A16B16G16R16: Self = Self(36);
    pub const Q16W16V16U16: Self = Self(110);
    pub const R16F: Self = Self(111);
    pub const G16R16F: Self = Self(112);
    pub const A16B16G16R16F: Self = Self(113);
    pub const R32F: Self = Self(114);
    pub const G32R32F: Self = Self(115);
    pub const A32B32G32R32F: Self = Self(116);

    /// Build a code from its four bytes in file order.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(bytes))
    }

    /// The four bytes in file order.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCC({})", self)
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes();
        if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            bytes.iter().try_for_each(|&b| write!(f, "{}", b as char))
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// DDS pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsPixelFormat {
    /// Structure size (should be 32).
    pub size: u32,
    /// Pixel format flags.
    pub flags: PixelFormatFlags,
    /// Four-character code for compressed or custom formats.
    pub four_cc: FourCC,
    /// Number of bits per pixel (for uncompressed).
    pub rgb_bit_count: u32,
    /// Red bit mask.
    pub r_bit_mask: u32,
    /// Green bit mask.
    pub g_bit_mask: u32,
    /// Blue bit mask.
    pub b_bit_mask: u32,
    /// Alpha bit mask.
    pub a_bit_mask: u32,
}

impl DdsPixelFormat {
    /// Encoded size in bytes.
    pub const SIZE: usize = 32;

    fn read(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let [size, flags, four_cc, rgb_bit_count, r, g, b, a] = reader.read_u32_array::<8>()?;
        Ok(Self {
            size,
            flags: PixelFormatFlags::from_bits_retain(flags),
            four_cc: FourCC(four_cc),
            rgb_bit_count,
            r_bit_mask: r,
            g_bit_mask: g,
            b_bit_mask: b,
            a_bit_mask: a,
        })
    }

    /// Whether the FOURCC flag is set and the code equals `code`.
    pub fn has_four_cc(&self, code: FourCC) -> bool {
        self.flags.contains(PixelFormatFlags::FOURCC) && self.four_cc == code
    }
}

/// DDS file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsHeader {
    /// Header size (should be 124).
    pub size: u32,
    /// Header flags.
    pub flags: HeaderFlags,
    /// Image height.
    pub height: u32,
    /// Image width.
    pub width: u32,
    /// Pitch or linear size.
    pub pitch_or_linear_size: u32,
    /// Depth (for volume textures).
    pub depth: u32,
    /// Number of mipmap levels, 0 meaning "not specified".
    pub mipmap_count: u32,
    /// Reserved.
    pub reserved1: [u32; 11],
    /// Pixel format.
    pub pixel_format: DdsPixelFormat,
    /// Surface capabilities.
    pub caps: u32,
    /// Surface capabilities 2.
    pub caps2: Caps2Flags,
    /// Surface capabilities 3.
    pub caps3: u32,
    /// Surface capabilities 4.
    pub caps4: u32,
    /// Reserved.
    pub reserved2: u32,
}

impl DdsHeader {
    /// Encoded header size.
    pub const SIZE: usize = 124;

    fn read(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let [size, flags, height, width, pitch_or_linear_size, depth, mipmap_count] =
            reader.read_u32_array::<7>()?;
        let reserved1 = reader.read_u32_array::<11>()?;
        let pixel_format = DdsPixelFormat::read(reader)?;
        let [caps, caps2, caps3, caps4, reserved2] = reader.read_u32_array::<5>()?;

        Ok(Self {
            size,
            flags: HeaderFlags::from_bits_retain(flags),
            height,
            width,
            pitch_or_linear_size,
            depth,
            mipmap_count,
            reserved1,
            pixel_format,
            caps,
            caps2: Caps2Flags::from_bits_retain(caps2),
            caps3,
            caps4,
            reserved2,
        })
    }

    /// Check if this header is followed by a DX10 extended header.
    pub fn is_dx10(&self) -> bool {
        self.pixel_format.has_four_cc(FourCC::DX10)
    }

    /// Check if the legacy volume flag is set.
    pub fn is_volume(&self) -> bool {
        self.flags.contains(HeaderFlags::VOLUME)
    }

    /// Mip count with the unspecified value 0 treated as a single level.
    pub fn mip_count(&self) -> u32 {
        self.mipmap_count.max(1)
    }
}

/// DX10 extended header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsHeaderDxt10 {
    /// DXGI format id.
    pub dxgi_format: u32,
    /// Resource dimension (2 = 1D, 3 = 2D, 4 = 3D).
    pub resource_dimension: u32,
    /// Misc flags.
    pub misc_flag: MiscFlags,
    /// Array size (number of cube faces is *not* included).
    pub array_size: u32,
    /// Misc flags 2, alpha mode in the low three bits.
    pub misc_flags2: u32,
}

impl DdsHeaderDxt10 {
    /// Encoded header size.
    pub const SIZE: usize = 20;

    pub const DIMENSION_TEXTURE1D: u32 = 2;
    pub const DIMENSION_TEXTURE2D: u32 = 3;
    pub const DIMENSION_TEXTURE3D: u32 = 4;

    /// Mask selecting the alpha mode in `misc_flags2`.
    pub const ALPHA_MODE_MASK: u32 = 0x7;

    fn read(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let [dxgi_format, resource_dimension, misc_flag, array_size, misc_flags2] =
            reader.read_u32_array::<5>()?;
        Ok(Self {
            dxgi_format,
            resource_dimension,
            misc_flag: MiscFlags::from_bits_retain(misc_flag),
            array_size,
            misc_flags2,
        })
    }
}

/// Headers of a DDS file together with the borrowed pixel data that follows them.
#[derive(Debug, Clone, Copy)]
pub struct DecodedHeaders<'a> {
    pub header: DdsHeader,
    pub dx10: Option<DdsHeaderDxt10>,
    pub pixel_data: &'a [u8],
}

/// Check whether `data` starts with the DDS magic.
pub fn is_dds(data: &[u8]) -> bool {
    BinaryReader::new(data).peek_u32().is_ok_and(|magic| magic == DDS_MAGIC)
}

/// Decode the DDS magic, primary header and optional DX10 header.
///
/// The returned pixel data borrows from `data`.
pub fn decode_headers(data: &[u8]) -> Result<DecodedHeaders<'_>> {
    let mut reader = BinaryReader::new(data);

    let magic = reader
        .read_u32()
        .map_err(|_| Error::MalformedInput("file too small to hold the DDS magic".into()))?;
    if magic != DDS_MAGIC {
        return Err(Error::MalformedInput(format!(
            "invalid DDS magic: expected 'DDS ', got {:?}",
            magic.to_le_bytes()
        )));
    }

    if reader.ensure(DdsHeader::SIZE).is_err() {
        return Err(Error::MalformedInput(format!(
            "file too small for a DDS header: {} bytes after the magic at offset {}",
            reader.remaining(),
            reader.position()
        )));
    }
    let header = DdsHeader::read(&mut reader)?;

    let dx10 = if header.is_dx10() {
        if reader.ensure(DdsHeaderDxt10::SIZE).is_err() {
            return Err(Error::MalformedInput(format!(
                "file too small for a DX10 header: {} bytes left at offset {}",
                reader.remaining(),
                reader.position()
            )));
        }
        Some(DdsHeaderDxt10::read(&mut reader)?)
    } else {
        None
    };

    Ok(DecodedHeaders {
        header,
        dx10,
        pixel_data: reader.remaining_bytes(),
    })
}
