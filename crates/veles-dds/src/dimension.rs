//! Resource dimension, array size and cubemap classification.

use crate::header::{Caps2Flags, DdsHeader, DdsHeaderDxt10, HeaderFlags, MiscFlags};
use crate::{Error, Result};

/// Dimensionality of the texture resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ResourceDimension {
    Texture1D,
    Texture2D,
    Texture3D,
}

/// Extent and array shape of a texture before the mip chain is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureShape {
    pub dimension: ResourceDimension,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    /// Number of array slices, cube faces included.
    pub array_size: u32,
    pub is_cube_map: bool,
}

/// Classify a texture from its headers.
pub fn classify(header: &DdsHeader, dx10: Option<&DdsHeaderDxt10>) -> Result<TextureShape> {
    match dx10 {
        Some(dx10) => classify_dx10(header, dx10),
        None => classify_legacy(header),
    }
}

/// Reject a DX10 header with an empty array.
///
/// Runs ahead of format resolution when decoding a file, so it takes
/// precedence over every other DX10 error.
pub fn check_array_size(dx10: &DdsHeaderDxt10) -> Result<()> {
    if dx10.array_size == 0 {
        return Err(Error::MalformedInput("DX10 header has an array size of 0".into()));
    }
    Ok(())
}

fn classify_dx10(header: &DdsHeader, dx10: &DdsHeaderDxt10) -> Result<TextureShape> {
    check_array_size(dx10)?;

    let mut shape = TextureShape {
        dimension: ResourceDimension::Texture2D,
        width: header.width,
        height: header.height,
        depth: header.depth,
        array_size: dx10.array_size,
        is_cube_map: false,
    };

    match dx10.resource_dimension {
        DdsHeaderDxt10::DIMENSION_TEXTURE1D => {
            if header.flags.contains(HeaderFlags::HEIGHT) && header.height != 1 {
                return Err(Error::MalformedInput(format!(
                    "1D texture declares a height of {}",
                    header.height
                )));
            }
            shape.dimension = ResourceDimension::Texture1D;
            shape.height = 1;
            shape.depth = 1;
        }
        DdsHeaderDxt10::DIMENSION_TEXTURE2D => {
            if dx10.misc_flag.contains(MiscFlags::TEXTURE_CUBE) {
                shape.array_size = shape.array_size.checked_mul(6).ok_or_else(|| {
                    Error::MalformedInput(format!("cube array size {} overflows", dx10.array_size))
                })?;
                shape.is_cube_map = true;
            }
            shape.depth = 1;
        }
        DdsHeaderDxt10::DIMENSION_TEXTURE3D => {
            if !header.is_volume() {
                return Err(Error::MalformedInput(
                    "3D texture is missing the volume flag".into(),
                ));
            }
            if dx10.array_size > 1 {
                return Err(Error::UnsupportedDimension(format!(
                    "3D texture arrays are not supported (array size {})",
                    dx10.array_size
                )));
            }
            shape.dimension = ResourceDimension::Texture3D;
        }
        other => {
            return Err(Error::UnsupportedDimension(format!(
                "invalid resource dimension {}",
                other
            )));
        }
    }

    Ok(shape)
}

fn classify_legacy(header: &DdsHeader) -> Result<TextureShape> {
    let mut shape = TextureShape {
        dimension: ResourceDimension::Texture2D,
        width: header.width,
        height: header.height,
        depth: 1,
        array_size: 1,
        is_cube_map: false,
    };

    if header.is_volume() {
        shape.dimension = ResourceDimension::Texture3D;
        shape.depth = header.depth;
    } else if header.caps2.contains(Caps2Flags::CUBEMAP) {
        // Partial cubemaps cannot be expressed as a cube resource.
        if !header.caps2.contains(Caps2Flags::CUBEMAP_ALL_FACES) {
            return Err(Error::UnsupportedFormat(format!(
                "cubemap with an incomplete face set (caps2 {:#x})",
                header.caps2.bits()
            )));
        }
        shape.array_size = 6;
        shape.is_cube_map = true;
    }

    Ok(shape)
}
