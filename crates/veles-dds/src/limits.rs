//! Hardware resource limits.
//!
//! Values are the Direct3D 12 documented maxima (`D3D12_REQ_*`).

use crate::dimension::{ResourceDimension, TextureShape};
use crate::{Error, Result};

pub const MAX_MIP_LEVELS: u32 = 15;
pub const TEXTURE1D_U_DIMENSION: u32 = 16384;
pub const TEXTURE1D_ARRAY_AXIS_DIMENSION: u32 = 2048;
pub const TEXTURE2D_ARRAY_AXIS_DIMENSION: u32 = 2048;
pub const TEXTURECUBE_DIMENSION: u32 = 16384;
pub const TEXTURE3D_U_V_OR_W_DIMENSION: u32 = 2048;

fn check(what: &'static str, value: u32, limit: u32) -> Result<()> {
    if value > limit {
        return Err(Error::ResourceLimitExceeded { what, value, limit });
    }
    Ok(())
}

/// Validate the mip count and the per-dimension extents of a texture.
///
/// Plain (non-cube) 2D textures carry no size check here.
pub fn validate(shape: &TextureShape, mip_count: u32) -> Result<()> {
    check("mip count", mip_count, MAX_MIP_LEVELS)?;

    match shape.dimension {
        ResourceDimension::Texture1D => {
            check("1D array size", shape.array_size, TEXTURE1D_ARRAY_AXIS_DIMENSION)?;
            check("1D width", shape.width, TEXTURE1D_U_DIMENSION)?;
        }
        ResourceDimension::Texture2D if shape.is_cube_map => {
            check("cube array size", shape.array_size, TEXTURE2D_ARRAY_AXIS_DIMENSION)?;
            check("cube width", shape.width, TEXTURECUBE_DIMENSION)?;
            check("cube height", shape.height, TEXTURECUBE_DIMENSION)?;
        }
        ResourceDimension::Texture2D => {}
        ResourceDimension::Texture3D => {
            check("3D array size", shape.array_size, 1)?;
            check("3D width", shape.width, TEXTURE3D_U_V_OR_W_DIMENSION)?;
            check("3D height", shape.height, TEXTURE3D_U_V_OR_W_DIMENSION)?;
            check("3D depth", shape.depth, TEXTURE3D_U_V_OR_W_DIMENSION)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(dimension: ResourceDimension, width: u32, height: u32, depth: u32, array_size: u32) -> TextureShape {
        TextureShape {
            dimension,
            width,
            height,
            depth,
            array_size,
            is_cube_map: false,
        }
    }

    fn assert_limit(result: Result<()>, expected_what: &str) {
        match result {
            Err(Error::ResourceLimitExceeded { what, .. }) => assert_eq!(what, expected_what),
            other => panic!("expected limit error for {}, got {:?}", expected_what, other),
        }
    }

    #[test]
    fn test_mip_count_limit() {
        let s = shape(ResourceDimension::Texture2D, 4, 4, 1, 1);
        assert!(validate(&s, 15).is_ok());
        assert_limit(validate(&s, 16), "mip count");
    }

    #[test]
    fn test_1d_limits() {
        assert!(validate(&shape(ResourceDimension::Texture1D, 16384, 1, 1, 2048), 1).is_ok());
        assert_limit(validate(&shape(ResourceDimension::Texture1D, 16385, 1, 1, 1), 1), "1D width");
        assert_limit(validate(&shape(ResourceDimension::Texture1D, 4, 1, 1, 2049), 1), "1D array size");
    }

    #[test]
    fn test_2d_without_cube_is_unchecked() {
        assert!(validate(&shape(ResourceDimension::Texture2D, 100_000, 100_000, 1, 10_000), 1).is_ok());
    }

    #[test]
    fn test_cube_limits() {
        let mut s = shape(ResourceDimension::Texture2D, 16384, 16384, 1, 6);
        s.is_cube_map = true;
        assert!(validate(&s, 1).is_ok());

        s.height = 16385;
        assert_limit(validate(&s, 1), "cube height");

        s.height = 16;
        s.array_size = 2052;
        assert_limit(validate(&s, 1), "cube array size");
    }

    #[test]
    fn test_3d_limits() {
        assert!(validate(&shape(ResourceDimension::Texture3D, 2048, 2048, 2048, 1), 1).is_ok());
        assert_limit(validate(&shape(ResourceDimension::Texture3D, 4, 4, 2049, 1), 1), "3D depth");
        assert_limit(validate(&shape(ResourceDimension::Texture3D, 4, 4, 4, 2), 1), "3D array size");
    }
}
