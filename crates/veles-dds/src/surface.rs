//! Per-level surface size computation.

use crate::format::CanonicalFormat;

/// Storage family of a format, which decides how a level's bytes are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatFamily {
    /// 4×4 compressed blocks.
    BlockCompressed { bytes_per_block: u64 },
    /// Two pixels share one packed element.
    Packed { bytes_per_element: u64 },
    /// 4:1:1 planar layout with its own row rules.
    Nv11,
    /// 4:2:0 planar layout: a luma plane followed by a half-height chroma plane.
    Planar { bytes_per_element: u64 },
    /// One fixed-size pixel after another.
    Uncompressed,
}

impl FormatFamily {
    pub fn of(format: CanonicalFormat) -> Self {
        use CanonicalFormat::*;

        if let Some(bytes) = format.block_bytes() {
            return FormatFamily::BlockCompressed {
                bytes_per_block: u64::from(bytes),
            };
        }

        match format {
            R8G8B8G8Unorm | G8R8G8B8Unorm | Yuy2 => FormatFamily::Packed { bytes_per_element: 4 },
            Y210 | Y216 => FormatFamily::Packed { bytes_per_element: 8 },
            Nv11 => FormatFamily::Nv11,
            Nv12 | Opaque420 => FormatFamily::Planar { bytes_per_element: 2 },
            P010 | P016 => FormatFamily::Planar { bytes_per_element: 4 },
            _ => FormatFamily::Uncompressed,
        }
    }
}

/// Byte size of one mip level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceInfo {
    /// Total bytes of one 2D slice of the level.
    pub num_bytes: u64,
    /// Bytes per row (of blocks, for block-compressed formats).
    pub row_bytes: u64,
    pub num_rows: u64,
}

impl SurfaceInfo {
    /// Compute the surface size of a `width` × `height` level.
    ///
    /// Arithmetic saturates, so absurd extents produce sizes that no pixel
    /// blob can satisfy rather than wrapping around.
    pub fn compute(width: u32, height: u32, format: CanonicalFormat) -> Self {
        let width = u64::from(width);
        let height = u64::from(height);

        match FormatFamily::of(format) {
            FormatFamily::BlockCompressed { bytes_per_block } => {
                let blocks_wide = width.div_ceil(4).max(1);
                let blocks_high = height.div_ceil(4).max(1);
                let row_bytes = blocks_wide.saturating_mul(bytes_per_block);
                Self {
                    num_bytes: row_bytes.saturating_mul(blocks_high),
                    row_bytes,
                    num_rows: blocks_high,
                }
            }
            FormatFamily::Packed { bytes_per_element } => {
                let row_bytes = width.div_ceil(2).saturating_mul(bytes_per_element);
                Self {
                    num_bytes: row_bytes.saturating_mul(height),
                    row_bytes,
                    num_rows: height,
                }
            }
            FormatFamily::Nv11 => {
                let row_bytes = width.div_ceil(4).saturating_mul(4);
                let num_rows = height.saturating_mul(2);
                Self {
                    num_bytes: row_bytes.saturating_mul(num_rows),
                    row_bytes,
                    num_rows,
                }
            }
            FormatFamily::Planar { bytes_per_element } => {
                let row_bytes = width.div_ceil(2).saturating_mul(bytes_per_element);
                let luma_bytes = row_bytes.saturating_mul(height);
                Self {
                    num_bytes: luma_bytes.saturating_add(luma_bytes.div_ceil(2)),
                    row_bytes,
                    num_rows: height + height.div_ceil(2),
                }
            }
            FormatFamily::Uncompressed => {
                let bits = width.saturating_mul(u64::from(format.bits_per_pixel()));
                let row_bytes = bits.div_ceil(8);
                Self {
                    num_bytes: row_bytes.saturating_mul(height),
                    row_bytes,
                    num_rows: height,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_compressed_row_bytes() {
        for width in [0u32, 1, 3, 4, 5, 8, 1023, 1024] {
            let expected_blocks = u64::from(width.div_ceil(4).max(1));
            let bc1 = SurfaceInfo::compute(width, 4, CanonicalFormat::Bc1Unorm);
            let bc7 = SurfaceInfo::compute(width, 4, CanonicalFormat::Bc7Unorm);
            assert_eq!(bc1.row_bytes, expected_blocks * 8, "width {}", width);
            assert_eq!(bc7.row_bytes, expected_blocks * 16, "width {}", width);
        }
    }

    #[test]
    fn test_block_compressed_sizes() {
        let info = SurfaceInfo::compute(8, 8, CanonicalFormat::Bc1Unorm);
        assert_eq!((info.row_bytes, info.num_bytes, info.num_rows), (16, 32, 2));

        // Levels smaller than a block still occupy one block.
        let info = SurfaceInfo::compute(1, 1, CanonicalFormat::Bc3Unorm);
        assert_eq!((info.row_bytes, info.num_bytes), (16, 16));

        let info = SurfaceInfo::compute(1024, 1024, CanonicalFormat::Bc5Unorm);
        assert_eq!(info.num_bytes, 1024 * 1024);
    }

    #[test]
    fn test_packed() {
        let info = SurfaceInfo::compute(5, 3, CanonicalFormat::Yuy2);
        assert_eq!((info.row_bytes, info.num_bytes), (12, 36));

        let info = SurfaceInfo::compute(4, 2, CanonicalFormat::Y216);
        assert_eq!((info.row_bytes, info.num_bytes), (16, 32));
    }

    #[test]
    fn test_nv11() {
        let info = SurfaceInfo::compute(6, 3, CanonicalFormat::Nv11);
        assert_eq!(info.row_bytes, 8);
        assert_eq!(info.num_rows, 6);
        assert_eq!(info.num_bytes, 48);
    }

    #[test]
    fn test_planar() {
        let info = SurfaceInfo::compute(4, 4, CanonicalFormat::Nv12);
        assert_eq!(info.row_bytes, 4);
        assert_eq!(info.num_bytes, 16 + 8);
        assert_eq!(info.num_rows, 6);

        // Odd luma size rounds the chroma plane up.
        let info = SurfaceInfo::compute(3, 3, CanonicalFormat::P010);
        assert_eq!(info.row_bytes, 8);
        assert_eq!(info.num_bytes, 24 + 12);

        let info = SurfaceInfo::compute(1, 1, CanonicalFormat::Opaque420);
        assert_eq!(info.num_bytes, 2 + 1);
    }

    #[test]
    fn test_uncompressed() {
        let info = SurfaceInfo::compute(4, 4, CanonicalFormat::R8G8B8A8Unorm);
        assert_eq!((info.row_bytes, info.num_bytes), (16, 64));

        let info = SurfaceInfo::compute(3, 2, CanonicalFormat::R32G32B32Float);
        assert_eq!((info.row_bytes, info.num_bytes), (36, 72));

        // Sub-byte formats round each row up to whole bytes.
        let info = SurfaceInfo::compute(9, 2, CanonicalFormat::R1Unorm);
        assert_eq!((info.row_bytes, info.num_bytes), (2, 4));
    }

    #[test]
    fn test_huge_extent_saturates() {
        let info = SurfaceInfo::compute(u32::MAX, u32::MAX, CanonicalFormat::R32G32B32A32Float);
        assert_eq!(info.num_bytes, u64::MAX);
    }

    #[test]
    fn test_family_dispatch() {
        assert_eq!(
            FormatFamily::of(CanonicalFormat::Bc4Snorm),
            FormatFamily::BlockCompressed { bytes_per_block: 8 }
        );
        assert_eq!(FormatFamily::of(CanonicalFormat::Nv11), FormatFamily::Nv11);
        assert_eq!(FormatFamily::of(CanonicalFormat::A8Unorm), FormatFamily::Uncompressed);
    }
}
