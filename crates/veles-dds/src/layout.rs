//! Mip chain subresource layout.
//!
//! Subresources are laid out slice-major, mip-minor, exactly as they are
//! stored in the pixel blob:
//!
//! ```text
//! slice 0: mip 0, mip 1, .., mip N-1
//! slice 1: mip 0, mip 1, .., mip N-1
//! ..
//! ```
//!
//! Every slice restarts from the full extent. Levels larger than the
//! requested maximum size are skipped but still consume their bytes.

use crate::format::CanonicalFormat;
use crate::surface::SurfaceInfo;
use crate::{Error, Result};

/// Position and pitches of one subresource inside the pixel blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SubresourceDescriptor {
    /// Byte offset from the start of the pixel blob.
    pub offset: u64,
    pub row_pitch: u64,
    /// Bytes of one 2D slice of the level.
    pub slice_pitch: u64,
}

/// Input of [`build_mip_chain`].
#[derive(Debug, Clone, Copy)]
pub struct MipChainRequest {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub mip_count: u32,
    pub array_size: u32,
    pub format: CanonicalFormat,
    /// Largest extent to keep, `0` keeps every level.
    pub max_size: u32,
}

/// Result of laying out a mip chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MipChain {
    pub subresources: Vec<SubresourceDescriptor>,
    /// Extent of the first kept level.
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    /// Levels kept per slice.
    pub mip_count: u32,
    /// Levels skipped per slice.
    pub skipped: u32,
}

impl MipChainRequest {
    fn keeps(&self, width: u32, height: u32, depth: u32) -> bool {
        self.mip_count <= 1
            || self.max_size == 0
            || (width <= self.max_size && height <= self.max_size && depth <= self.max_size)
    }
}

/// Lay out every (array slice, mip level) pair against a pixel blob of
/// `data_len` bytes.
pub fn build_mip_chain(request: &MipChainRequest, data_len: usize) -> Result<MipChain> {
    if data_len == 0 {
        return Err(Error::MalformedInput("pixel data is empty".into()));
    }

    // Only the full extent can be empty: later levels clamp to 1. An empty
    // first level would let every slice lay out for free.
    let first = SurfaceInfo::compute(request.width, request.height, request.format);
    if first.num_bytes.saturating_mul(u64::from(request.depth)) == 0 {
        return Err(Error::MalformedInput(format!(
            "size was zero: {}x{}x{} {:?} has no bytes",
            request.width, request.height, request.depth, request.format
        )));
    }

    let data_len = data_len as u64;
    let capacity = (request.mip_count as usize).saturating_mul(request.array_size as usize);
    let mut subresources = Vec::with_capacity(capacity.min(1 << 16));
    let mut extent: Option<(u32, u32, u32)> = None;
    let mut first_skip: Option<u32> = None;
    let mut offset: u64 = 0;

    for slice in 0..request.array_size {
        let (mut width, mut height, mut depth) = (request.width, request.height, request.depth);
        let mut skipped = 0u32;

        for level in 0..request.mip_count {
            let surface = SurfaceInfo::compute(width, height, request.format);

            if request.keeps(width, height, depth) {
                extent.get_or_insert((width, height, depth));
                tracing::trace!(
                    slice,
                    level,
                    offset,
                    row_pitch = surface.row_bytes,
                    slice_pitch = surface.num_bytes,
                    "subresource"
                );
                subresources.push(SubresourceDescriptor {
                    offset,
                    row_pitch: surface.row_bytes,
                    slice_pitch: surface.num_bytes,
                });
            } else {
                skipped += 1;
            }

            offset = offset.saturating_add(surface.num_bytes.saturating_mul(u64::from(depth)));
            if offset > data_len {
                return Err(Error::MalformedInput(format!(
                    "file too small: slice {} mip {} ends at byte {} of {}",
                    slice, level, offset, data_len
                )));
            }

            width = (width / 2).max(1);
            height = (height / 2).max(1);
            depth = (depth / 2).max(1);
        }

        match first_skip {
            None => first_skip = Some(skipped),
            Some(expected) if expected != skipped => {
                return Err(Error::MalformedInput(format!(
                    "inconsistent mip skip across array slices: slice 0 skipped {}, slice {} skipped {}",
                    expected, slice, skipped
                )));
            }
            Some(_) => {}
        }
    }

    let Some((width, height, depth)) = extent else {
        return Err(Error::MalformedInput("size was zero".into()));
    };

    let skipped = first_skip.unwrap_or(0);
    if skipped > 0 {
        tracing::debug!(skipped, max_size = request.max_size, "skipped oversized mip levels");
    }

    Ok(MipChain {
        subresources,
        width,
        height,
        depth,
        mip_count: request.mip_count - skipped,
        skipped,
    })
}
