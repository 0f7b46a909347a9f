//! Parsed DDS texture and its subresource layout.

use crate::alpha::{resolve_alpha_mode, AlphaMode};
use crate::dimension::{check_array_size, classify, ResourceDimension};
use crate::format::CanonicalFormat;
use crate::header::{decode_headers, DdsHeader, DdsHeaderDxt10};
use crate::layout::{build_mip_chain, MipChainRequest, SubresourceDescriptor};
use crate::pixel_format::resolve_format;
use crate::{limits, Result};

/// Options controlling how a texture is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Skip mip levels with any extent above this size. `0` keeps every level.
    pub max_size: u32,
    /// Report the sRGB variant of the format when one exists.
    pub force_srgb: bool,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_force_srgb(mut self, force_srgb: bool) -> Self {
        self.force_srgb = force_srgb;
        self
    }
}

/// Shape, format and subresource table of a decoded texture.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextureLayout {
    dimension: ResourceDimension,
    width: u32,
    height: u32,
    depth: u32,
    array_size: u32,
    mip_count: u32,
    format: CanonicalFormat,
    is_cube_map: bool,
    alpha_mode: AlphaMode,
    subresources: Vec<SubresourceDescriptor>,
}

impl TextureLayout {
    pub fn dimension(&self) -> ResourceDimension {
        self.dimension
    }

    /// Width of the largest kept mip level.
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of array slices. Cube maps count six per cube.
    pub fn array_size(&self) -> u32 {
        self.array_size
    }

    /// Mip levels per slice, after skipping oversized levels.
    pub fn mip_count(&self) -> u32 {
        self.mip_count
    }

    pub fn format(&self) -> CanonicalFormat {
        self.format
    }

    pub fn is_cube_map(&self) -> bool {
        self.is_cube_map
    }

    pub fn alpha_mode(&self) -> AlphaMode {
        self.alpha_mode
    }

    /// Subresources ordered slice-major, mip-minor.
    pub fn subresources(&self) -> &[SubresourceDescriptor] {
        &self.subresources
    }

    /// Flat index of the subresource for `array_slice` and `mip`.
    pub fn subresource_index(&self, array_slice: u32, mip: u32) -> Option<usize> {
        if array_slice >= self.array_size || mip >= self.mip_count {
            return None;
        }
        Some(array_slice as usize * self.mip_count as usize + mip as usize)
    }

    /// Depth of kept mip level `mip`.
    pub fn depth_of_mip(&self, mip: u32) -> u32 {
        self.depth.checked_shr(mip).unwrap_or(0).max(1)
    }
}

/// A parsed DDS file borrowing its pixel data.
#[derive(Debug, Clone)]
pub struct DdsTexture<'a> {
    header: DdsHeader,
    dx10: Option<DdsHeaderDxt10>,
    layout: TextureLayout,
    pixel_data: &'a [u8],
}

impl<'a> DdsTexture<'a> {
    /// Parse a DDS file with default options.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        Self::parse_with(data, DecodeOptions::default())
    }

    /// Parse a DDS file.
    ///
    /// Either the whole layout is valid against `data`, or an error is
    /// returned. No partial layout is produced.
    pub fn parse_with(data: &'a [u8], options: DecodeOptions) -> Result<Self> {
        let decoded = decode_headers(data)?;
        let header = decoded.header;
        let dx10 = decoded.dx10;

        let mip_count = header.mip_count();
        if let Some(dx10) = &dx10 {
            check_array_size(dx10)?;
        }
        let mut format = resolve_format(&header, dx10.as_ref())?;
        let shape = classify(&header, dx10.as_ref())?;
        limits::validate(&shape, mip_count)?;

        tracing::debug!(
            dimension = ?shape.dimension,
            width = shape.width,
            height = shape.height,
            depth = shape.depth,
            array_size = shape.array_size,
            mip_count,
            ?format,
            dx10 = dx10.is_some(),
            "decoded DDS header"
        );

        let chain = build_mip_chain(
            &MipChainRequest {
                width: shape.width,
                height: shape.height,
                depth: shape.depth,
                mip_count,
                array_size: shape.array_size,
                format,
                max_size: options.max_size,
            },
            decoded.pixel_data.len(),
        )?;

        if options.force_srgb {
            format = format.to_srgb();
        }

        let layout = TextureLayout {
            dimension: shape.dimension,
            width: chain.width,
            height: chain.height,
            depth: chain.depth,
            array_size: shape.array_size,
            mip_count: chain.mip_count,
            format,
            is_cube_map: shape.is_cube_map,
            alpha_mode: resolve_alpha_mode(&header, dx10.as_ref()),
            subresources: chain.subresources,
        };

        Ok(Self {
            header,
            dx10,
            layout,
            pixel_data: decoded.pixel_data,
        })
    }

    pub fn header(&self) -> &DdsHeader {
        &self.header
    }

    pub fn dx10_header(&self) -> Option<&DdsHeaderDxt10> {
        self.dx10.as_ref()
    }

    pub fn layout(&self) -> &TextureLayout {
        &self.layout
    }

    pub fn into_layout(self) -> TextureLayout {
        self.layout
    }

    /// Pixel data following the headers.
    pub fn pixel_data(&self) -> &'a [u8] {
        self.pixel_data
    }

    /// Bytes of subresource `index`, covering every depth slice of its level.
    pub fn subresource_data(&self, index: usize) -> Option<&'a [u8]> {
        let sub = self.layout.subresources.get(index)?;
        let mip = (index % self.layout.mip_count as usize) as u32;
        let len = sub
            .slice_pitch
            .checked_mul(u64::from(self.layout.depth_of_mip(mip)))?;
        let start = usize::try_from(sub.offset).ok()?;
        let end = start.checked_add(usize::try_from(len).ok()?)?;
        self.pixel_data.get(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(depth: u32, array_size: u32, mip_count: u32) -> TextureLayout {
        TextureLayout {
            dimension: ResourceDimension::Texture3D,
            width: 4,
            height: 4,
            depth,
            array_size,
            mip_count,
            format: CanonicalFormat::R8Unorm,
            is_cube_map: false,
            alpha_mode: AlphaMode::Unknown,
            subresources: Vec::new(),
        }
    }

    #[test]
    fn test_subresource_index() {
        let l = layout(1, 3, 4);
        assert_eq!(l.subresource_index(0, 0), Some(0));
        assert_eq!(l.subresource_index(0, 3), Some(3));
        assert_eq!(l.subresource_index(2, 1), Some(9));
        assert_eq!(l.subresource_index(3, 0), None);
        assert_eq!(l.subresource_index(0, 4), None);
    }

    #[test]
    fn test_depth_of_mip() {
        let l = layout(8, 1, 4);
        let depths: Vec<u32> = (0..5).map(|m| l.depth_of_mip(m)).collect();
        assert_eq!(depths, vec![8, 4, 2, 1, 1]);
        assert_eq!(l.depth_of_mip(40), 1);
    }

    #[test]
    fn test_options_builder() {
        let options = DecodeOptions::new().with_max_size(512).with_force_srgb(true);
        assert_eq!(options.max_size, 512);
        assert!(options.force_srgb);
        assert_eq!(DecodeOptions::default(), DecodeOptions { max_size: 0, force_srgb: false });
    }
}
