//! DDS texture decoding and subresource layout.
//!
//! Parses the DDS container (legacy and DX10 headers), maps the pixel format
//! onto the DXGI numbering, classifies the resource dimension and lays out
//! every (array slice, mip level) subresource against the pixel blob. The
//! result is GPU-neutral: offsets and pitches a consumer can hand to any
//! upload path.
//!
//! # Example
//!
//! ```no_run
//! use veles_dds::{DdsTexture, DecodeOptions};
//!
//! let data = std::fs::read("path/to/texture.dds")?;
//! let texture = DdsTexture::parse_with(&data, DecodeOptions::new().with_max_size(1024))?;
//! let layout = texture.layout();
//! println!("{:?} {}x{} {:?}", layout.dimension(), layout.width(), layout.height(), layout.format());
//! for (i, sub) in layout.subresources().iter().enumerate() {
//!     let bytes = texture.subresource_data(i).unwrap_or_default();
//!     println!("#{i}: offset {} row pitch {} ({} bytes)", sub.offset, sub.row_pitch, bytes.len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod alpha;
mod dimension;
mod error;
mod format;
mod header;
mod layout;
pub mod limits;
mod pixel_format;
mod surface;
mod texture;

pub use alpha::{resolve_alpha_mode, AlphaMode};
pub use dimension::{check_array_size, classify, ResourceDimension, TextureShape};
pub use error::{Error, Result};
pub use format::CanonicalFormat;
pub use header::{
    decode_headers, is_dds, Caps2Flags, DdsHeader, DdsHeaderDxt10, DdsPixelFormat, DecodedHeaders,
    FourCC, HeaderFlags, MiscFlags, PixelFormatFlags,
};
pub use layout::{build_mip_chain, MipChain, MipChainRequest, SubresourceDescriptor};
pub use pixel_format::{resolve_format, ChannelMasks};
pub use surface::{FormatFamily, SurfaceInfo};
pub use texture::{DdsTexture, DecodeOptions, TextureLayout};

/// DDS file magic ("DDS " read as a little-endian u32).
pub const DDS_MAGIC: u32 = 0x2053_4444;
