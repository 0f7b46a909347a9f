//! Veles - DDS texture decoding and subresource layout.
//!
//! This crate provides a unified interface to the Veles crates.
//!
//! # Crates
//!
//! - [`veles_common`] - Common utilities (little-endian binary reading)
//! - [`veles_dds`] - DDS header decoding, format resolution and mip chain layout
//!
//! # Example
//!
//! ```no_run
//! use veles::prelude::*;
//!
//! let data = std::fs::read("texture.dds")?;
//! if is_dds(&data) {
//!     let texture = DdsTexture::parse(&data)?;
//!     println!("Subresources: {}", texture.layout().subresources().len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use veles_common as common;
pub use veles_dds as dds;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use veles_common::BinaryReader;
    pub use veles_dds::{
        is_dds, AlphaMode, CanonicalFormat, DdsTexture, DecodeOptions, ResourceDimension,
        SubresourceDescriptor, TextureLayout,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
