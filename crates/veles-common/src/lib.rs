//! Common utilities for Veles.
//!
//! This crate provides the foundational pieces shared by the Veles format crates:
//!
//! - [`BinaryReader`] - Bounds-checked little-endian reading from byte slices
//! - [`Error`] - Errors raised while reading raw bytes

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::BinaryReader;
