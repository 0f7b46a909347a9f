//! Error types for DDS decoding.

use thiserror::Error;

/// Errors that can occur when decoding a DDS file.
///
/// Every error is terminal: decoding is a pure function of the input bytes,
/// so retrying with the same buffer yields the same result.
#[derive(Debug, Error)]
pub enum Error {
    /// The bytes are not a well-formed DDS file.
    #[error("malformed DDS: {0}")]
    MalformedInput(String),

    /// The pixel format has no canonical mapping or is explicitly excluded.
    #[error("unsupported DDS format: {0}")]
    UnsupportedFormat(String),

    /// The resource dimension is invalid or not supported.
    #[error("unsupported DDS dimension: {0}")]
    UnsupportedDimension(String),

    /// A size, array or mip count exceeds the hardware maximum.
    #[error("{what} {value} exceeds the limit of {limit}")]
    ResourceLimitExceeded {
        what: &'static str,
        value: u32,
        limit: u32,
    },
}

impl From<veles_common::Error> for Error {
    fn from(err: veles_common::Error) -> Self {
        Error::MalformedInput(err.to_string())
    }
}

/// Result type for DDS operations.
pub type Result<T> = std::result::Result<T, Error>;
