//! Error types for the filter crate

use thiserror::Error;

/// Errors that can occur while sizing, hashing, or training a filter
#[derive(Debug, Error)]
pub enum FilterError {
    /// Sizing derived more hash functions than a single 128-bit digest can
    /// feed through the affine derivation. Drawing positions from several
    /// independently seeded digests is not implemented.
    #[error("filter needs {required} hash functions but a single 128-bit digest supports at most {supported}; a multi-digest derivation strategy would be required")]
    MultiDigestRequired { required: usize, supported: usize },

    #[error("hash input of {len} bytes is not a multiple of the 16-byte block size")]
    UnalignedHashInput { len: usize },

    #[error("invalid filter parameters: {0}")]
    InvalidParameters(String),
}
