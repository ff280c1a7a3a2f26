// textmask-core/src/errors.rs
//! errors.rs - Custom error types for the textmask-core library.
//!
//! The masking engine itself is total and never returns an error. These
//! variants cover the configuration layer: parsing, validating and looking up
//! named mask definitions.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `textmask-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TextmaskError {
    #[error("Mask definition '{0}' is invalid: {1}")]
    InvalidDefinition(String, String),

    #[error("Mask '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("No mask named '{0}' is defined.")]
    UnknownMask(String),

    #[error("Failed to parse mask configuration: {0}")]
    ParseError(String),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
