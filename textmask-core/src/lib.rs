// textmask-core/src/lib.rs
//! # textmask Core Library
//!
//! `textmask-core` turns an unconstrained raw character stream into a
//! formatted display string for a named mask type (a phone number, a monetary
//! amount, a date, a document number, a generic pattern), recovers the raw
//! value from a display string, and reports whether a value is complete.
//!
//! The engine is pure and synchronous. Every mask operation is a total
//! function: malformed input degrades to best-effort output, unknown mask
//! types fall back to a passthrough, and nothing in the masking path returns
//! an error.
//!
//! ## Modules
//!
//! * `handler`: Defines the `MaskHandler` trait, `MaskType` and `KeyboardType`.
//! * `handlers`: Concrete handlers, one per mask family.
//! * `registry`: Resolves a type identifier into a handler.
//! * `templates`: Placeholder templates and their compiled-pattern cache.
//! * `options`: The generic options bag handed to every handler.
//! * `validators`: Checksum validation (Luhn, CPF, CNPJ).
//! * `masked_value`: One-shot helpers returning display, raw and completeness together.
//! * `config`: Named mask definitions parsed from YAML.
//! * `diagnostics`: PII-aware debug logging.
//! * `errors`: Error type for the configuration layer.
//!
//! ## Usage Example
//!
//! ```rust
//! use textmask_core::{resolve, MaskHandler, MaskOptions};
//!
//! let phone = resolve(Some("custom"));
//! let options = MaskOptions::default().with_mask("(999) 999-9999");
//!
//! assert_eq!(phone.get_value("5551234567", &options), "(555) 123-4567");
//! assert_eq!(phone.get_value("555123", &options), "(555) 123");
//! assert_eq!(phone.get_raw_value("(555) 123-4567", &options), "5551234567");
//! assert!(phone.validate("5551234567", &options));
//! assert!(!phone.validate("555123", &options));
//! ```
//!
//! ## Error Handling
//!
//! Only the configuration layer is fallible. It uses `anyhow::Error` for YAML
//! parsing context and `TextmaskError` for definition problems. The crate has
//! no file or network surface; reading configuration files is left to callers.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod handler;
pub mod handlers;
pub mod masked_value;
pub mod options;
pub mod registry;
pub mod templates;
pub mod validators;

/// Re-exports the configuration types and functions for managing named masks.
pub use config::{
    merge_masks,
    MaskConfig,
    MaskDefinition,
    MAX_PATTERN_LENGTH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::TextmaskError;

/// Re-exports the handler trait and its identifiers.
pub use handler::{KeyboardType, MaskHandler, MaskType};

/// Re-exports the concrete handlers.
pub use handlers::{
    CelPhoneHandler, CnpjHandler, CpfHandler, CreditCardHandler, CustomHandler,
    DateTimeHandler, MoneyHandler, NoneHandler, OnlyNumbersHandler, ZipCodeHandler,
};

pub use masked_value::{mask_value, MaskedValue};
pub use options::MaskOptions;
pub use registry::{registered_types, resolve, Mask};
pub use templates::compiler::{get_or_compile_template, Template};
