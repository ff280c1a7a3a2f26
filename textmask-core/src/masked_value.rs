// textmask-core/src/masked_value.rs
//! `masked_value.rs`
//! One-shot helpers that compute everything a text field reports on each
//! edit: the display value, the raw value recovered from it, and whether the
//! value is complete.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};

use crate::diagnostics::log_masked_value_debug;
use crate::handler::MaskHandler;
use crate::options::MaskOptions;
use crate::registry::resolve;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedValue {
    pub display: String,
    pub raw: String,
    pub complete: bool,
}

impl MaskedValue {
    /// Masks `input` with an already resolved handler.
    pub fn compute<H: MaskHandler + ?Sized>(handler: &H, input: &str, options: &MaskOptions) -> Self {
        let display = handler.get_value(input, options);
        let raw = handler.get_raw_value(&display, options);
        let complete = handler.validate(&raw, options);
        log_masked_value_debug(module_path!(), handler.mask_type(), input, &display, complete);
        Self { display, raw, complete }
    }
}

/// Resolves `mask_type` and masks `input` in a single call.
///
/// Absent values are treated as empty, and unknown mask types pass the input
/// through unchanged.
pub fn mask_value(mask_type: Option<&str>, input: Option<&str>, options: &MaskOptions) -> MaskedValue {
    let mask = resolve(mask_type);
    MaskedValue::compute(&mask, input.unwrap_or_default(), options)
}
