// textmask-core/src/handlers/zip_code.rs
//! Brazilian postal code handler (`zip-code`): `99999-999`.
//!
//! License: MIT OR APACHE 2.0

use crate::handler::{KeyboardType, MaskHandler, MaskType};
use crate::options::MaskOptions;
use crate::templates::compiler::get_or_compile_template;

pub const ZIP_CODE_PATTERN: &str = "99999-999";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZipCodeHandler;

impl MaskHandler for ZipCodeHandler {
    fn mask_type(&self) -> MaskType {
        MaskType::ZipCode
    }

    fn keyboard_type(&self) -> KeyboardType {
        KeyboardType::Numeric
    }

    fn get_value(&self, raw: &str, _options: &MaskOptions) -> String {
        get_or_compile_template(ZIP_CODE_PATTERN).apply(raw)
    }

    fn get_raw_value(&self, display: &str, _options: &MaskOptions) -> String {
        get_or_compile_template(ZIP_CODE_PATTERN).extract(display)
    }

    fn validate(&self, raw: &str, _options: &MaskOptions) -> bool {
        get_or_compile_template(ZIP_CODE_PATTERN).is_filled(raw)
    }
}
