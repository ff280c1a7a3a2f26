// textmask-core/src/handlers/only_numbers.rs
//! Digits-only handler (`only-numbers`): keeps ASCII digits, drops the rest.
//!
//! License: MIT OR APACHE 2.0

use crate::handler::{KeyboardType, MaskHandler, MaskType};
use crate::options::MaskOptions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnlyNumbersHandler;

fn only_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

impl MaskHandler for OnlyNumbersHandler {
    fn mask_type(&self) -> MaskType {
        MaskType::OnlyNumbers
    }

    fn keyboard_type(&self) -> KeyboardType {
        KeyboardType::Numeric
    }

    fn get_value(&self, raw: &str, _options: &MaskOptions) -> String {
        only_digits(raw)
    }

    fn get_raw_value(&self, display: &str, _options: &MaskOptions) -> String {
        only_digits(display)
    }

    fn validate(&self, _raw: &str, _options: &MaskOptions) -> bool {
        true
    }
}
