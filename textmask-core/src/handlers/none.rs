// textmask-core/src/handlers/none.rs
//! The passthrough handler behind the `none` identifier and the registry's
//! universal fallback.
//!
//! License: MIT OR APACHE 2.0

use crate::handler::{KeyboardType, MaskHandler, MaskType};
use crate::options::MaskOptions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoneHandler;

impl MaskHandler for NoneHandler {
    fn mask_type(&self) -> MaskType {
        MaskType::None
    }

    fn keyboard_type(&self) -> KeyboardType {
        KeyboardType::Text
    }

    fn get_value(&self, raw: &str, _options: &MaskOptions) -> String {
        raw.to_string()
    }

    fn get_raw_value(&self, display: &str, _options: &MaskOptions) -> String {
        display.to_string()
    }

    fn validate(&self, _raw: &str, _options: &MaskOptions) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let opts = MaskOptions::default();
        assert_eq!(NoneHandler.get_value("abc (1)", &opts), "abc (1)");
        assert_eq!(NoneHandler.get_raw_value("abc (1)", &opts), "abc (1)");
        assert!(NoneHandler.validate("", &opts));
    }
}
