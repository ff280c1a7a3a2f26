// textmask-core/src/handlers/cnpj.rs
//! CNPJ handler (`cnpj`): `99.999.999/9999-99` with weighted mod-11 check
//! digits.
//!
//! License: MIT OR APACHE 2.0

use crate::handler::{KeyboardType, MaskHandler, MaskType};
use crate::options::MaskOptions;
use crate::templates::compiler::get_or_compile_template;
use crate::validators;

pub const CNPJ_PATTERN: &str = "99.999.999/9999-99";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CnpjHandler;

impl MaskHandler for CnpjHandler {
    fn mask_type(&self) -> MaskType {
        MaskType::Cnpj
    }

    fn keyboard_type(&self) -> KeyboardType {
        KeyboardType::Numeric
    }

    fn get_value(&self, raw: &str, _options: &MaskOptions) -> String {
        get_or_compile_template(CNPJ_PATTERN).apply(raw)
    }

    fn get_raw_value(&self, display: &str, _options: &MaskOptions) -> String {
        get_or_compile_template(CNPJ_PATTERN).extract(display)
    }

    fn validate(&self, raw: &str, _options: &MaskOptions) -> bool {
        let template = get_or_compile_template(CNPJ_PATTERN);
        template.is_filled(raw) && validators::is_valid_cnpj(&template.apply(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_and_extract() {
        let opts = MaskOptions::default();
        assert_eq!(CnpjHandler.get_value("11222333000181", &opts), "11.222.333/0001-81");
        assert_eq!(CnpjHandler.get_value("112223330", &opts), "11.222.333/0");
        assert_eq!(CnpjHandler.get_raw_value("11.222.333/0001-81", &opts), "11222333000181");
    }

    #[test]
    fn test_validate_checks_digits() {
        let opts = MaskOptions::default();
        assert!(CnpjHandler.validate("11222333000181", &opts));
        assert!(!CnpjHandler.validate("11222333000180", &opts));
        assert!(!CnpjHandler.validate("1122233300", &opts));
    }
}
