// textmask-core/src/handlers/cel_phone.rs
//! Mobile phone handler (`cel-phone`).
//!
//! `BRL` numbers switch between the 8-digit and 9-digit subscriber layouts
//! depending on how many digits were typed, optionally prefixed by an area
//! code (DDD). `INTERNATIONAL` numbers use a fixed `+999 999 999 999` layout
//! and are always considered complete, since their length varies by country.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::handler::{KeyboardType, MaskHandler, MaskType};
use crate::options::MaskOptions;
use crate::templates::compiler::get_or_compile_template;

const DEFAULT_DDD_MASK: &str = "(99) ";
const INTERNATIONAL_PATTERN: &str = "+999 999 999 999";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhonePlan {
    #[default]
    Brl,
    International,
}

/// Typed view of the options the `cel-phone` handler understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CelPhoneSettings {
    pub plan: PhonePlan,
    pub with_ddd: bool,
    pub ddd_mask: String,
}

impl From<&MaskOptions> for CelPhoneSettings {
    fn from(options: &MaskOptions) -> Self {
        let plan = match options.mask_type.as_deref() {
            None | Some("BRL") => PhonePlan::Brl,
            Some("INTERNATIONAL") => PhonePlan::International,
            Some(other) => {
                debug!("Unknown cel-phone maskType '{}', using BRL.", other);
                PhonePlan::Brl
            }
        };
        Self {
            plan,
            with_ddd: options.with_ddd.unwrap_or(true),
            ddd_mask: options
                .ddd_mask
                .clone()
                .unwrap_or_else(|| DEFAULT_DDD_MASK.to_string()),
        }
    }
}

impl CelPhoneSettings {
    /// Picks the layout for `input`. BRL grows into the 9-digit subscriber
    /// layout once the short one overflows.
    pub fn pattern_for(&self, input: &str) -> String {
        if self.plan == PhonePlan::International {
            return INTERNATIONAL_PATTERN.to_string();
        }
        let prefix = if self.with_ddd { self.ddd_mask.as_str() } else { "" };
        let short = format!("{}9999-9999", prefix);
        let short_capacity = get_or_compile_template(&short).capacity();
        let digits = input.chars().filter(|c| c.is_ascii_digit()).count();
        if digits > short_capacity {
            format!("{}99999-9999", prefix)
        } else {
            short
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CelPhoneHandler;

impl MaskHandler for CelPhoneHandler {
    fn mask_type(&self) -> MaskType {
        MaskType::CelPhone
    }

    fn keyboard_type(&self) -> KeyboardType {
        KeyboardType::Numeric
    }

    fn get_value(&self, raw: &str, options: &MaskOptions) -> String {
        let pattern = CelPhoneSettings::from(options).pattern_for(raw);
        get_or_compile_template(&pattern).apply(raw)
    }

    fn get_raw_value(&self, display: &str, options: &MaskOptions) -> String {
        let pattern = CelPhoneSettings::from(options).pattern_for(display);
        get_or_compile_template(&pattern).extract(display)
    }

    fn validate(&self, raw: &str, options: &MaskOptions) -> bool {
        let settings = CelPhoneSettings::from(options);
        if settings.plan == PhonePlan::International {
            return true;
        }
        get_or_compile_template(&settings.pattern_for(raw)).is_filled(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brl_switches_layout() {
        let opts = MaskOptions::default();
        assert_eq!(CelPhoneHandler.get_value("1134567890", &opts), "(11) 3456-7890");
        assert_eq!(CelPhoneHandler.get_value("11987654321", &opts), "(11) 98765-4321");
        assert_eq!(CelPhoneHandler.get_value("119", &opts), "(11) 9");
        assert_eq!(CelPhoneHandler.get_raw_value("(11) 98765-4321", &opts), "11987654321");
    }

    #[test]
    fn test_brl_validate() {
        let opts = MaskOptions::default();
        assert!(CelPhoneHandler.validate("1134567890", &opts));
        assert!(CelPhoneHandler.validate("11987654321", &opts));
        assert!(!CelPhoneHandler.validate("113456789", &opts));
    }

    #[test]
    fn test_without_ddd() {
        let opts = MaskOptions::default().with_ddd(false);
        assert_eq!(CelPhoneHandler.get_value("987654321", &opts), "98765-4321");
        assert_eq!(CelPhoneHandler.get_value("34567890", &opts), "3456-7890");
    }

    #[test]
    fn test_custom_ddd_mask() {
        let opts = MaskOptions::default().with_ddd_mask("99 ");
        assert_eq!(CelPhoneHandler.get_value("1134567890", &opts), "11 3456-7890");
    }

    #[test]
    fn test_international() {
        let opts = MaskOptions::default().with_mask_type("INTERNATIONAL");
        assert_eq!(CelPhoneHandler.get_value("551199998888", &opts), "+551 199 998 888");
        assert_eq!(CelPhoneHandler.get_raw_value("+551 199 998 888", &opts), "551199998888");
        assert!(CelPhoneHandler.validate("55", &opts));
    }
}
