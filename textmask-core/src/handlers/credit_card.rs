// textmask-core/src/handlers/credit_card.rs
//! Credit card handler (`credit-card`).
//!
//! The digit grouping depends on the card scheme, which is detected from the
//! leading digits of the input unless the `issuer` option pins it. Completeness
//! additionally requires a valid Luhn checksum.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::handler::{KeyboardType, MaskHandler, MaskType};
use crate::options::MaskOptions;
use crate::templates::compiler::get_or_compile_template;
use crate::validators;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardScheme {
    VisaOrMastercard,
    Amex,
    Diners,
}

impl CardScheme {
    /// Detects the scheme from the leading digits. Unknown prefixes use the
    /// default 4x4 grouping.
    pub fn detect(digits: &str) -> Self {
        if digits.starts_with("34") || digits.starts_with("37") {
            return CardScheme::Amex;
        }
        if digits.starts_with("36") || digits.starts_with("38") {
            return CardScheme::Diners;
        }
        match digits.get(..3).and_then(|p| p.parse::<u16>().ok()) {
            Some(300..=305) => CardScheme::Diners,
            _ => CardScheme::VisaOrMastercard,
        }
    }

    pub fn from_issuer(issuer: &str) -> Option<Self> {
        match issuer {
            "visa-or-mastercard" => Some(CardScheme::VisaOrMastercard),
            "amex" => Some(CardScheme::Amex),
            "diners" => Some(CardScheme::Diners),
            _ => None,
        }
    }

    pub const fn pattern(self) -> &'static str {
        match self {
            CardScheme::VisaOrMastercard => "9999 9999 9999 9999",
            CardScheme::Amex => "9999 999999 99999",
            CardScheme::Diners => "9999 999999 9999",
        }
    }
}

/// Typed view of the options the `credit-card` handler understands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreditCardSettings {
    pub issuer: Option<CardScheme>,
}

impl From<&MaskOptions> for CreditCardSettings {
    fn from(options: &MaskOptions) -> Self {
        let issuer = options.issuer.as_deref().and_then(|name| {
            let scheme = CardScheme::from_issuer(name);
            if scheme.is_none() {
                debug!("Unknown card issuer '{}', detecting scheme from input.", name);
            }
            scheme
        });
        Self { issuer }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreditCardHandler;

impl CreditCardHandler {
    pub fn scheme_for(&self, input: &str, options: &MaskOptions) -> CardScheme {
        CreditCardSettings::from(options).issuer.unwrap_or_else(|| {
            let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
            CardScheme::detect(&digits)
        })
    }
}

impl MaskHandler for CreditCardHandler {
    fn mask_type(&self) -> MaskType {
        MaskType::CreditCard
    }

    fn keyboard_type(&self) -> KeyboardType {
        KeyboardType::Numeric
    }

    fn get_value(&self, raw: &str, options: &MaskOptions) -> String {
        let scheme = self.scheme_for(raw, options);
        get_or_compile_template(scheme.pattern()).apply(raw)
    }

    fn get_raw_value(&self, display: &str, options: &MaskOptions) -> String {
        let scheme = self.scheme_for(display, options);
        get_or_compile_template(scheme.pattern()).extract(display)
    }

    fn validate(&self, raw: &str, options: &MaskOptions) -> bool {
        let template = get_or_compile_template(self.scheme_for(raw, options).pattern());
        template.is_filled(raw) && validators::is_valid_credit_card_programmatically(&template.apply(raw))
    }
}
