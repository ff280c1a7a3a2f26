// textmask-core/src/handlers/money.rs
//! Monetary amount handler (`money`).
//!
//! Not template based. Typed digits are right-aligned against a fixed decimal
//! precision, the integer part is grouped in threes with a delimiter, and the
//! currency unit is placed before (and optionally after) the amount. With the
//! defaults, `123456` becomes `R$1.234,56`.
//!
//! The raw value is the digit string with leading zeros removed, which keeps
//! `unmask(mask(raw)) == raw` for any raw value without leading zeros. Use
//! [`MoneyHandler::amount`] to get the numeric value.
//!
//! License: MIT OR APACHE 2.0

use crate::handler::{KeyboardType, MaskHandler, MaskType};
use crate::options::MaskOptions;

/// Largest accepted `precision`. Larger values are clamped to it.
pub const MAX_MONEY_PRECISION: usize = 18;

/// Typed view of the options the `money` handler understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneySettings {
    pub precision: usize,
    pub separator: String,
    pub delimiter: String,
    pub unit: String,
    pub suffix_unit: String,
    pub zero_cents: bool,
}

impl Default for MoneySettings {
    fn default() -> Self {
        Self {
            precision: 2,
            separator: ",".to_string(),
            delimiter: ".".to_string(),
            unit: "R$".to_string(),
            suffix_unit: String::new(),
            zero_cents: false,
        }
    }
}

impl From<&MaskOptions> for MoneySettings {
    fn from(options: &MaskOptions) -> Self {
        let defaults = Self::default();
        Self {
            precision: options.precision.unwrap_or(defaults.precision).min(MAX_MONEY_PRECISION),
            separator: options.separator.clone().unwrap_or(defaults.separator),
            delimiter: options.delimiter.clone().unwrap_or(defaults.delimiter),
            unit: options.unit.clone().unwrap_or(defaults.unit),
            suffix_unit: options.suffix_unit.clone().unwrap_or(defaults.suffix_unit),
            zero_cents: options.zero_cents.unwrap_or(defaults.zero_cents),
        }
    }
}

impl MoneySettings {
    fn zero_fraction(&self) -> String {
        format!("{}{}", self.separator, "0".repeat(self.precision))
    }

    /// Collects the significant digits of `input`, ignoring the currency
    /// affixes and, in zero-cents mode, the fixed fractional part.
    fn digits(&self, input: &str) -> String {
        let mut body = input.trim();
        if !self.unit.is_empty() {
            body = body.strip_prefix(self.unit.as_str()).unwrap_or(body);
        }
        if !self.suffix_unit.is_empty() {
            body = body.strip_suffix(self.suffix_unit.as_str()).unwrap_or(body);
        }
        if self.zero_cents && self.precision > 0 {
            body = body.strip_suffix(self.zero_fraction().as_str()).unwrap_or(body);
        }
        body.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Digits without leading zeros; a lone `0` when every digit was zero,
    /// empty when there were no digits at all.
    fn significant_digits(&self, input: &str) -> String {
        let digits = self.digits(input);
        if digits.is_empty() {
            return digits;
        }
        match digits.trim_start_matches('0') {
            "" => "0".to_string(),
            trimmed => trimmed.to_string(),
        }
    }

    fn group_thousands(&self, integer: &str) -> String {
        let len = integer.len();
        let mut out = String::with_capacity(len + len / 3 * self.delimiter.len());
        for (i, c) in integer.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push_str(&self.delimiter);
            }
            out.push(c);
        }
        out
    }

    fn format(&self, digits: &str) -> String {
        let (integer, fraction) = if self.zero_cents {
            (digits.to_string(), "0".repeat(self.precision))
        } else {
            let padded = format!("{:0>width$}", digits, width = self.precision.saturating_add(1));
            let (integer, fraction) = padded.split_at(padded.len() - self.precision);
            (integer.to_string(), fraction.to_string())
        };

        let mut out = String::new();
        out.push_str(&self.unit);
        out.push_str(&self.group_thousands(&integer));
        if self.precision > 0 {
            out.push_str(&self.separator);
            out.push_str(&fraction);
        }
        out.push_str(&self.suffix_unit);
        out
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoneyHandler;

impl MoneyHandler {
    /// Numeric amount of a display (or raw) value, honoring the precision.
    /// Returns `None` when the input has no digits.
    pub fn amount(&self, display: &str, options: &MaskOptions) -> Option<f64> {
        let settings = MoneySettings::from(options);
        let digits = settings.significant_digits(display);
        let value = digits.parse::<f64>().ok()?;
        if settings.zero_cents {
            Some(value)
        } else {
            let exponent = i32::try_from(settings.precision).unwrap_or(i32::MAX);
            Some(value / 10f64.powi(exponent))
        }
    }
}

impl MaskHandler for MoneyHandler {
    fn mask_type(&self) -> MaskType {
        MaskType::Money
    }

    fn keyboard_type(&self) -> KeyboardType {
        KeyboardType::Decimal
    }

    fn get_value(&self, raw: &str, options: &MaskOptions) -> String {
        let settings = MoneySettings::from(options);
        let digits = settings.significant_digits(raw);
        if digits.is_empty() {
            return String::new();
        }
        settings.format(&digits)
    }

    fn get_raw_value(&self, display: &str, options: &MaskOptions) -> String {
        MoneySettings::from(options).significant_digits(display)
    }

    /// Any amount is complete: there are no placeholders left to fill.
    fn validate(&self, _raw: &str, _options: &MaskOptions) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> MaskOptions {
        MaskOptions::default()
            .with_unit("$")
            .with_separator(".")
            .with_delimiter(",")
    }

    #[test]
    fn test_default_brl_format() {
        let opts = MaskOptions::default();
        assert_eq!(MoneyHandler.get_value("123456", &opts), "R$1.234,56");
        assert_eq!(MoneyHandler.get_value("5", &opts), "R$0,05");
        assert_eq!(MoneyHandler.get_value("0", &opts), "R$0,00");
        assert_eq!(MoneyHandler.get_value("123456789", &opts), "R$1.234.567,89");
        assert_eq!(MoneyHandler.get_value("", &opts), "");
        assert_eq!(MoneyHandler.get_value("abc", &opts), "");
    }

    #[test]
    fn test_remasking_display_value_is_stable() {
        let opts = MaskOptions::default();
        let display = MoneyHandler.get_value("123456", &opts);
        assert_eq!(MoneyHandler.get_value(&display, &opts), display);
        assert_eq!(MoneyHandler.get_value("R$01,23", &opts), "R$1,23");
    }

    #[test]
    fn test_custom_separators_and_suffix() {
        let opts = usd().with_suffix_unit(" USD");
        assert_eq!(MoneyHandler.get_value("100000", &opts), "$1,000.00 USD");
        assert_eq!(MoneyHandler.get_raw_value("$1,000.00 USD", &opts), "100000");
    }

    #[test]
    fn test_precision() {
        let none = MaskOptions::default().with_precision(0).with_unit("");
        assert_eq!(MoneyHandler.get_value("1234567", &none), "1.234.567");
        let three = usd().with_precision(3);
        assert_eq!(MoneyHandler.get_value("12345", &three), "$12.345");
    }

    #[test]
    fn test_precision_is_clamped() {
        let huge = MaskOptions::default().with_precision(usize::MAX);
        assert_eq!(MoneySettings::from(&huge).precision, MAX_MONEY_PRECISION);
        let display = MoneyHandler.get_value("123", &huge);
        assert_eq!(display, format!("R$0,{:0>18}", "123"));
        assert_eq!(MoneyHandler.get_raw_value(&display, &huge), "123");
        assert!(MoneyHandler.amount(&display, &huge).is_some());
    }

    #[test]
    fn test_zero_cents() {
        let opts = MaskOptions::default().with_zero_cents(true);
        assert_eq!(MoneyHandler.get_value("1234", &opts), "R$1.234,00");
        assert_eq!(MoneyHandler.get_raw_value("R$1.234,00", &opts), "1234");
        assert_eq!(MoneyHandler.get_value("R$1.234,00", &opts), "R$1.234,00");
    }

    #[test]
    fn test_raw_value_strips_leading_zeros() {
        let opts = MaskOptions::default();
        assert_eq!(MoneyHandler.get_raw_value("R$0,05", &opts), "5");
        assert_eq!(MoneyHandler.get_raw_value("R$0,00", &opts), "0");
        assert_eq!(MoneyHandler.get_raw_value("", &opts), "");
    }

    #[test]
    fn test_amount() {
        let opts = MaskOptions::default();
        assert_eq!(MoneyHandler.amount("R$1.234,56", &opts), Some(1234.56));
        assert_eq!(MoneyHandler.amount("R$", &opts), None);
        let whole = MaskOptions::default().with_zero_cents(true);
        assert_eq!(MoneyHandler.amount("R$12,00", &whole), Some(12.0));
    }

    #[test]
    fn test_always_complete() {
        assert!(MoneyHandler.validate("", &MaskOptions::default()));
    }
}
