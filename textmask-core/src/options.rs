// textmask-core/src/options.rs
//! The generic options bag passed alongside every mask operation.
//!
//! `MaskOptions` is deliberately loose: the registry hands it through without
//! looking at it, and each handler projects the keys it understands into its
//! own typed settings struct (see `TemplateSettings`, `MoneySettings`, ...).
//! Keys a handler does not recognize are ignored, and missing keys fall back to
//! that handler's defaults.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaskOptions {
    /// Pattern for the `custom` handler, e.g. `(999) 999-9999`.
    pub mask: Option<String>,
    /// Number of fractional digits for `money`.
    pub precision: Option<usize>,
    /// Decimal separator for `money`.
    pub separator: Option<String>,
    /// Thousands delimiter for `money`.
    pub delimiter: Option<String>,
    /// Currency literal placed before a `money` amount.
    pub unit: Option<String>,
    /// Currency literal placed after a `money` amount.
    #[serde(alias = "suffix_unit")]
    pub suffix_unit: Option<String>,
    /// When set, `money` treats every typed digit as an integer digit.
    #[serde(alias = "zero_cents")]
    pub zero_cents: Option<bool>,
    /// Field layout for `datetime`, e.g. `DD/MM/YYYY`.
    pub format: Option<String>,
    /// Card issuer override for `credit-card`.
    pub issuer: Option<String>,
    /// Numbering plan for `cel-phone` (`BRL` or `INTERNATIONAL`).
    #[serde(alias = "mask_type")]
    pub mask_type: Option<String>,
    #[serde(rename = "withDDD", alias = "with_ddd")]
    pub with_ddd: Option<bool>,
    #[serde(rename = "dddMask", alias = "ddd_mask")]
    pub ddd_mask: Option<String>,
}

// ---------- Convenience builder methods ----------
impl MaskOptions {
    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = Some(mask.into());
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_suffix_unit(mut self, suffix_unit: impl Into<String>) -> Self {
        self.suffix_unit = Some(suffix_unit.into());
        self
    }

    pub fn with_zero_cents(mut self, zero_cents: bool) -> Self {
        self.zero_cents = Some(zero_cents);
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn with_mask_type(mut self, mask_type: impl Into<String>) -> Self {
        self.mask_type = Some(mask_type.into());
        self
    }

    pub fn with_ddd(mut self, with_ddd: bool) -> Self {
        self.with_ddd = Some(with_ddd);
        self
    }

    pub fn with_ddd_mask(mut self, ddd_mask: impl Into<String>) -> Self {
        self.ddd_mask = Some(ddd_mask.into());
        self
    }

    /// Parses an options bag from a JSON object. Unknown keys are ignored.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Layers `other` on top of `self`: every key set in `other` wins, every
    /// key it leaves unset keeps the value from `self`.
    pub fn overlay(self, other: MaskOptions) -> Self {
        Self {
            mask: other.mask.or(self.mask),
            precision: other.precision.or(self.precision),
            separator: other.separator.or(self.separator),
            delimiter: other.delimiter.or(self.delimiter),
            unit: other.unit.or(self.unit),
            suffix_unit: other.suffix_unit.or(self.suffix_unit),
            zero_cents: other.zero_cents.or(self.zero_cents),
            format: other.format.or(self.format),
            issuer: other.issuer.or(self.issuer),
            mask_type: other.mask_type.or(self.mask_type),
            with_ddd: other.with_ddd.or(self.with_ddd),
            ddd_mask: other.ddd_mask.or(self.ddd_mask),
        }
    }
}
// -----------------------------------------------------------------------
