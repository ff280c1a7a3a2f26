// textmask-core/src/handler.rs
//! Defines the core `MaskHandler` trait and the identifiers that go with it.
//!
//! The `MaskHandler` trait is the single capability set every mask family
//! implements: produce a display value, recover the raw value, and report
//! completeness. Handlers are stateless, so one instance can be shared across
//! threads and reused for as long as the mask type does not change.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::options::MaskOptions;

/// Identifier of a mask family.
///
/// The variant order of [`MaskType::ALL`] is the fixed enumeration order the
/// registry searches; the first identifier match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaskType {
    Custom,
    CreditCard,
    Cpf,
    Cnpj,
    Money,
    Datetime,
    OnlyNumbers,
    CelPhone,
    ZipCode,
    None,
}

impl MaskType {
    pub const ALL: [MaskType; 10] = [
        MaskType::Custom,
        MaskType::CreditCard,
        MaskType::Cpf,
        MaskType::Cnpj,
        MaskType::Money,
        MaskType::Datetime,
        MaskType::OnlyNumbers,
        MaskType::CelPhone,
        MaskType::ZipCode,
        MaskType::None,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            MaskType::Custom => "custom",
            MaskType::CreditCard => "credit-card",
            MaskType::Cpf => "cpf",
            MaskType::Cnpj => "cnpj",
            MaskType::Money => "money",
            MaskType::Datetime => "datetime",
            MaskType::OnlyNumbers => "only-numbers",
            MaskType::CelPhone => "cel-phone",
            MaskType::ZipCode => "zip-code",
            MaskType::None => "none",
        }
    }

    /// Looks up the mask type claiming `identifier`, if any.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == identifier)
    }
}

impl fmt::Display for MaskType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferred input character class. Purely advisory for the input surface;
/// it never affects transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardType {
    Numeric,
    Text,
    Decimal,
    Datetime,
}

/// A trait that defines the capability set of a mask family.
///
/// Every method is total: malformed input degrades to best-effort output and
/// nothing here can fail.
pub trait MaskHandler: Send + Sync {
    /// Returns the identifier this handler claims.
    fn mask_type(&self) -> MaskType;

    /// Returns the preferred keyboard class.
    fn keyboard_type(&self) -> KeyboardType;

    /// Formats `raw` into its display value.
    ///
    /// The empty string maps to the empty string. Emission stops after the
    /// last filled placeholder, and overflow characters are dropped.
    fn get_value(&self, raw: &str, options: &MaskOptions) -> String;

    /// Recovers the raw value from a (possibly partial) display value.
    fn get_raw_value(&self, display: &str, options: &MaskOptions) -> String;

    /// Returns `true` when `raw`, once masked, fills every placeholder and
    /// passes any checksum the family defines.
    fn validate(&self, raw: &str, options: &MaskOptions) -> bool;
}
