// textmask-core/src/registry.rs
//! Resolves a mask type identifier into a handler.
//!
//! The association between identifiers and handlers is static: `MaskType`
//! lists every identifier in a fixed order, and `Mask` is a closed enum with
//! one variant per handler. Resolution never allocates and never fails;
//! unknown or absent identifiers resolve to the passthrough handler.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::handler::{KeyboardType, MaskHandler, MaskType};
use crate::handlers::{
    CelPhoneHandler, CnpjHandler, CpfHandler, CreditCardHandler, CustomHandler,
    DateTimeHandler, MoneyHandler, NoneHandler, OnlyNumbersHandler, ZipCodeHandler,
};
use crate::options::MaskOptions;

/// A resolved handler. Cheap to copy and safe to share between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mask {
    Custom(CustomHandler),
    CreditCard(CreditCardHandler),
    Cpf(CpfHandler),
    Cnpj(CnpjHandler),
    Money(MoneyHandler),
    Datetime(DateTimeHandler),
    OnlyNumbers(OnlyNumbersHandler),
    CelPhone(CelPhoneHandler),
    ZipCode(ZipCodeHandler),
    None(NoneHandler),
}

impl Default for Mask {
    fn default() -> Self {
        Mask::None(NoneHandler)
    }
}

impl From<MaskType> for Mask {
    fn from(mask_type: MaskType) -> Self {
        match mask_type {
            MaskType::Custom => Mask::Custom(CustomHandler),
            MaskType::CreditCard => Mask::CreditCard(CreditCardHandler),
            MaskType::Cpf => Mask::Cpf(CpfHandler),
            MaskType::Cnpj => Mask::Cnpj(CnpjHandler),
            MaskType::Money => Mask::Money(MoneyHandler),
            MaskType::Datetime => Mask::Datetime(DateTimeHandler),
            MaskType::OnlyNumbers => Mask::OnlyNumbers(OnlyNumbersHandler),
            MaskType::CelPhone => Mask::CelPhone(CelPhoneHandler),
            MaskType::ZipCode => Mask::ZipCode(ZipCodeHandler),
            MaskType::None => Mask::None(NoneHandler),
        }
    }
}

impl Mask {
    /// Borrows the concrete handler behind the trait.
    pub fn handler(&self) -> &dyn MaskHandler {
        match self {
            Mask::Custom(h) => h,
            Mask::CreditCard(h) => h,
            Mask::Cpf(h) => h,
            Mask::Cnpj(h) => h,
            Mask::Money(h) => h,
            Mask::Datetime(h) => h,
            Mask::OnlyNumbers(h) => h,
            Mask::CelPhone(h) => h,
            Mask::ZipCode(h) => h,
            Mask::None(h) => h,
        }
    }
}

impl MaskHandler for Mask {
    fn mask_type(&self) -> MaskType {
        self.handler().mask_type()
    }

    fn keyboard_type(&self) -> KeyboardType {
        self.handler().keyboard_type()
    }

    fn get_value(&self, raw: &str, options: &MaskOptions) -> String {
        self.handler().get_value(raw, options)
    }

    fn get_raw_value(&self, display: &str, options: &MaskOptions) -> String {
        self.handler().get_raw_value(display, options)
    }

    fn validate(&self, raw: &str, options: &MaskOptions) -> bool {
        self.handler().validate(raw, options)
    }
}

/// Resolves `identifier` into a handler.
///
/// An absent identifier means `none`. The first `MaskType` whose identifier
/// matches wins; anything unregistered falls back to the passthrough handler.
pub fn resolve(identifier: Option<&str>) -> Mask {
    let identifier = identifier.unwrap_or(MaskType::None.as_str());
    match MaskType::from_identifier(identifier) {
        Some(mask_type) => Mask::from(mask_type),
        None => {
            debug!("Unknown mask type '{}', falling back to passthrough.", identifier);
            Mask::default()
        }
    }
}

/// Every identifier the registry knows, in resolution order.
pub fn registered_types() -> &'static [MaskType] {
    &MaskType::ALL
}
