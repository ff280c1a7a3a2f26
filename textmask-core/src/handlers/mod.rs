// textmask-core/src/handlers/mod.rs
//! Concrete implementations of the `MaskHandler` trait, one per mask family.
//!
//! Each handler is a stateless unit struct. Pattern-based families pick a
//! pattern from their settings (and sometimes from the input itself) and run
//! it through `templates::compiler`. `money` and `only-numbers` are not
//! template based.
//!
//! To add a new family, create a new file here, implement `MaskHandler`, add
//! its identifier to `MaskType` and a variant to `registry::Mask`.
//!
//! # License
//! MIT OR APACHE 2.0

pub mod cel_phone;
pub mod cnpj;
pub mod cpf;
pub mod credit_card;
pub mod custom;
pub mod datetime;
pub mod money;
pub mod none;
pub mod only_numbers;
pub mod zip_code;

pub use cel_phone::CelPhoneHandler;
pub use cnpj::CnpjHandler;
pub use cpf::CpfHandler;
pub use credit_card::CreditCardHandler;
pub use custom::CustomHandler;
pub use datetime::DateTimeHandler;
pub use money::MoneyHandler;
pub use none::NoneHandler;
pub use only_numbers::OnlyNumbersHandler;
pub use zip_code::ZipCodeHandler;
