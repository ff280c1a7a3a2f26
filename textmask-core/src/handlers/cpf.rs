// textmask-core/src/handlers/cpf.rs
//! CPF handler (`cpf`): `999.999.999-99` with mod-11 check digits.
//!
//! License: MIT OR APACHE 2.0

use crate::handler::{KeyboardType, MaskHandler, MaskType};
use crate::options::MaskOptions;
use crate::templates::compiler::get_or_compile_template;
use crate::validators;

pub const CPF_PATTERN: &str = "999.999.999-99";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpfHandler;

impl MaskHandler for CpfHandler {
    fn mask_type(&self) -> MaskType {
        MaskType::Cpf
    }

    fn keyboard_type(&self) -> KeyboardType {
        KeyboardType::Numeric
    }

    fn get_value(&self, raw: &str, _options: &MaskOptions) -> String {
        get_or_compile_template(CPF_PATTERN).apply(raw)
    }

    fn get_raw_value(&self, display: &str, _options: &MaskOptions) -> String {
        get_or_compile_template(CPF_PATTERN).extract(display)
    }

    fn validate(&self, raw: &str, _options: &MaskOptions) -> bool {
        let template = get_or_compile_template(CPF_PATTERN);
        template.is_filled(raw) && validators::is_valid_cpf(&template.apply(raw))
    }
}
