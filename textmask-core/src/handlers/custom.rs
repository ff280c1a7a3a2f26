// textmask-core/src/handlers/custom.rs
//! The generic pattern handler (`custom`).
//!
//! The pattern comes from the `mask` option, e.g. `(999) 999-9999` or
//! `AAA-9999`. See `templates::compiler` for the placeholder syntax. Without a
//! pattern the handler has nothing to format against and passes input through
//! unchanged.
//!
//! License: MIT OR APACHE 2.0

use crate::handler::{KeyboardType, MaskHandler, MaskType};
use crate::options::MaskOptions;
use crate::templates::compiler::get_or_compile_template;

/// Typed view of the options the `custom` handler understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSettings {
    pub pattern: Option<String>,
}

impl From<&MaskOptions> for TemplateSettings {
    fn from(options: &MaskOptions) -> Self {
        Self {
            pattern: options.mask.clone().filter(|p| !p.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomHandler;

impl MaskHandler for CustomHandler {
    fn mask_type(&self) -> MaskType {
        MaskType::Custom
    }

    fn keyboard_type(&self) -> KeyboardType {
        KeyboardType::Text
    }

    fn get_value(&self, raw: &str, options: &MaskOptions) -> String {
        match TemplateSettings::from(options).pattern {
            Some(pattern) => get_or_compile_template(&pattern).apply(raw),
            None => raw.to_string(),
        }
    }

    fn get_raw_value(&self, display: &str, options: &MaskOptions) -> String {
        match TemplateSettings::from(options).pattern {
            Some(pattern) => get_or_compile_template(&pattern).extract(display),
            None => display.to_string(),
        }
    }

    fn validate(&self, raw: &str, options: &MaskOptions) -> bool {
        match TemplateSettings::from(options).pattern {
            Some(pattern) => get_or_compile_template(&pattern).is_filled(raw),
            None => true,
        }
    }
}
