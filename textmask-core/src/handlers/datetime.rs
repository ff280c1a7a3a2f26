// textmask-core/src/handlers/datetime.rs
//! Date/time handler (`datetime`).
//!
//! The `format` option (default `DD/MM/YYYY HH:mm:ss`) is translated into a
//! digit template: every field token becomes a run of digit placeholders and
//! everything else is a literal. Masking is purely positional; `validate` does
//! not check calendar bounds. Callers that need a real date can use
//! [`DateTimeHandler::parse`].
//!
//! License: MIT OR APACHE 2.0

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::handler::{KeyboardType, MaskHandler, MaskType};
use crate::options::MaskOptions;
use crate::templates::compiler::get_or_compile_template;

pub const DEFAULT_DATETIME_FORMAT: &str = "DD/MM/YYYY HH:mm:ss";

static FIELD_TOKENS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"YYYY|YY|MM|DD|HH|mm|ss").expect("field token regex is valid"));

/// Typed view of the options the `datetime` handler understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeSettings {
    pub format: String,
}

impl From<&MaskOptions> for DateTimeSettings {
    fn from(options: &MaskOptions) -> Self {
        Self {
            format: options
                .format
                .clone()
                .filter(|f| !f.is_empty())
                .unwrap_or_else(|| DEFAULT_DATETIME_FORMAT.to_string()),
        }
    }
}

impl DateTimeSettings {
    /// Translates the field layout into a template pattern, escaping literal
    /// characters that would otherwise read as placeholders.
    pub fn pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.format.len() * 2);
        let mut last = 0;
        for field in FIELD_TOKENS.find_iter(&self.format) {
            push_escaped(&mut pattern, &self.format[last..field.start()]);
            pattern.push_str(&"9".repeat(field.as_str().len()));
            last = field.end();
        }
        push_escaped(&mut pattern, &self.format[last..]);
        pattern
    }

    /// Translates the field layout into a `chrono` format string.
    fn chrono_format(&self) -> String {
        let mut out = String::with_capacity(self.format.len() * 2);
        let mut last = 0;
        for field in FIELD_TOKENS.find_iter(&self.format) {
            out.push_str(&self.format[last..field.start()].replace('%', "%%"));
            out.push_str(match field.as_str() {
                "YYYY" => "%Y",
                "YY" => "%y",
                "MM" => "%m",
                "DD" => "%d",
                "HH" => "%H",
                "mm" => "%M",
                _ => "%S",
            });
            last = field.end();
        }
        out.push_str(&self.format[last..].replace('%', "%%"));
        out
    }

    fn has_field(&self, fields: &[&str]) -> bool {
        FIELD_TOKENS
            .find_iter(&self.format)
            .any(|m| fields.contains(&m.as_str()))
    }
}

fn push_escaped(pattern: &mut String, literal: &str) {
    for c in literal.chars() {
        if matches!(c, '9' | 'A' | 'S' | '*' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTimeHandler;

impl DateTimeHandler {
    /// Converts a complete value into a `NaiveDateTime`.
    ///
    /// Date-only layouts resolve to midnight and time-only layouts to
    /// 1970-01-01. Returns `None` for incomplete values and for values that
    /// are not valid calendar dates or times.
    pub fn parse(&self, raw: &str, options: &MaskOptions) -> Option<NaiveDateTime> {
        if !self.validate(raw, options) {
            return None;
        }
        let settings = DateTimeSettings::from(options);
        let display = self.get_value(raw, options);
        let format = settings.chrono_format();
        let has_date = settings.has_field(&["YYYY", "YY", "MM", "DD"]);
        let has_time = settings.has_field(&["HH", "mm", "ss"]);

        match (has_date, has_time) {
            (true, true) => NaiveDateTime::parse_from_str(&display, &format).ok(),
            (true, false) => NaiveDate::parse_from_str(&display, &format)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0)),
            (false, true) => {
                let time = NaiveTime::parse_from_str(&display, &format).ok()?;
                Some(NaiveDate::from_ymd_opt(1970, 1, 1)?.and_time(time))
            }
            (false, false) => None,
        }
    }
}

impl MaskHandler for DateTimeHandler {
    fn mask_type(&self) -> MaskType {
        MaskType::Datetime
    }

    fn keyboard_type(&self) -> KeyboardType {
        KeyboardType::Datetime
    }

    fn get_value(&self, raw: &str, options: &MaskOptions) -> String {
        let pattern = DateTimeSettings::from(options).pattern();
        get_or_compile_template(&pattern).apply(raw)
    }

    fn get_raw_value(&self, display: &str, options: &MaskOptions) -> String {
        let pattern = DateTimeSettings::from(options).pattern();
        get_or_compile_template(&pattern).extract(display)
    }

    fn validate(&self, raw: &str, options: &MaskOptions) -> bool {
        let pattern = DateTimeSettings::from(options).pattern();
        get_or_compile_template(&pattern).is_filled(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn date_only() -> MaskOptions {
        MaskOptions::default().with_format("DD/MM/YYYY")
    }

    #[test]
    fn test_pattern_translation() {
        let settings = DateTimeSettings::from(&MaskOptions::default());
        assert_eq!(settings.pattern(), "99/99/9999 99:99:99");
        let odd = DateTimeSettings::from(&MaskOptions::default().with_format("YYYY 9A"));
        assert_eq!(odd.pattern(), r"9999 \9\A");
    }

    #[test]
    fn test_default_format() {
        let opts = MaskOptions::default();
        assert_eq!(DateTimeHandler.get_value("31122024235959", &opts), "31/12/2024 23:59:59");
        assert_eq!(DateTimeHandler.get_value("3112", &opts), "31/12");
        assert_eq!(DateTimeHandler.get_raw_value("31/12/2024 23:59:59", &opts), "31122024235959");
    }

    #[test]
    fn test_positional_only() {
        let opts = date_only();
        assert_eq!(DateTimeHandler.get_value("99999999", &opts), "99/99/9999");
        assert!(DateTimeHandler.validate("99999999", &opts));
        assert!(!DateTimeHandler.validate("3112202", &opts));
    }

    #[test]
    fn test_iso_layout() {
        let opts = MaskOptions::default().with_format("YYYY-MM-DD");
        assert_eq!(DateTimeHandler.get_value("20240229", &opts), "2024-02-29");
    }

    #[test]
    fn test_parse() {
        let opts = date_only();
        let parsed = DateTimeHandler.parse("29022024", &opts).unwrap();
        assert_eq!((parsed.day(), parsed.month(), parsed.year()), (29, 2, 2024));
        assert_eq!(DateTimeHandler.parse("31022024", &opts), None);
        assert_eq!(DateTimeHandler.parse("2902", &opts), None);

        let full = DateTimeHandler.parse("01012024083000", &MaskOptions::default()).unwrap();
        assert_eq!((full.hour(), full.minute()), (8, 30));

        let time = MaskOptions::default().with_format("HH:mm");
        let t = DateTimeHandler.parse("0745", &time).unwrap();
        assert_eq!((t.hour(), t.minute(), t.year()), (7, 45, 1970));
    }
}
