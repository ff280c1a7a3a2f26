// textmask-core/src/diagnostics.rs
//! Debug logging helpers that keep raw values out of the logs.
//!
//! Masked inputs are usually personal data (document numbers, card numbers,
//! phone numbers). Debug output replaces them with a length marker unless
//! `TEXTMASK_ALLOW_DEBUG_PII=true` is set.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use lazy_static::lazy_static;

use crate::handler::MaskType;

lazy_static! {
    /// A static boolean that is initialized once to determine if PII is allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("TEXTMASK_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let len = s.chars().count();
    if len <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", len)
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_masked_value_debug(
    module_path: &str,
    mask_type: MaskType,
    input: &str,
    display: &str,
    complete: bool,
) {
    debug!(
        "{} Masked value: Type='{}', Input='{}', Display='{}', Complete={}",
        module_path,
        mask_type,
        get_loggable_content(input),
        get_loggable_content(display),
        complete
    );
}
