// textmask-core/src/templates/compiler.rs
//! compiler.rs - Parses pattern strings into templates and caches them.
//!
//! Pattern syntax: `9` accepts a digit, `A` a letter, `S` a letter or digit,
//! `*` any character. A backslash turns the next pattern character into a
//! literal. Every other character is a literal.
//!
//! Compiled templates are kept in a global, read-mostly cache keyed by the
//! pattern string so that handlers which rebuild their pattern on every call
//! only pay for parsing once.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Upper bound on the number of distinct patterns kept in the cache.
pub const MAX_CACHED_TEMPLATES: usize = 256;

/// Character class a placeholder accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotClass {
    Digit,
    Letter,
    Alphanumeric,
    Any,
}

impl SlotClass {
    fn from_pattern_char(c: char) -> Option<Self> {
        match c {
            '9' => Some(SlotClass::Digit),
            'A' => Some(SlotClass::Letter),
            'S' => Some(SlotClass::Alphanumeric),
            '*' => Some(SlotClass::Any),
            _ => None,
        }
    }

    pub fn accepts(self, c: char) -> bool {
        match self {
            SlotClass::Digit => c.is_ascii_digit(),
            SlotClass::Letter => c.is_alphabetic(),
            SlotClass::Alphanumeric => c.is_alphanumeric(),
            SlotClass::Any => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Slot(SlotClass),
    Literal(char),
}

/// How literal tokens treat a matching character in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanMode {
    /// Input is raw, possibly mixed with punctuation the user typed.
    /// Only non-alphanumeric literals are skipped over, and only when the
    /// following placeholder would not take the character as data.
    Format,
    /// Input is a display value; every literal is skipped over when it
    /// lines up.
    Extract,
}

impl ScanMode {
    fn skips_literal(self, literal: char, next_slot: Option<SlotClass>) -> bool {
        match self {
            ScanMode::Format => {
                !literal.is_alphanumeric() && !next_slot.is_some_and(|class| class.accepts(literal))
            }
            ScanMode::Extract => true,
        }
    }
}

#[derive(Debug, Default)]
struct Scan {
    display: String,
    raw: String,
    filled: usize,
}

/// A compiled placeholder template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pattern: String,
    tokens: Vec<Token>,
    /// For each token, the class of the first placeholder after it.
    next_slots: Vec<Option<SlotClass>>,
    capacity: usize,
}

impl Template {
    pub fn parse(pattern: &str) -> Self {
        let mut tokens = Vec::with_capacity(pattern.len());
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            let token = match c {
                '\\' => Token::Literal(chars.next().unwrap_or('\\')),
                _ => SlotClass::from_pattern_char(c).map_or(Token::Literal(c), Token::Slot),
            };
            tokens.push(token);
        }
        let capacity = tokens.iter().filter(|t| matches!(t, Token::Slot(_))).count();

        let mut next_slots = vec![None; tokens.len()];
        let mut upcoming = None;
        for (i, token) in tokens.iter().enumerate().rev() {
            next_slots[i] = upcoming;
            if let Token::Slot(class) = *token {
                upcoming = Some(class);
            }
        }

        Self {
            pattern: pattern.to_string(),
            tokens,
            next_slots,
            capacity,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of placeholders in the template.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Formats `input` against the template.
    pub fn apply(&self, input: &str) -> String {
        self.scan(input, ScanMode::Format).display
    }

    /// Returns the characters of `display` that land in placeholders.
    pub fn extract(&self, display: &str) -> String {
        self.scan(display, ScanMode::Extract).raw
    }

    /// Returns `true` when `input` fills every placeholder.
    pub fn is_filled(&self, input: &str) -> bool {
        self.filled(input) == self.capacity
    }

    /// Number of placeholders `input` fills.
    pub fn filled(&self, input: &str) -> usize {
        self.scan(input, ScanMode::Format).filled
    }

    fn scan(&self, input: &str, mode: ScanMode) -> Scan {
        let mut out = Scan::default();
        let mut pending = String::new();
        let mut chars = input.chars().peekable();

        for (token, next_slot) in self.tokens.iter().zip(&self.next_slots) {
            match *token {
                Token::Literal(literal) => {
                    if mode.skips_literal(literal, *next_slot) && chars.peek() == Some(&literal) {
                        chars.next();
                    }
                    pending.push(literal);
                }
                Token::Slot(class) => {
                    let Some(c) = chars.by_ref().find(|c| class.accepts(*c)) else {
                        break;
                    };
                    out.display.push_str(&pending);
                    pending.clear();
                    out.display.push(c);
                    out.raw.push(c);
                    out.filled += 1;
                }
            }
        }
        out
    }
}

lazy_static! {
    /// A thread-safe, global cache for compiled templates keyed by pattern.
    static ref COMPILED_TEMPLATE_CACHE: RwLock<HashMap<String, Arc<Template>>> = RwLock::new(HashMap::new());
}

/// Gets a `Template` from the cache or compiles it if not found.
pub fn get_or_compile_template(pattern: &str) -> Arc<Template> {
    {
        let cache = COMPILED_TEMPLATE_CACHE.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(template) = cache.get(pattern) {
            return Arc::clone(template);
        }
    }

    let compiled = Arc::new(Template::parse(pattern));
    let mut cache = COMPILED_TEMPLATE_CACHE.write().unwrap_or_else(PoisonError::into_inner);
    if cache.len() < MAX_CACHED_TEMPLATES {
        debug!("Caching compiled template for pattern '{}'", pattern);
        cache.insert(pattern.to_string(), Arc::clone(&compiled));
    }
    compiled
}
