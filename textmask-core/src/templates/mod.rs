// textmask-core/src/templates/mod.rs
//! Placeholder templates shared by the pattern-based handlers.
//!
//! A template is an ordered sequence of tokens, each either a placeholder that
//! accepts one raw character of a given class, or a literal that is emitted
//! verbatim. The `custom`, `credit-card`, `cpf`, `cnpj`, `datetime`,
//! `cel-phone` and `zip-code` handlers all reduce to choosing a pattern and
//! running it through the single linear scan implemented in `compiler`.
//!
//! License: MIT OR APACHE 2.0

pub mod compiler;
