// textmask/src/lib.rs
//! # textmask CLI
//!
//! Command-line front end for `textmask-core`: mask, unmask and validate
//! values with a mask type or a named mask definition.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logger;
