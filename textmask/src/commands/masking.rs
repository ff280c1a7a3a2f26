// textmask/src/commands/masking.rs
//! `textmask mask`, `unmask` and `validate`.
//!
//! All three commands share the same mask selection: a named definition
//! (`--name`), or a type identifier with optional `--pattern` and `--options`.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

use textmask_core::{MaskHandler, MaskOptions, MaskType, MaskedValue, resolve};

use crate::cli::MaskArgs;
use crate::commands::load_masks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Mask,
    Unmask,
    Validate,
}

/// A mask type identifier together with the options it runs with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub mask_type: Option<String>,
    pub options: MaskOptions,
}

impl Selection {
    pub fn from_args(args: &MaskArgs) -> Result<Self> {
        let mut selection = match &args.name {
            Some(name) => {
                let config = load_masks(args.config.as_deref())?;
                let definition = config.get(name)
                    .with_context(|| format!("No mask named '{}' is defined. Run `textmask list` to see the available masks.", name))?;
                Selection {
                    mask_type: Some(definition.mask_type.clone()),
                    options: definition.options.clone(),
                }
            }
            None => Selection {
                mask_type: args.mask_type.clone(),
                options: MaskOptions::default(),
            },
        };

        if let Some(json) = &args.options {
            let overrides = MaskOptions::from_json(json)
                .with_context(|| format!("Invalid --options JSON: {}", json))?;
            selection.options = selection.options.overlay(overrides);
        }
        if let Some(pattern) = &args.pattern {
            selection.options.mask = Some(pattern.clone());
            if selection.mask_type.is_none() {
                selection.mask_type = Some(MaskType::Custom.as_str().to_string());
            }
        }
        Ok(selection)
    }
}

/// Runs `operation` on every input and writes one line per input.
///
/// Returns `true` when every input was complete for its mask.
pub fn run_masking<W: Write>(operation: Operation, args: &MaskArgs, out: &mut W) -> Result<bool> {
    let selection = Selection::from_args(args)?;
    let mask = resolve(selection.mask_type.as_deref());
    info!("Using mask type '{}' for {:?}.", mask.mask_type(), operation);

    let inputs: Vec<String> = match &args.input {
        Some(input) => vec![input.clone()],
        None => {
            debug!("No input argument given, reading stdin line by line.");
            io::stdin().lock().lines().collect::<io::Result<_>>()
                .context("Failed to read input from stdin")?
        }
    };

    let color = io::stdout().is_terminal();
    let mut all_complete = true;
    for input in &inputs {
        let value = MaskedValue::compute(&mask, input, &selection.options);
        all_complete &= value.complete;

        if args.json {
            writeln!(out, "{}", serde_json::to_string(&value)?)?;
            continue;
        }
        match operation {
            Operation::Mask => writeln!(out, "{}", value.display)?,
            Operation::Unmask => writeln!(out, "{}", mask.get_raw_value(input, &selection.options))?,
            Operation::Validate => {
                let (label, complete) = if value.complete { ("complete", true) } else { ("incomplete", false) };
                match (color, complete) {
                    (true, true) => writeln!(out, "{}\t{}", value.display, label.green())?,
                    (true, false) => writeln!(out, "{}\t{}", value.display, label.red())?,
                    (false, _) => writeln!(out, "{}\t{}", value.display, label)?,
                }
            }
        }
    }
    Ok(all_complete)
}
