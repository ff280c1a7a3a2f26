// textmask/src/commands/list.rs
//! `textmask list`: prints the named masks as a table.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use std::io::Write;

use crate::cli::ListArgs;
use crate::commands::load_masks;

pub fn run_list<W: Write>(args: &ListArgs, out: &mut W) -> Result<()> {
    let config = load_masks(args.config.as_deref())?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Name", "Type", "Description"]);
    for definition in &config.masks {
        table.add_row(vec![
            definition.name.as_str(),
            definition.mask_type.as_str(),
            definition.description.as_deref().unwrap_or(""),
        ]);
    }

    writeln!(out, "{table}")?;
    Ok(())
}
