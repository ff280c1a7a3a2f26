// textmask/src/commands/mod.rs
//! Command implementations for the textmask CLI.

pub mod list;
pub mod masking;

use anyhow::{Context, Result};
use log::debug;

use textmask_core::{merge_masks, MaskConfig};

use crate::config::load_config_by_name;

/// Loads the built-in masks, merged with the user's configuration when one is
/// given, either as a file path or as a name searched for in the config
/// directories.
pub fn load_masks(config: Option<&str>) -> Result<MaskConfig> {
    let defaults = MaskConfig::load_default_masks()?;
    let user = match config {
        Some(name_or_path) => {
            debug!("Merging user mask configuration from '{}'", name_or_path);
            Some(load_config_by_name(name_or_path)
                .with_context(|| format!("Failed to load mask configuration '{}'", name_or_path))?)
        }
        None => None,
    };
    Ok(merge_masks(defaults, user))
}
