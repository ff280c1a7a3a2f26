// textmask/src/config.rs
//! Locating and reading mask configuration files.
//!
//! `textmask-core` only parses YAML text. This module owns the filesystem
//! side: reading a file, and searching the usual directories for a
//! `<name>.yaml` when `--config` is a bare name rather than a path.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use textmask_core::MaskConfig;

/// Reads and validates mask definitions from a YAML file.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<MaskConfig> {
    let path = path.as_ref();
    info!("Loading mask definitions from: {}", path.display());
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = MaskConfig::from_yaml(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    info!("Loaded {} mask definitions from file {}.", config.masks.len(), path.display());
    Ok(config)
}

/// Files searched, in order, for a configuration called `name`.
pub fn config_candidate_paths(name: &str) -> Vec<PathBuf> {
    let base_dirs = vec![
        dirs::home_dir().map(|p| p.join(".textmask").join("masks")),
        dirs::config_dir().map(|p| p.join("textmask").join("masks")),
        Some(PathBuf::from("/etc/textmask/masks")),
        Some(PathBuf::from("./config")),
    ];

    base_dirs.into_iter()
        .flatten()
        .map(|dir| dir.join(format!("{}.yaml", name)))
        .collect()
}

/// Loads a mask configuration either from a direct file path or by name from
/// the candidate directories.
pub fn load_config_by_name(name_or_path: &str) -> Result<MaskConfig> {
    debug!("Attempting to load mask config from: '{}'", name_or_path);

    let path_to_load = {
        let path = Path::new(name_or_path);
        if path.is_file() {
            Some(path.to_path_buf())
        } else {
            config_candidate_paths(name_or_path)
                .into_iter()
                .find(|p| p.is_file())
        }
    }.with_context(|| format!(
        "Mask config '{}' not found. It is not a valid file path, and was not found in expected locations.",
        name_or_path
    ))?;

    load_from_file(path_to_load)
}
