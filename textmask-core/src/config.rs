// textmask-core/src/config.rs
//! Configuration management for `textmask-core`.
//!
//! This module defines named mask definitions: a name, a mask type identifier
//! and the options to run it with. It handles serialization/deserialization of
//! YAML configurations and provides utilities for parsing, merging, and
//! validating them. Nothing here touches the filesystem: callers read the YAML
//! themselves and hand the text to [`MaskConfig::from_yaml`].
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::errors::TextmaskError;
use crate::handler::{MaskHandler, MaskType};
use crate::masked_value::MaskedValue;
use crate::options::MaskOptions;
use crate::registry::{resolve, Mask};

/// Maximum allowed length for a custom pattern string.
pub const MAX_PATTERN_LENGTH: usize = 256;

/// A named, reusable mask.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MaskDefinition {
    /// Unique identifier for the definition (e.g., "phone").
    pub name: String,
    /// Mask type identifier (e.g., "custom", "money").
    #[serde(rename = "type")]
    pub mask_type: String,
    /// Human-readable description.
    pub description: Option<String>,
    /// Handler options.
    pub options: MaskOptions,
}

impl Default for MaskDefinition {
    fn default() -> Self {
        Self {
            name: String::new(),
            mask_type: MaskType::None.as_str().to_string(),
            description: None,
            options: MaskOptions::default(),
        }
    }
}

impl MaskDefinition {
    /// Resolves the definition's handler. Unknown types resolve to the
    /// passthrough handler.
    pub fn mask(&self) -> Mask {
        resolve(Some(&self.mask_type))
    }

    /// Masks `input` with this definition.
    pub fn apply(&self, input: &str) -> MaskedValue {
        MaskedValue::compute(&self.mask(), input, &self.options)
    }

    pub fn unmask(&self, display: &str) -> String {
        self.mask().get_raw_value(display, &self.options)
    }

    pub fn validate(&self, raw: &str) -> bool {
        self.mask().validate(raw, &self.options)
    }
}

/// Represents the top-level configuration structure.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct MaskConfig {
    #[serde(default)]
    pub masks: Vec<MaskDefinition>,
}

impl MaskConfig {
    /// Parses and validates mask definitions from a YAML string.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: MaskConfig = serde_yml::from_str(text)
            .map_err(|e| TextmaskError::ParseError(e.to_string()))?;
        validate_definitions(&config.masks)?;
        Ok(config)
    }

    /// Loads the built-in mask definitions embedded in the library.
    pub fn load_default_masks() -> Result<Self> {
        debug!("Loading default masks from embedded string...");
        let default_yaml = include_str!("../config/default_masks.yaml");
        let config: MaskConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default masks")?;

        debug!("Loaded {} default masks.", config.masks.len());
        Ok(config)
    }

    pub fn get(&self, name: &str) -> Option<&MaskDefinition> {
        self.masks.iter().find(|m| m.name == name)
    }

    /// Masks `input` with the definition called `name`.
    pub fn apply(&self, name: &str, input: &str) -> Result<MaskedValue, TextmaskError> {
        self.get(name)
            .map(|definition| definition.apply(input))
            .ok_or_else(|| TextmaskError::UnknownMask(name.to_string()))
    }
}

/// Merges user-defined masks with defaults. User definitions replace default
/// definitions with the same name. The result is sorted by name.
pub fn merge_masks(default_config: MaskConfig, user_config: Option<MaskConfig>) -> MaskConfig {
    debug!("merge_masks called. Initial default masks count: {}", default_config.masks.len());

    let mut final_masks_map: HashMap<String, MaskDefinition> = default_config.masks.into_iter()
        .map(|mask| (mask.name.clone(), mask))
        .collect();

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user masks.", user_cfg.masks.len());
        for user_mask in user_cfg.masks {
            final_masks_map.insert(user_mask.name.clone(), user_mask);
        }
    }

    let mut masks: Vec<MaskDefinition> = final_masks_map.into_values().collect();
    masks.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("Final total masks after merge: {}", masks.len());

    MaskConfig { masks }
}

/// Validates definition integrity: names, and patterns of custom masks.
fn validate_definitions(masks: &[MaskDefinition]) -> Result<(), TextmaskError> {
    let mut names = HashSet::new();
    let mut errors = Vec::new();

    for mask in masks {
        if mask.name.is_empty() {
            errors.push(TextmaskError::InvalidDefinition(String::new(), "empty `name` field".to_string()));
        } else if !names.insert(mask.name.as_str()) {
            errors.push(TextmaskError::InvalidDefinition(mask.name.clone(), "duplicate name".to_string()));
        }

        match MaskType::from_identifier(&mask.mask_type) {
            Some(MaskType::Custom) => match mask.options.mask.as_deref() {
                None | Some("") => errors.push(TextmaskError::InvalidDefinition(
                    mask.name.clone(),
                    "custom mask is missing the `mask` pattern".to_string(),
                )),
                Some(pattern) if pattern.chars().count() > MAX_PATTERN_LENGTH => {
                    errors.push(TextmaskError::PatternLengthExceeded(
                        mask.name.clone(),
                        pattern.chars().count(),
                        MAX_PATTERN_LENGTH,
                    ));
                }
                Some(_) => {}
            },
            Some(_) => {}
            None => warn!(
                "Mask '{}' has unknown type '{}'; it will pass input through unchanged.",
                mask.name, mask.mask_type
            ),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        let message = errors.iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(TextmaskError::Fatal(format!("Mask validation failed:\n{}", message)))
    }
}
