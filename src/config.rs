//! `dep-impact.config.yml` loading.
//!
//! The file supplies defaults for the same settings the command line takes.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::dependency_analysis::domain::LayoutOptions;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "dep-impact.config.yml";

/// Settings accepted in `dep-impact.config.yml`.
///
/// Every field is optional; command-line flags win over whatever is set here.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub depth: Option<usize>,
    pub max_nodes: Option<usize>,
    /// Package to inspect
    pub package: Option<String>,
    /// Direct dependency whose removal is previewed
    pub remove: Option<String>,
    /// Keys this version does not know; reported, then ignored
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parses YAML text. Blank text is an empty config.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml_ng::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(content)
    }

    /// The configured output format, if any
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(OutputFormat::from_str)
            .transpose()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))
    }

    /// Rejects values the command line would also reject
    pub fn validate(&self) -> Result<()> {
        self.output_format()?;
        check_range(
            "depth",
            self.depth,
            LayoutOptions::MIN_DEPTH,
            LayoutOptions::MAX_DEPTH,
        )?;
        check_range(
            "max_nodes",
            self.max_nodes,
            LayoutOptions::MIN_MAX_NODES,
            LayoutOptions::MAX_MAX_NODES,
        )
    }

    fn warn_unknown_fields(&self) {
        let mut keys: Vec<&String> = self.unknown_fields.keys().collect();
        keys.sort();
        for key in keys {
            tracing::warn!("Unknown config field '{}' will be ignored.", key);
        }
    }
}

fn check_range(field: &str, value: Option<usize>, min: usize, max: usize) -> Result<()> {
    match value {
        Some(value) if !(min..=max).contains(&value) => bail!(
            "Invalid config: {} must be between {} and {}, got {}.\n\n\
             💡 Hint: Remove the key to use the default.",
            field,
            min,
            max,
            value
        ),
        _ => Ok(()),
    }
}

/// Loads and validates the config at `path`. A missing file is an error.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Pass an existing file to --config, or drop the flag.",
            path.display()
        )
    })?;

    let config = ConfigFile::from_yaml(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: The file must be a YAML mapping such as `format: json`.",
            path.display()
        )
    })?;

    config.validate()?;
    config.warn_unknown_fields();

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Looks for `dep-impact.config.yml` in `dir`; `None` when there is none.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let candidate = dir.join(CONFIG_FILENAME);
    if !candidate.is_file() {
        return Ok(None);
    }
    load_config_from_path(&candidate).map(Some)
}
