//! Configuration file support for deptree.
//!
//! Provides YAML-based configuration through `deptree.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::ports::outbound::ProgressReporter;
use crate::shared::error::DeptreeError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "deptree.config.yml";

/// Top-level configuration file schema.
///
/// There is no token key: the GitHub token only comes from `--token` or
/// `GITHUB_TOKEN`.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub export: Option<bool>,
    pub desc: Option<bool>,
    pub max_concurrency: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to YAML null, which is the same as no settings.
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.max_concurrency == Some(0) {
        return Err(DeptreeError::Validation {
            message: "max_concurrency must be at least 1.\n\n\
                      💡 Hint: Remove the key to fetch all descriptions at once."
                .to_string(),
        }
        .into());
    }
    Ok(())
}

/// Reports each unknown key, in sorted order, as a warning.
pub fn report_unknown_fields(config: &ConfigFile, reporter: &dyn ProgressReporter) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        reporter.report_warning(&format!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        ));
    }
}
