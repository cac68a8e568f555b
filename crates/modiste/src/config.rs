//! Configuration file loading for modiste.
//!
//! Reads `modiste.config.json` from the current working directory, or from
//! an explicit path.

use std::path::{Path, PathBuf};

use modiste_atelier::ModifierOptions;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "modiste.config.json";

/// Top-level modiste configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModisteConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Directive names, prefix and separator.
    #[serde(default)]
    pub directive: ModifierOptions,
}

/// Load the configuration.
///
/// `path` is either a config file or a directory holding
/// `modiste.config.json`; `None` means the current directory. A missing file
/// yields the defaults; an unreadable or malformed one is reported and
/// ignored.
pub fn load_config(path: Option<&Path>) -> ModisteConfig {
    let config_path = resolve_path(path);

    if !config_path.exists() {
        if path.is_some() {
            tracing::warn!("config file {} not found, using defaults", config_path.display());
        }
        return ModisteConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => {
                tracing::debug!("loaded config from {}", config_path.display());
                config
            }
            Err(e) => {
                tracing::warn!("failed to parse {}: {}", config_path.display(), e);
                ModisteConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!("failed to read {}: {}", config_path.display(), e);
            ModisteConfig::default()
        }
    }
}

fn resolve_path(path: Option<&Path>) -> PathBuf {
    match path {
        Some(path) if path.is_dir() => path.join(CONFIG_FILE_NAME),
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()
            .unwrap_or_default()
            .join(CONFIG_FILE_NAME),
    }
}

/// JSON Schema for `modiste.config.json`.
pub const MODISTE_CONFIG_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Modiste Configuration",
  "description": "Configuration file for modiste - CSS modifier class directive",
  "type": "object",
  "properties": {
    "$schema": {
      "type": "string",
      "description": "JSON Schema reference for editor autocompletion"
    },
    "directive": {
      "type": "object",
      "description": "Directive configuration",
      "properties": {
        "directiveName": { "type": "string", "minLength": 1, "default": "mods" },
        "isDirectiveName": { "type": "string", "minLength": 1, "default": "is" },
        "bemDirectiveName": { "type": "string", "minLength": 1, "default": "bem" },
        "isPrefix": { "type": "string", "minLength": 1, "default": "is-" },
        "bemSeparator": { "type": "string", "minLength": 1, "default": "--" }
      },
      "additionalProperties": false
    }
  },
  "additionalProperties": false
}"#;
