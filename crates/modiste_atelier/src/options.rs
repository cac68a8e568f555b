//! Directive options.

use serde::{Deserialize, Deserializer, Serialize};
use modiste_carton::CompactString;

use crate::errors::ModifierError;

/// Options shared by every invocation of the modifier directive
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModifierOptions {
    /// Generic directive name (default: `mods`)
    #[serde(default = "default_directive_name", deserialize_with = "non_empty")]
    pub directive_name: CompactString,

    /// Directive name that forces the `is-` prefix mode (default: `is`)
    #[serde(default = "default_is_directive_name", deserialize_with = "non_empty")]
    pub is_directive_name: CompactString,

    /// Directive name that forces the BEM mode (default: `bem`)
    #[serde(default = "default_bem_directive_name", deserialize_with = "non_empty")]
    pub bem_directive_name: CompactString,

    /// Prefix added in forced-prefix mode and stripped in BEM mode (default: `is-`)
    #[serde(default = "default_is_prefix", deserialize_with = "non_empty")]
    pub is_prefix: CompactString,

    /// Separator between a BEM base class and its modifier (default: `--`)
    #[serde(default = "default_bem_separator", deserialize_with = "non_empty")]
    pub bem_separator: CompactString,

    /// Error handler, called with every diagnostic before it is logged
    #[serde(skip)]
    pub on_error: Option<fn(&ModifierError)>,
}

impl Default for ModifierOptions {
    fn default() -> Self {
        Self {
            directive_name: default_directive_name(),
            is_directive_name: default_is_directive_name(),
            bem_directive_name: default_bem_directive_name(),
            is_prefix: default_is_prefix(),
            bem_separator: default_bem_separator(),
            on_error: None,
        }
    }
}

fn non_empty<'de, D>(deserializer: D) -> Result<CompactString, D::Error>
where
    D: Deserializer<'de>,
{
    let value = CompactString::deserialize(deserializer)?;
    if value.is_empty() {
        return Err(serde::de::Error::invalid_length(0, &"a non-empty string"));
    }
    Ok(value)
}

fn default_directive_name() -> CompactString {
    CompactString::new("mods")
}

fn default_is_directive_name() -> CompactString {
    CompactString::new("is")
}

fn default_bem_directive_name() -> CompactString {
    CompactString::new("bem")
}

fn default_is_prefix() -> CompactString {
    CompactString::new("is-")
}

fn default_bem_separator() -> CompactString {
    CompactString::new("--")
}
