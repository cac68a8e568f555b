//! Directive value validation.
//!
//! The host hands the directive an untyped value. Before anything touches
//! the element it is checked and narrowed to one of three shapes:
//!
//! - a single modifier name: `v-mods="'is-hidden'"`
//! - a list of modifier names: `v-mods="['is-hidden', 'is-active']"`
//! - a map of modifier names to flags: `v-mods="{ isHidden: hidden }"`

use modiste_carton::{CompactString, SmallVec};
use serde_json::Value;

use crate::errors::{ModifierError, ShapeViolation};

/// A directive value that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveValue<'a> {
    /// One modifier name, backed by a state property
    Name(&'a str),
    /// Several modifier names, in declaration order (duplicates kept)
    Names(SmallVec<[&'a str; 4]>),
    /// Modifier names mapped to their presence flag, in declaration order
    Flags(Vec<(&'a str, bool)>),
}

impl<'a> DirectiveValue<'a> {
    /// Validate the raw value bound to the directive registered as `directive`.
    ///
    /// `None` stands for an undefined value.
    pub fn from_binding(
        directive: &str,
        value: Option<&'a Value>,
    ) -> Result<DirectiveValue<'a>, ModifierError> {
        let value = match value {
            None | Some(Value::Null) => {
                return Err(ModifierError::NullOrUndefinedValue {
                    directive: CompactString::new(directive),
                })
            }
            Some(value) => value,
        };

        let invalid = |violation| ModifierError::InvalidShape {
            directive: CompactString::new(directive),
            violation,
        };

        match value {
            Value::String(name) => Ok(DirectiveValue::Name(name)),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str())
                .collect::<Option<SmallVec<_>>>()
                .map(DirectiveValue::Names)
                .ok_or_else(|| invalid(ShapeViolation::NonStringArrayItem)),
            Value::Object(entries) => entries
                .iter()
                .map(|(key, flag)| flag.as_bool().map(|flag| (key.as_str(), flag)))
                .collect::<Option<Vec<_>>>()
                .map(DirectiveValue::Flags)
                .ok_or_else(|| invalid(ShapeViolation::NonBooleanObjectValue)),
            _ => Err(invalid(ShapeViolation::NotStringArrayOrObject)),
        }
    }

    /// Shape name used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Name(_) => "string",
            Self::Names(_) => "array",
            Self::Flags(_) => "object",
        }
    }
}
