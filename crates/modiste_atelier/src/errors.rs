//! Directive errors.
//!
//! None of these ever reach the host framework as a fault: the directive
//! entry point turns them into a diagnostic and a [`Status::Failed`].
//!
//! [`Status::Failed`]: crate::Status::Failed

use modiste_carton::CompactString;
use thiserror::Error;

/// Which shape constraint a directive value violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeViolation {
    /// The value is neither a string, an array nor an object
    NotStringArrayOrObject,
    /// An array member is not a string
    NonStringArrayItem,
    /// An object member is not a boolean
    NonBooleanObjectValue,
}

/// Errors that abort one invocation of the directive
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModifierError {
    /// The directive value is `null` or missing
    #[error("\"v-{directive}\" is null or undefined")]
    NullOrUndefinedValue { directive: CompactString },

    /// The directive value has an unsupported shape
    #[error("{}", shape_message(.directive, .violation))]
    InvalidShape {
        directive: CompactString,
        violation: ShapeViolation,
    },

    /// A modifier name has no backing state property
    #[error("property \"{property}\" is undefined or null")]
    MissingProperty { property: CompactString },
}

impl ModifierError {
    /// Short machine-readable identifier for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::NullOrUndefinedValue { .. } => "null-or-undefined-value",
            Self::InvalidShape { .. } => "invalid-shape",
            Self::MissingProperty { .. } => "missing-property",
        }
    }
}

fn shape_message(directive: &str, violation: &ShapeViolation) -> String {
    match violation {
        ShapeViolation::NotStringArrayOrObject => {
            format!("\"v-{directive}\" must be a string, an array or an object")
        }
        ShapeViolation::NonStringArrayItem => {
            format!("all the values of array \"v-{directive}\" must be strings")
        }
        ShapeViolation::NonBooleanObjectValue => {
            format!("all the values of object \"v-{directive}\" must be booleans")
        }
    }
}
