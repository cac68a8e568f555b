//! # Modiste
//!
//! A declarative directive that toggles CSS modifier classes on an element
//! from reactive state, with plain, `is-` prefixed and BEM naming.
//!
//! This crate re-exports the Modiste sub-crates and hosts the command-line
//! tooling around them.
//!
//! ## Crates
//!
//! - [`carton`] - Casing utilities and shared collections
//! - [`atelier`] - The modifier directive itself
//!
//! ## Name Origin
//!
//! A **modiste** is a milliner, a maker of hats and trims. This one dresses
//! elements in modifier classes.

/// Casing utilities and shared collections.
pub use modiste_carton as carton;

/// The modifier directive itself.
pub use modiste_atelier as atelier;

pub mod config;
pub mod error;
pub mod scenario;

pub use config::{load_config, ModisteConfig};
pub use error::CliError;
pub use scenario::{Scenario, ScenarioReport, Step, StepReport};
