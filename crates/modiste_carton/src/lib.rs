//! Carton - The milliner's toolbox for Modiste.
//!
//! This crate holds the small shared utilities the directive core and the
//! CLI both reach for, much like a carton (hatbox) keeps a modiste's trims
//! and ribbons in one place.
//!
//! # Modules
//!
//! - **Casing**: kebab-case and camelCase conversion for modifier names
//! - **Re-exports**: compact strings, fast hash maps and small vectors
//!
//! # Example
//!
//! ```
//! use modiste_carton::{camelize, hyphenate};
//!
//! assert_eq!(camelize("is-hidden"), "isHidden");
//! assert_eq!(hyphenate("isHidden"), "is-hidden");
//! ```

pub mod casing;

pub use casing::{camelize, hyphenate};

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;

// Re-export smallvec for stack-optimized collections
pub use smallvec::SmallVec;

// Re-export bitflags for flag types
pub use bitflags::bitflags;

// Re-export rustc-hash for fast hash maps
pub use rustc_hash::FxHashMap;
