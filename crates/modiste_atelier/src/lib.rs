//! Atelier - The workshop where Modiste dresses elements in modifier classes.
//!
//! This crate implements the modifier directive:
//! - validation of the directive value (name, list of names, map of flags)
//! - naming modes: plain, forced `is-` prefix, BEM suffix of a base class
//! - reconciliation of the computed classes against an element's class list
//!
//! The host framework stays outside: it provides the element's class list
//! ([`ClassList`]), the component state ([`StateLookup`]) and the rendered
//! classes of the previous patch ([`VNodeClasses`]), and calls
//! [`ModifierDirective::bind`] / [`ModifierDirective::update`].
//!
//! ```
//! use modiste_atelier::{ClassList, ClassSet, DirectiveBinding, ModifierDirective, VNodeClasses};
//! use serde_json::json;
//!
//! let directive = ModifierDirective::default();
//! let value = json!({ "isHidden": true });
//! let state = serde_json::Map::new();
//! let mut el = ClassSet::parse("navbar");
//!
//! let binding = DirectiveBinding { name: "bem", value: Some(&value), ..Default::default() };
//! let vnode = VNodeClasses { prev_class: Some("navbar"), ..Default::default() };
//! directive.bind(&mut el, binding, &vnode, &state);
//!
//! assert!(el.contains("navbar--hidden"));
//! ```
//!
//! ## Name Origin
//!
//! **Atelier** (/ˌætəlˈjeɪ/) is an artist's workshop or studio. The modiste's
//! atelier is where hats get their trims; here elements get their modifiers.

pub mod class_list;
pub mod class_name;
pub mod errors;
pub mod mode;
pub mod options;
pub mod reconcile;
pub mod state;
pub mod value;

pub use class_list::{ClassList, ClassSet};
pub use class_name::{build_class_name, find_base_class};
pub use errors::{ModifierError, ShapeViolation};
pub use mode::{DirectiveModifiers, ModifierMode};
pub use options::ModifierOptions;
pub use reconcile::{
    same_classes, set_elem_class, DirectiveBinding, ModifierDirective, Status, VNodeClasses,
};
pub use state::{is_truthy, StateLookup};
pub use value::DirectiveValue;
