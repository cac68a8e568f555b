//! Component state lookup.
//!
//! When the directive value is a bare name (or a list of names), each name is
//! camelized and looked up in the component's reactive state to decide
//! whether the class is present. The host injects that state through
//! [`StateLookup`].

use modiste_carton::{CompactString, FxHashMap};
use serde_json::{Map, Value};

/// Read-only access to component state by camelCase key
pub trait StateLookup {
    fn get(&self, key: &str) -> Option<&Value>;
}

impl StateLookup for Map<String, Value> {
    fn get(&self, key: &str) -> Option<&Value> {
        Map::get(self, key)
    }
}

impl StateLookup for FxHashMap<CompactString, Value> {
    fn get(&self, key: &str) -> Option<&Value> {
        FxHashMap::get(self, key)
    }
}

/// JavaScript truthiness of a state value
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
