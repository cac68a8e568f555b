//! Element class lists.
//!
//! The directive never replaces an element's classes wholesale; it only adds
//! and removes single names through [`ClassList`]. Hosts implement the trait
//! over their own element handle; [`ClassSet`] is an in-memory version that
//! behaves like a DOM `classList`.

use std::fmt;

use modiste_carton::{CompactString, SmallVec};

/// Mutable view of one element's class names
pub trait ClassList {
    /// Add a class. Adding a present class is a no-op.
    fn add(&mut self, class: &str);

    /// Remove a class. Removing an absent class is a no-op.
    fn remove(&mut self, class: &str);

    /// Whether the class is present
    fn contains(&self, class: &str) -> bool;

    /// Iterate over the present classes
    fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}

/// Ordered set of class names, like a DOM `classList`.
///
/// Only single tokens are stored: empty names and names containing ASCII
/// whitespace are ignored by [`ClassList::add`] and [`ClassList::remove`],
/// so the set always survives a trip through its class attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: SmallVec<[CompactString; 8]>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a class attribute, dropping empty tokens and duplicates
    pub fn parse(attr: &str) -> Self {
        let mut set = Self::new();
        for class in attr.split_ascii_whitespace() {
            set.add(class);
        }
        set
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Render as a class attribute value
    pub fn to_attr(&self) -> String {
        self.to_string()
    }
}

impl ClassList for ClassSet {
    fn add(&mut self, class: &str) {
        if !is_token(class) {
            tracing::debug!(target: "modiste", class, "ignoring invalid class token");
            return;
        }
        if !self.contains(class) {
            self.classes.push(CompactString::new(class));
        }
    }

    fn remove(&mut self, class: &str) {
        if !is_token(class) {
            return;
        }
        self.classes.retain(|c| c.as_str() != class);
    }

    fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c.as_str() == class)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.classes.iter().map(CompactString::as_str))
    }
}

fn is_token(class: &str) -> bool {
    !class.is_empty() && !class.bytes().any(|b| b.is_ascii_whitespace())
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

impl<'a> FromIterator<&'a str> for ClassSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for class in iter {
            set.add(class);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let set = ClassSet::parse("  navbar  is-hidden navbar ");
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_attr(), "navbar is-hidden");
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut set = ClassSet::new();
        set.add("a");
        set.add("b");
        set.add("a");
        assert_eq!(set.to_attr(), "a b");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut set: ClassSet = ["a", "b", "c"].into_iter().collect();
        set.remove("b");
        set.remove("b");
        set.remove("missing");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a", "c"]);
        assert!(!set.contains("b"));
    }

    #[test]
    fn test_rejects_non_tokens() {
        let mut set = ClassSet::parse("static");
        set.add("");
        set.add("a b");
        set.add("tab\tname");
        set.remove("static other");
        assert_eq!(set.to_attr(), "static");
        assert_eq!(ClassSet::parse(&set.to_attr()), set);
    }

    #[test]
    fn test_contains_whole_names_only() {
        let set = ClassSet::parse("base-class");
        assert!(set.contains("base-class"));
        assert!(!set.contains("base"));
    }
}
