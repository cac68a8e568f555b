//! Naming mode resolution.

use modiste_carton::bitflags;

use crate::options::ModifierOptions;

bitflags! {
    /// Directive modifiers (`v-mods.is`, `v-mods.bem`)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DirectiveModifiers: u8 {
        /// `.is`: force the `is-` prefix
        const IS = 1 << 0;
        /// `.bem`: append modifiers to a base class
        const BEM = 1 << 1;
    }
}

impl DirectiveModifiers {
    /// Build the flag set from modifier names, ignoring unknown ones
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        names
            .into_iter()
            .fold(Self::empty(), |flags, name| match name {
                "is" => flags | Self::IS,
                "bem" => flags | Self::BEM,
                _ => flags,
            })
    }
}

/// How a modifier name becomes a class name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModifierMode {
    /// The name is used as is
    #[default]
    Plain,
    /// The name gets an `is-` prefix unless it already has one
    ForcedPrefix,
    /// The name becomes the suffix of a base class: `base--name`
    Bem,
}

impl ModifierMode {
    /// Resolve the mode of one invocation.
    ///
    /// Later rules win: modifiers first, then the registered directive name,
    /// so `v-is.bem` still runs in forced-prefix mode.
    pub fn resolve(name: &str, modifiers: DirectiveModifiers, options: &ModifierOptions) -> Self {
        let mut mode = Self::Plain;

        if modifiers.contains(DirectiveModifiers::IS) {
            mode = Self::ForcedPrefix;
        }
        if modifiers.contains(DirectiveModifiers::BEM) {
            mode = Self::Bem;
        }

        if options.is_directive_name == name {
            mode = Self::ForcedPrefix;
        }
        if options.bem_directive_name == name {
            mode = Self::Bem;
        }

        mode
    }

    #[inline]
    pub fn is_bem(self) -> bool {
        self == Self::Bem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(name: &str, modifiers: DirectiveModifiers) -> ModifierMode {
        ModifierMode::resolve(name, modifiers, &ModifierOptions::default())
    }

    #[test]
    fn test_generic_name() {
        assert_eq!(resolve("mods", DirectiveModifiers::empty()), ModifierMode::Plain);
        assert_eq!(resolve("mods", DirectiveModifiers::IS), ModifierMode::ForcedPrefix);
        assert_eq!(resolve("mods", DirectiveModifiers::BEM), ModifierMode::Bem);
        assert_eq!(resolve("mods", DirectiveModifiers::all()), ModifierMode::Bem);
    }

    #[test]
    fn test_registered_name_overrides_modifiers() {
        assert_eq!(resolve("is", DirectiveModifiers::empty()), ModifierMode::ForcedPrefix);
        assert_eq!(resolve("is", DirectiveModifiers::BEM), ModifierMode::ForcedPrefix);
        assert_eq!(resolve("bem", DirectiveModifiers::empty()), ModifierMode::Bem);
        assert_eq!(resolve("bem", DirectiveModifiers::IS), ModifierMode::Bem);
    }

    #[test]
    fn test_custom_names() {
        let options = ModifierOptions {
            bem_directive_name: "block".into(),
            ..Default::default()
        };
        let none = DirectiveModifiers::empty();
        assert_eq!(ModifierMode::resolve("block", none, &options), ModifierMode::Bem);
        assert_eq!(ModifierMode::resolve("bem", none, &options), ModifierMode::Plain);
    }

    #[test]
    fn test_modifiers_from_names() {
        assert_eq!(
            DirectiveModifiers::from_names(["bem", "unknown"]),
            DirectiveModifiers::BEM
        );
        assert_eq!(
            DirectiveModifiers::from_names(["is", "bem"]),
            DirectiveModifiers::IS | DirectiveModifiers::BEM
        );
        assert!(DirectiveModifiers::from_names([]).is_empty());
    }
}
