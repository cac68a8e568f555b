//! Modifier class name construction.

use modiste_carton::CompactString;

use crate::mode::ModifierMode;
use crate::options::ModifierOptions;

/// Build the class name toggled for modifier `name` in `mode`.
///
/// Returns `None` when a BEM modifier has no base class to attach to; the
/// caller then leaves the element alone for that modifier.
///
/// `prev_class` is the element's class attribute as it was last rendered.
/// It is only read in BEM mode.
pub fn build_class_name(
    name: &str,
    mode: ModifierMode,
    arg: Option<&str>,
    prev_class: Option<&str>,
    options: &ModifierOptions,
) -> Option<CompactString> {
    let prefix = options.is_prefix.as_str();

    match mode {
        ModifierMode::Plain => Some(CompactString::new(name)),
        ModifierMode::ForcedPrefix => {
            if name.starts_with(prefix) {
                Some(CompactString::new(name))
            } else {
                let mut class = CompactString::with_capacity(prefix.len() + name.len());
                class.push_str(prefix);
                class.push_str(name);
                Some(class)
            }
        }
        ModifierMode::Bem => {
            let separator = options.bem_separator.as_str();
            let base = find_base_class(arg, prev_class, separator)?;
            let modifier = name.strip_prefix(prefix).unwrap_or(name);

            let mut class =
                CompactString::with_capacity(base.len() + separator.len() + modifier.len());
            class.push_str(base);
            class.push_str(separator);
            class.push_str(modifier);
            Some(class)
        }
    }
}

/// Find the BEM base class among the previously rendered classes.
///
/// An explicit base (`v-bem:navbar`) must already be rendered on the element.
/// Otherwise the first rendered class that is not itself a modifier (does not
/// contain `separator`) is used.
pub fn find_base_class<'a>(
    arg: Option<&'a str>,
    prev_class: Option<&'a str>,
    separator: &str,
) -> Option<&'a str> {
    let mut rendered = prev_class.unwrap_or_default().split_ascii_whitespace();

    match arg {
        Some(base) => rendered.any(|class| class == base).then_some(base),
        None => rendered.find(|class| !class.contains(separator)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(name: &str, mode: ModifierMode, arg: Option<&str>, prev: Option<&str>) -> Option<String> {
        build_class_name(name, mode, arg, prev, &ModifierOptions::default()).map(|c| c.to_string())
    }

    #[test]
    fn test_plain() {
        assert_eq!(build("hidden", ModifierMode::Plain, None, None).as_deref(), Some("hidden"));
        assert_eq!(build("is-hidden", ModifierMode::Plain, None, None).as_deref(), Some("is-hidden"));
    }

    #[test]
    fn test_forced_prefix() {
        let mode = ModifierMode::ForcedPrefix;
        assert_eq!(build("hidden", mode, None, None).as_deref(), Some("is-hidden"));
        assert_eq!(build("is-hidden", mode, None, None).as_deref(), Some("is-hidden"));
        // Only a real `is-` prefix counts
        assert_eq!(build("island", mode, None, None).as_deref(), Some("is-island"));
    }

    #[test]
    fn test_bem_implicit_base() {
        let mode = ModifierMode::Bem;
        assert_eq!(
            build("hidden", mode, None, Some("base-class")).as_deref(),
            Some("base-class--hidden")
        );
        assert_eq!(
            build("is-hidden", mode, None, Some("base-class other")).as_deref(),
            Some("base-class--hidden")
        );
        // Modifier classes are skipped when looking for the base
        assert_eq!(
            build("hidden", mode, None, Some("navbar--top navbar")).as_deref(),
            Some("navbar--hidden")
        );
    }

    #[test]
    fn test_bem_implicit_without_base() {
        let mode = ModifierMode::Bem;
        assert_eq!(build("hidden", mode, None, None), None);
        assert_eq!(build("hidden", mode, None, Some("")), None);
        assert_eq!(build("hidden", mode, None, Some("   ")), None);
        assert_eq!(build("hidden", mode, None, Some("modifier--other")), None);
    }

    #[test]
    fn test_bem_explicit_base() {
        let mode = ModifierMode::Bem;
        assert_eq!(
            build("hidden", mode, Some("base-class"), Some("first base-class")).as_deref(),
            Some("base-class--hidden")
        );
        assert_eq!(
            build("is-hidden", mode, Some("navbar"), Some("navbar")).as_deref(),
            Some("navbar--hidden")
        );
    }

    #[test]
    fn test_bem_explicit_base_must_be_rendered() {
        let mode = ModifierMode::Bem;
        assert_eq!(build("hidden", mode, Some("base-class"), None), None);
        assert_eq!(build("hidden", mode, Some("base-class"), Some("other")), None);
        // Whole tokens only, and no fallback to the implicit base
        assert_eq!(build("hidden", mode, Some("base"), Some("base-class")), None);
    }

    #[test]
    fn test_custom_separator_and_prefix() {
        let options = ModifierOptions {
            is_prefix: "has-".into(),
            bem_separator: "_".into(),
            ..Default::default()
        };
        let class = build_class_name("has-icon", ModifierMode::Bem, None, Some("btn_big btn"), &options);
        assert_eq!(class.as_deref(), Some("btn_icon"));

        let class = build_class_name("icon", ModifierMode::ForcedPrefix, None, None, &options);
        assert_eq!(class.as_deref(), Some("has-icon"));
    }
}
