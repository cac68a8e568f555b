//! Identifier casing conversions.
//!
//! Modifier class names are written in kebab-case (`is-hidden`) while the
//! component state that backs them uses camelCase keys (`isHidden`). These
//! two helpers map between the spellings.
//!
//! They are deterministic and total over any input, but not exact inverses:
//! names with leading digits or consecutive capitals do not survive a round
//! trip.

use compact_str::CompactString;

/// Convert a kebab-cased name to camelCase.
///
/// Every `-` directly followed by an ASCII lowercase letter or digit is
/// dropped and that character is upper-cased. Other characters, including
/// the first one, are left untouched.
///
/// # Examples
/// ```
/// use modiste_carton::camelize;
///
/// assert_eq!(camelize("is-hidden"), "isHidden");
/// assert_eq!(camelize("level-2"), "level2");
/// assert_eq!(camelize("hidden"), "hidden");
/// ```
pub fn camelize(s: &str) -> CompactString {
    let mut result = CompactString::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() || next.is_ascii_digit() {
                    result.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }

    result
}

/// Convert a camelCased name to kebab-case.
///
/// Every ASCII uppercase letter is replaced by `-` and its lowercase form,
/// and every maximal run of ASCII digits is prefixed with `-`.
///
/// # Examples
/// ```
/// use modiste_carton::hyphenate;
///
/// assert_eq!(hyphenate("isHidden"), "is-hidden");
/// assert_eq!(hyphenate("level2"), "level-2");
/// assert_eq!(hyphenate("hidden"), "hidden");
/// ```
pub fn hyphenate(s: &str) -> CompactString {
    let mut result = CompactString::with_capacity(s.len() + 4);
    let mut in_digits = false;

    for c in s.chars() {
        if c.is_ascii_uppercase() {
            result.push('-');
            result.push(c.to_ascii_lowercase());
            in_digits = false;
        } else if c.is_ascii_digit() {
            if !in_digits {
                result.push('-');
            }
            result.push(c);
            in_digits = true;
        } else {
            result.push(c);
            in_digits = false;
        }
    }

    result
}
