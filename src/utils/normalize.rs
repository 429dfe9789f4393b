//! Identifier derivation from display names.
//!
//! Sponsor pages and plenary day tabs are addressed by identifiers derived
//! from human-readable names ("Acme Corp" → `acme_corp`, "Monday, July 6" →
//! `monday,july6`). Derivation folds accents/diacritics so that names like
//! "José García Labs" produce stable ASCII identifiers.

use unicode_normalization::UnicodeNormalization;

/// Derive a page identifier from a display name.
///
/// Transformations applied:
/// 1. Replace special characters that don't decompose (ł, ø, æ, etc.)
/// 2. Unicode NFD normalization (decompose characters)
/// 3. Remove combining diacritical marks (accents)
/// 4. Convert to lowercase
/// 5. Join whitespace-separated words with underscores
///
/// # Examples
///
/// ```
/// use confdata::utils::slugify;
///
/// assert_eq!(slugify("Quantum Ventures"), "quantum_ventures");
/// assert_eq!(slugify("José García Labs"), "jose_garcia_labs");
/// assert_eq!(slugify("  Deep   Thought  "), "deep_thought");
/// ```
pub fn slugify(name: &str) -> String {
    fold_diacritics(name)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("_")
}

/// Derive a day-tab identifier from a day label.
///
/// Unlike [`slugify`], words are joined with nothing, matching the ids the
/// schedule page uses for its per-day tab anchors.
///
/// # Examples
///
/// ```
/// use confdata::utils::day_slug;
///
/// assert_eq!(day_slug("Monday, July 6"), "monday,july6");
/// assert_eq!(day_slug("Tuesday"), "tuesday");
/// ```
pub fn day_slug(day: &str) -> String {
    fold_diacritics(day)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("")
}

/// Strip accents and diacritics, leaving plain ASCII letters where possible.
fn fold_diacritics(s: &str) -> String {
    replace_special_chars(s)
        // NFD decomposition: splits characters into base + combining marks
        .nfd()
        // Drop the combining diacritical marks (Unicode category Mn)
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Replace special characters that don't decompose via Unicode NFD.
///
/// Letters like Ł, Ø, Æ are distinct letters rather than accented versions,
/// so they need explicit replacement.
fn replace_special_chars(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'Ł' => 'L',
            'ł' => 'l',
            'Ø' => 'O',
            'ø' => 'o',
            'Æ' => 'A',
            'æ' => 'a',
            'ß' => 's',
            'Đ' => 'D',
            'đ' => 'd',
            'İ' => 'I',
            'ı' => 'i',
            _ => c,
        })
        .collect()
}

/// Check if a character is a combining diacritical mark.
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
