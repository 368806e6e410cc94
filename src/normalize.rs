//! # Text Normalization
//!
//! Character-level helpers shared by every text-producing stage:
//!
//! 1. **Unicode normalization** - invisible characters removed, decode-failure markers blanked
//! 2. **Entity decoding** - the handful of HTML entities the summary generator emits
//! 3. **Inter-script spacing** - a space between CJK/Kana and adjacent Latin letters or digits
//! 4. **HTML escaping** - `&`, `<`, `>` only

use regex::Regex;
use std::sync::LazyLock;

/// Entity replacements, applied in order.
///
/// The double-escaped forms come first so `&amp;quot;` becomes `"` rather
/// than `&quot;`.
const ENTITY_REPLACEMENTS: &[(&str, &str)] = &[
    ("&amp;#x27;", "'"),
    ("&amp;quot;", "\""),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#x27;", "'"),
    ("&nbsp;", " "),
];

/// Removes invisible characters and blanks out replacement characters.
///
/// - Soft hyphen, zero-width space/non-joiner/joiner and BOM are dropped
/// - U+FFFD becomes a single space
///
/// Nothing else is touched.
pub fn normalize_unicode(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for c in input.chars() {
        if is_invisible_char(c) {
            continue;
        }
        if c == '\u{FFFD}' {
            result.push(' ');
            continue;
        }
        result.push(c);
    }

    result
}

/// Check if character is an invisible formatting character
fn is_invisible_char(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'   // Soft hyphen
        | '\u{200B}' // Zero-width space
        | '\u{200C}' // Zero-width non-joiner
        | '\u{200D}' // Zero-width joiner
        | '\u{FEFF}' // BOM
    )
}

/// Decodes the fixed entity set produced upstream.
pub fn decode_entities(input: &str) -> String {
    ENTITY_REPLACEMENTS
        .iter()
        .fold(input.to_string(), |text, (entity, replacement)| {
            text.replace(entity, replacement)
        })
}

/// Escapes `&`, `<` and `>` for HTML text content.
///
/// The ampersand goes first so the entities introduced here are not escaped again.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes a value for a single-quoted HTML attribute.
pub fn escape_attr(input: &str) -> String {
    escape_html(input).replace('\'', "&#39;")
}

static RE_CJK_THEN_LATIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\p{Han}\p{Katakana}\p{Hiragana}])([a-zA-Z0-9])").unwrap()
});

static RE_LATIN_THEN_CJK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-zA-Z0-9])([\p{Han}\p{Katakana}\p{Hiragana}])").unwrap()
});

/// Inserts a space wherever CJK/Kana touches a Latin letter or digit.
pub fn fix_cjk_spacing(input: &str) -> String {
    let spaced = RE_CJK_THEN_LATIN.replace_all(input, "${1} ${2}");
    RE_LATIN_THEN_CJK
        .replace_all(&spaced, "${1} ${2}")
        .into_owned()
}
