//! Inline markup processing for a single line or short fragment.

use crate::normalize::{decode_entities, escape_html, fix_cjk_spacing, normalize_unicode};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Target rendering mode for inline markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InlineMode {
    /// Leave markdown inline syntax as written.
    #[default]
    Markdown,
    /// Escape the text and turn `**bold**`, `` `code` `` and `$$math$$` into tags.
    Html,
}

static RE_FORMULA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\$([^$]+)\$\$").unwrap());

static RE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

static RE_BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// Processes inline markup for the given mode.
///
/// HTML mode runs, in order: entity decoding, Unicode normalization,
/// CJK/Latin spacing, escaping, then formula, code and bold tags. Escaping
/// happens exactly once and before any tag is synthesized.
pub fn process_inline(text: &str, mode: InlineMode) -> String {
    match mode {
        InlineMode::Markdown => text.to_string(),
        InlineMode::Html => to_html(text),
    }
}

fn to_html(text: &str) -> String {
    let text = decode_entities(text);
    let text = normalize_unicode(&text);
    let text = fix_cjk_spacing(&text);
    let text = escape_html(&text);

    let text = RE_FORMULA.replace_all(&text, |caps: &Captures| {
        format!("<span class='formula'>$${}$$</span>", &caps[1])
    });
    let text = RE_CODE.replace_all(&text, "<code>${1}</code>");
    RE_BOLD
        .replace_all(&text, "<strong>${1}</strong>")
        .into_owned()
}
