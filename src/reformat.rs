//! # Flat-Content Reformatter
//!
//! Some stored summaries lost their line breaks upstream and arrive as one
//! long line with markdown tokens embedded in it. This module puts the breaks
//! back so headings, labels, lists, math and table rows start on their own lines.
//!
//! ## Rule Order
//!
//! 1. Headings (`## `, `### `, `#### `)
//! 2. Bold labels (`**label**:` / `**label**：`), not right after a period or list dash
//! 3. Standalone bold labels directly followed by a list dash
//! 4. Bold list items (`- **`)
//! 5. Plain list items (`- ` not followed by `*`)
//! 6. Numbered items (`1. `), not right after `#`
//! 7. `$$` math delimiters
//! 8. Table rows (`| a | b |`)
//!
//! Two repair passes then rejoin list markers that got split from a following
//! bold label, newline runs collapse to a blank line, and the result is trimmed.
//! Later rules rely on the boundaries earlier rules produced; keep the order.

use regex::Regex;
use std::sync::LazyLock;

/// Content with at least this many newlines is treated as already structured.
pub const FLAT_NEWLINE_LIMIT: usize = 3;

/// Content must be longer than this (in characters) to be reformatted.
pub const FLAT_MIN_CHARS: usize = 200;

/// Upper bound on rule passes in [`reformat_flat_content`].
pub const MAX_REFORMAT_PASSES: usize = 8;

static RE_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+(#{2,4}\s+)").unwrap());

static RE_BOLD_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^.\n-])\s+(\*\*[^*]{2,60}\*\*\s*[:：])").unwrap());

static RE_BOLD_STANDALONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+(\*\*[^*]{2,40}\*\*)\s+(-)").unwrap());

static RE_BOLD_LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\n])\s+(- \*\*)").unwrap());

static RE_PLAIN_LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\n-])\s+(- [^*\n])").unwrap());

static RE_NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\n#])\s+([0-9]+\.\s+)").unwrap());

static RE_MATH_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^$\n])\s*(\$\$)").unwrap());

static RE_MATH_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\$\$)([^\n$])").unwrap());

static RE_TABLE_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\n|])\s*(\|[^|\n]+\|[^|\n]+\|)").unwrap());

static RE_BROKEN_NUMBERED_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+\.)\s*\n+(\*\*)").unwrap());

static RE_BROKEN_DASH_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(-)[ \t]*\n+(\*\*)").unwrap());

static RE_EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Returns true when content looks like it lost its line breaks.
pub fn is_flat(content: &str) -> bool {
    content.matches('\n').count() < FLAT_NEWLINE_LIMIT
        && content.chars().count() > FLAT_MIN_CHARS
}

/// Reformats `content` only when [`is_flat`] says it needs it.
pub fn reformat_if_flat(content: &str) -> String {
    if is_flat(content) {
        reformat_flat_content(content)
    } else {
        content.to_string()
    }
}

/// Reinserts line breaks before markdown structure in single-line text.
///
/// The rules are applied until a pass changes nothing (at most
/// [`MAX_REFORMAT_PASSES`] passes), so running it on its own output is a no-op.
pub fn reformat_flat_content(text: &str) -> String {
    let mut current = reformat_pass(text);
    for _ in 1..MAX_REFORMAT_PASSES {
        let next = reformat_pass(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn reformat_pass(text: &str) -> String {
    let mut result = RE_HEADING.replace_all(text, "\n\n${1}").into_owned();

    result = RE_BOLD_LABEL
        .replace_all(&result, "${1}\n\n${2}")
        .into_owned();
    result = RE_BOLD_STANDALONE
        .replace_all(&result, "\n\n${1}\n${2}")
        .into_owned();
    result = RE_BOLD_LIST_ITEM
        .replace_all(&result, "${1}\n${2}")
        .into_owned();
    result = RE_PLAIN_LIST_ITEM
        .replace_all(&result, "${1}\n${2}")
        .into_owned();
    result = RE_NUMBERED_ITEM
        .replace_all(&result, "${1}\n\n${2}")
        .into_owned();

    // Math: break before each `$$`, then after it
    result = RE_MATH_OPEN
        .replace_all(&result, "${1}\n\n${2}")
        .into_owned();
    result = RE_MATH_CLOSE
        .replace_all(&result, "${1}\n\n${2}")
        .into_owned();

    result = RE_TABLE_ROW.replace_all(&result, "${1}\n${2}").into_owned();

    // Repairs: "1.\n\n**x**" -> "1. **x**", "-\n\n**x**" -> "- **x**"
    result = RE_BROKEN_NUMBERED_BOLD
        .replace_all(&result, "${1} ${2}")
        .into_owned();
    result = RE_BROKEN_DASH_BOLD
        .replace_all(&result, "${1} ${2}")
        .into_owned();

    result = RE_EXCESS_NEWLINES
        .replace_all(&result, "\n\n")
        .into_owned();

    result.trim().to_string()
}
