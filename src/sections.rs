//! Q-section splitting for FAQ-style summaries.
//!
//! Summaries from the papers.cool generator answer a fixed list of questions,
//! each introduced by a `Q<n>:` marker (ASCII or fullwidth colon). Section
//! content runs from the end of its marker to the start of the next marker.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Section key (`"Q1"`, `"Q2"`, ...) to trimmed content.
pub type QSectionMap = HashMap<String, String>;

/// Keys emitted by the renderers, in output order. `Q7` is never emitted.
pub const SECTION_ORDER: [&str; 6] = ["Q1", "Q2", "Q3", "Q4", "Q5", "Q6"];

/// Default question titles for the known sections.
pub const SECTION_TITLES: &[(&str, &str)] = &[
    ("Q1", "这篇论文试图解决什么问题？"),
    ("Q2", "有哪些相关研究？"),
    ("Q3", "论文如何解决这个问题？"),
    ("Q4", "论文做了哪些实验？"),
    ("Q5", "有什么可以进一步探索的点？"),
    ("Q6", "总结一下论文的主要内容"),
];

static RE_Q_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Q([0-9]+)\s*[:：]\s*").unwrap());

/// Returns the default title for a section key.
pub fn section_title(key: &str) -> Option<&'static str> {
    SECTION_TITLES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, title)| *title)
}

/// Splits a summary into Q-sections.
///
/// Returns `None` when the text carries no marker at all. Markers are taken
/// in source order; a repeated key keeps the content of its last occurrence.
pub fn split_q_sections(summary: &str) -> Option<QSectionMap> {
    let markers: Vec<(usize, usize, &str)> = RE_Q_MARKER
        .captures_iter(summary)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let digits = caps.get(1)?;
            Some((whole.start(), whole.end(), digits.as_str()))
        })
        .collect();

    if markers.is_empty() {
        return None;
    }

    let mut sections = QSectionMap::with_capacity(markers.len());
    for (i, (_, content_start, digits)) in markers.iter().enumerate() {
        let content_end = markers
            .get(i + 1)
            .map(|(next_start, _, _)| *next_start)
            .unwrap_or(summary.len());
        let content = summary[*content_start..content_end].trim();
        sections.insert(format!("Q{}", digits), content.to_string());
    }

    Some(sections)
}

/// Strips a leading copy of the section's default title from its content.
pub fn strip_default_title<'a>(key: &str, content: &'a str) -> &'a str {
    match section_title(key) {
        Some(title) => content
            .strip_prefix(title)
            .map(str::trim)
            .unwrap_or(content),
        None => content,
    }
}
