//! Block-level HTML rendering for summary bodies.
//!
//! Lines are classified one at a time and accumulated into the open block.
//! A block is flushed when a line of a different kind arrives, on a blank
//! line, and at end of input, so every opened element is closed.

use crate::inline::{process_inline, InlineMode};
use regex::Regex;
use std::sync::LazyLock;

static RE_TABLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|?[\s\-:|]+\|?$").unwrap());

/// Classification of a single trimmed body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty line; closes every open block.
    Blank,
    /// Table separator row such as `|---|:---:|`; dropped.
    Separator,
    /// Table row with at least two pipes.
    TableRow,
    /// `- item` or `* item`, carrying the text after the marker.
    ListItem(&'a str),
    /// Anything else.
    Text,
}

/// Classifies a trimmed line.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.matches('|').count() >= 2 {
        if RE_TABLE_SEPARATOR.is_match(line) {
            return LineKind::Separator;
        }
        return LineKind::TableRow;
    }
    if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return LineKind::ListItem(item);
    }
    LineKind::Text
}

/// Block currently being accumulated.
#[derive(Debug, Default)]
enum OpenBlock {
    #[default]
    None,
    Paragraph(Vec<String>),
    List(Vec<String>),
    Table(Vec<String>),
}

#[derive(Debug, Default)]
struct BlockParser {
    output: String,
    open: OpenBlock,
}

impl BlockParser {
    fn push_line(&mut self, line: &str) {
        match classify_line(line) {
            LineKind::Blank => self.flush(),
            LineKind::Separator => {}
            LineKind::TableRow => match &mut self.open {
                OpenBlock::Table(rows) => rows.push(line.to_string()),
                _ => {
                    self.flush();
                    self.open = OpenBlock::Table(vec![line.to_string()]);
                }
            },
            LineKind::ListItem(item) => match &mut self.open {
                OpenBlock::List(items) => items.push(item.to_string()),
                _ => {
                    self.flush();
                    self.open = OpenBlock::List(vec![item.to_string()]);
                }
            },
            LineKind::Text => {
                let text = process_inline(line, InlineMode::Html);
                match &mut self.open {
                    OpenBlock::Paragraph(lines) => lines.push(text),
                    _ => {
                        self.flush();
                        self.open = OpenBlock::Paragraph(vec![text]);
                    }
                }
            }
        }
    }

    fn flush(&mut self) {
        match std::mem::take(&mut self.open) {
            OpenBlock::None => {}
            OpenBlock::Paragraph(lines) => {
                self.output.push_str("<p>");
                self.output.push_str(&lines.join(" "));
                self.output.push_str("</p>\n");
            }
            OpenBlock::List(items) => self.output.push_str(&render_list(&items)),
            OpenBlock::Table(rows) => self.output.push_str(&render_table(&rows)),
        }
    }

    fn finish(mut self) -> String {
        self.flush();
        self.output
    }
}

/// Renders a summary body into `<p>`, `<ul>` and table blocks.
pub fn render_blocks(text: &str) -> String {
    let mut parser = BlockParser::default();
    for line in text.lines() {
        parser.push_line(line.trim());
    }
    parser.finish()
}

/// Renders accumulated table rows; the first row becomes the header.
pub fn render_table<S: AsRef<str>>(rows: &[S]) -> String {
    let mut output = String::from("<div class='table-wrapper'>\n<table>\n");

    for (i, row) in rows.iter().enumerate() {
        let tag = if i == 0 { "th" } else { "td" };
        output.push_str("<tr>\n");
        for cell in split_cells(row.as_ref()) {
            output.push_str(&format!(
                "<{tag}>{}</{tag}>\n",
                process_inline(cell, InlineMode::Html)
            ));
        }
        output.push_str("</tr>\n");
    }

    output.push_str("</table>\n</div>\n");
    output
}

/// Renders list items as a bullet list.
pub fn render_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut output = String::from("<ul>\n");
    for item in items {
        output.push_str(&format!(
            "<li>{}</li>\n",
            process_inline(item.as_ref(), InlineMode::Html)
        ));
    }
    output.push_str("</ul>\n");
    output
}

/// Splits a table row into non-empty trimmed cells.
fn split_cells(row: &str) -> impl Iterator<Item = &str> {
    let row = row.trim();
    let row = row.strip_prefix('|').unwrap_or(row);
    let row = row.strip_suffix('|').unwrap_or(row);
    row.split('|').map(str::trim).filter(|cell| !cell.is_empty())
}
