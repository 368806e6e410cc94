//! Markdown digest renderer.

use super::{render_each, RenderOptions};
use crate::inline::{process_inline, InlineMode};
use crate::model::ScoredPaper;
use crate::reformat::{is_flat, reformat_if_flat};
use crate::sections::{section_title, split_q_sections, strip_default_title, SECTION_ORDER};
use chrono::NaiveDate;

/// Sentence emitted when there is nothing to report.
pub const NO_MATCHES: &str = "No new papers matched the configured keywords.";

/// Placeholder for a paper without summary text.
pub const NO_SUMMARY: &str = "*(No summary available)*";

/// Markdown renderer.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Creates a new renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders the full digest.
    pub fn render(&self, date: NaiveDate, papers: &[ScoredPaper]) -> String {
        let mut output = format!("# {} {}\n\n", self.options.title, date.format("%Y-%m-%d"));

        if papers.is_empty() {
            output.push_str(NO_MATCHES);
            output.push('\n');
            return output;
        }

        output.push_str(&format!("> {} papers | Auto-formatted\n\n", papers.len()));

        let rendered = render_each(papers, self.options.parallel, |num, paper| {
            self.render_paper(num, paper)
        });
        output.push_str(&rendered.join("---\n\n"));

        tracing::debug!(papers = papers.len(), bytes = output.len(), "rendered markdown digest");
        output
    }

    /// Renders one paper: heading, metadata table, summary.
    pub fn render_paper(&self, num: usize, scored: &ScoredPaper) -> String {
        let paper = &scored.paper;
        let mut output = String::new();

        output.push_str(&format!(
            "## {}. {}\n\n",
            num,
            process_inline(&paper.title, InlineMode::Markdown)
        ));

        output.push_str("| Field | Value |\n");
        output.push_str("|-------|-------|\n");
        output.push_str(&format!("| Score | {} |\n", scored.score));
        if !scored.topics.is_empty() {
            output.push_str(&format!("| Topics | {} |\n", scored.topics.join(", ")));
        }
        if !paper.url.is_empty() {
            output.push_str(&format!("| URL | [{}]({}) |\n", paper.url_label(), paper.url));
        }
        if let Some(published) = paper.published_at {
            output.push_str(&format!("| Published | {} |\n", published.format("%Y-%m-%d")));
        }
        output.push('\n');

        self.render_summary(&paper.summary, &mut output);
        output
    }

    /// Renders the summary as Q-sections, or verbatim when it has none.
    fn render_summary(&self, summary: &str, output: &mut String) {
        if summary.is_empty() {
            output.push_str(NO_SUMMARY);
            output.push_str("\n\n");
            return;
        }

        let Some(sections) = split_q_sections(summary) else {
            output.push_str(summary);
            output.push_str("\n\n");
            return;
        };

        for key in SECTION_ORDER {
            let Some(content) = sections.get(key) else {
                continue;
            };
            let title = section_title(key).unwrap_or_default();
            let content = strip_default_title(key, content);

            let content = if self.options.reformat_flat_content {
                if is_flat(content) {
                    tracing::debug!(section = key, chars = content.chars().count(), "reformatting flat section");
                }
                reformat_if_flat(content)
            } else {
                content.to_string()
            };

            output.push_str(&format!("### {}: {}\n\n", key, title));
            output.push_str(&content);
            output.push_str("\n\n");
        }
    }
}
