//! Markdown and HTML rendering of digests.

mod blocks;
mod html;
mod markdown;
mod options;
mod stylesheet;

pub use blocks::{classify_line, render_blocks, render_list, render_table, LineKind};
pub use html::{extract_takeaway, summary_to_qa, HtmlRenderer};
pub use markdown::MarkdownRenderer;
pub use options::RenderOptions;
pub use stylesheet::STYLESHEET;

use crate::model::{DocumentFormat, RenderedDocument, ScoredPaper};
use chrono::NaiveDate;
use rayon::prelude::*;

/// Renders a digest to Markdown.
pub fn render_markdown(date: NaiveDate, papers: &[ScoredPaper], options: &RenderOptions) -> String {
    MarkdownRenderer::new(options.clone()).render(date, papers)
}

/// Renders a digest to a self-contained HTML document.
pub fn render_html(date: NaiveDate, papers: &[ScoredPaper], options: &RenderOptions) -> String {
    HtmlRenderer::new(options.clone()).render(date, papers)
}

/// Renders a digest in the given format, named after its date.
pub fn render_document(
    format: DocumentFormat,
    date: NaiveDate,
    papers: &[ScoredPaper],
    options: &RenderOptions,
) -> RenderedDocument {
    let content = match format {
        DocumentFormat::Markdown => render_markdown(date, papers, options),
        DocumentFormat::Html => render_html(date, papers, options),
    };
    RenderedDocument::new(format, date, content)
}

/// Renders each paper with its 1-based number, in input order.
///
/// Papers are independent of each other, so this fans out on rayon when
/// `parallel` is set.
fn render_each<F>(papers: &[ScoredPaper], parallel: bool, render: F) -> Vec<String>
where
    F: Fn(usize, &ScoredPaper) -> String + Sync,
{
    if parallel && papers.len() > 1 {
        papers
            .par_iter()
            .enumerate()
            .map(|(i, paper)| render(i + 1, paper))
            .collect()
    } else {
        papers
            .iter()
            .enumerate()
            .map(|(i, paper)| render(i + 1, paper))
            .collect()
    }
}
