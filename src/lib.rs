//! # paper-radar
//!
//! Renders ranked research-paper digests as Markdown and as a self-contained,
//! print-friendly HTML document.
//!
//! Summaries arrive in whatever shape the upstream summarizer produced: FAQ
//! style `Q1:`..`Q6:` answers, embedded markdown, HTML entities, or one long
//! line that lost its breaks. The pipeline normalizes all of that before
//! rendering.
//!
//! ## Quick Start
//!
//! ```no_run
//! use paper_radar::{parse_date, render_markdown, Paper, RenderOptions, ScoredPaper};
//!
//! fn main() -> paper_radar::Result<()> {
//!     let date = parse_date("2026-02-26")?;
//!     let papers = vec![ScoredPaper::new(
//!         Paper::new("2402.00001", "Sparse attention at scale")
//!             .with_summary("Q1: 这篇论文试图解决什么问题？ Long-context cost."),
//!         7,
//!     )];
//!
//!     let markdown = render_markdown(date, &papers, &RenderOptions::default());
//!     println!("{}", markdown);
//!     Ok(())
//! }
//! ```
//!
//! ## Digest Cycle
//!
//! [`run_digest`] takes the pending queue from the [`StateStore`], writes the
//! best papers to `<output>/<date>.md` (and `.html`), and keeps the rest queued.
//!
//! ## Features
//!
//! - `async`: Async wrappers with Tokio

pub mod digest;
pub mod error;
pub mod inline;
pub mod model;
pub mod normalize;
pub mod reformat;
pub mod render;
pub mod scoring;
pub mod sections;
pub mod state;

#[cfg(feature = "async")]
pub mod async_api;

// Re-exports
pub use digest::{parse_date, run_digest, write_html, write_markdown, DigestOptions, DigestOutcome};
pub use error::{Error, Result};
pub use inline::{process_inline, InlineMode};
pub use model::{DocumentFormat, Paper, RenderedDocument, ScoredPaper};
pub use normalize::normalize_unicode;
pub use reformat::reformat_flat_content;
pub use render::{render_document, render_html, render_markdown, RenderOptions};
pub use scoring::{filter_min_score, score_paper, score_text, sort_by_score};
pub use sections::{split_q_sections, QSectionMap};
pub use state::{FileState, StateStore};

use std::path::Path;

/// Loads a JSON array of scored papers from a file.
///
/// # Example
///
/// ```no_run
/// let papers = paper_radar::load_papers("papers.json")?;
/// println!("Papers: {}", papers.len());
/// # Ok::<(), paper_radar::Error>(())
/// ```
pub fn load_papers(path: impl AsRef<Path>) -> Result<Vec<ScoredPaper>> {
    let data = std::fs::read_to_string(path)?;
    papers_from_json(&data)
}

/// Parses a JSON array of scored papers.
///
/// Every record needs a non-empty `id`.
pub fn papers_from_json(json: &str) -> Result<Vec<ScoredPaper>> {
    let papers: Vec<ScoredPaper> = serde_json::from_str(json)?;

    if let Some(index) = papers.iter().position(|p| p.paper.id.trim().is_empty()) {
        return Err(Error::InvalidData(format!(
            "paper at index {} has an empty id",
            index
        )));
    }

    Ok(papers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 26).unwrap()
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_title("Weekly Radar")
            .with_lang("en")
            .without_takeaway()
            .sequential();

        assert_eq!(options.title, "Weekly Radar");
        assert_eq!(options.html_lang, "en");
        assert!(!options.include_takeaway);
        assert!(options.reformat_flat_content);
        assert!(!options.parallel);
    }

    #[test]
    fn test_empty_digest_exact_output() {
        let markdown = render_markdown(date(), &[], &RenderOptions::default());
        assert_eq!(
            markdown,
            "# Paper Radar Digest 2026-02-26\n\nNo new papers matched the configured keywords.\n"
        );
    }

    #[test]
    fn test_end_to_end_ranked_plain_summaries() {
        let mut papers = vec![
            ScoredPaper::new(Paper::new("b", "Second").with_summary("Plain text."), 8),
            ScoredPaper::new(Paper::new("a", "First").with_summary("Plain text."), 10),
        ];
        sort_by_score(&mut papers);

        let markdown = render_markdown(date(), &papers, &RenderOptions::default());
        assert_eq!(markdown.matches("\n## ").count(), 2);
        assert!(markdown.find("## 1. First").unwrap() < markdown.find("## 2. Second").unwrap());
        assert!(!markdown.contains("### Q"));
        assert_eq!(markdown.matches("Plain text.").count(), 2);

        let html = render_html(date(), &papers, &RenderOptions::default());
        assert!(html.contains("<p>Plain text.</p>"));
        assert!(!html.contains("class='qa'"));
    }

    #[test]
    fn test_html_is_balanced_for_mixed_summary() {
        let summary = "Intro **bold** line.\n\n### Q1\n- a\n- b\n| H1 | H2 |\n|---|---|\n| v1 | v2 |\n### Notes\nclosing words";
        let papers = vec![ScoredPaper::new(Paper::new("x", "X").with_summary(summary), 1)];
        let html = render_html(date(), &papers, &RenderOptions::default());

        for tag in ["p", "ul", "li", "table", "tr", "th", "td", "article", "div", "h3"] {
            let open = html.matches(&format!("<{}>", tag)).count()
                + html.matches(&format!("<{} ", tag)).count();
            let close = html.matches(&format!("</{}>", tag)).count();
            assert_eq!(open, close, "unbalanced <{}> in {}", tag, html);
        }
    }

    #[test]
    fn test_papers_from_json() {
        let json = r#"[
            {"paper": {"id": "a", "title": "A", "summary": "Q1: x"}, "score": 3, "topics": ["rag"]},
            {"paper": {"id": "b", "title": "B"}, "score": 1, "topics": null}
        ]"#;
        let papers = papers_from_json(json).unwrap();
        assert_eq!(papers.len(), 2);
        assert_eq!(papers[0].topics, vec!["rag"]);

        let err = papers_from_json(r#"[{"paper": {"id": " ", "title": "T"}, "score": 1}]"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));

        assert!(matches!(papers_from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_load_papers_missing_file() {
        let err = load_papers("/nonexistent/papers.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
