//! Digest files on disk and the digest cycle over the state store.

use crate::error::{Error, Result};
use crate::model::{DocumentFormat, ScoredPaper};
use crate::render::{render_document, RenderOptions};
use crate::scoring::{sort_by_score, take_top};
use crate::state::{StateStore, DEFAULT_STATE_PATH};
use chrono::NaiveDate;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default directory digests are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Parses a `YYYY-MM-DD` digest date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|err| {
        tracing::warn!(input, error = %err, "rejected digest date");
        Error::InvalidDate(input.to_string())
    })
}

/// Renders the Markdown digest and writes it to `<dir>/<YYYY-MM-DD>.md`.
pub fn write_markdown(
    dir: impl AsRef<Path>,
    date: NaiveDate,
    papers: &[ScoredPaper],
    options: &RenderOptions,
) -> Result<PathBuf> {
    render_document(DocumentFormat::Markdown, date, papers, options).write_to(dir)
}

/// Renders the HTML digest and writes it to `<dir>/<YYYY-MM-DD>.html`.
pub fn write_html(
    dir: impl AsRef<Path>,
    date: NaiveDate,
    papers: &[ScoredPaper],
    options: &RenderOptions,
) -> Result<PathBuf> {
    render_document(DocumentFormat::Html, date, papers, options).write_to(dir)
}

/// Options for one digest cycle.
#[derive(Debug, Clone)]
pub struct DigestOptions {
    /// State file holding the pending queue.
    pub state_path: PathBuf,

    /// Directory the digest files go to.
    pub output_dir: PathBuf,

    /// Digest date, used in the title and the file names.
    /// Default: today (local time)
    pub date: NaiveDate,

    /// Maximum number of papers per digest (0 = all pending).
    pub top_n: usize,

    /// Whether to write the HTML digest next to the Markdown one.
    pub html: bool,

    /// Rendering options for both formats.
    pub render: RenderOptions,
}

impl Default for DigestOptions {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            date: chrono::Local::now().date_naive(),
            top_n: 0,
            html: false,
            render: RenderOptions::default(),
        }
    }
}

impl DigestOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the state file path.
    pub fn with_state_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_path = path.into();
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the digest date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Limits the digest to the `n` best papers (0 = all).
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Also writes the HTML digest.
    pub fn with_html(mut self) -> Self {
        self.html = true;
        self
    }

    /// Sets the rendering options.
    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }
}

/// Result of a digest cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestOutcome {
    pub markdown_path: PathBuf,
    pub html_path: Option<PathBuf>,
    /// Number of papers in the digest.
    pub count: usize,
}

impl fmt::Display for DigestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.html_path {
            Some(html) => write!(
                f,
                "{} (HTML: {})",
                self.markdown_path.display(),
                html.display()
            ),
            None => write!(f, "{}", self.markdown_path.display()),
        }
    }
}

/// Runs one digest cycle.
///
/// Pending papers are ranked with [`sort_by_score`], the best `top_n` are
/// rendered, and the rest stay pending in ranked order. The state file is
/// only rewritten after every digest file was written.
pub fn run_digest(options: &DigestOptions) -> Result<DigestOutcome> {
    let store = StateStore::new(&options.state_path);
    let mut state = store.load()?;

    let mut pending = std::mem::take(&mut state.pending);
    sort_by_score(&mut pending);
    let (selected, remaining) = take_top(pending, options.top_n);

    let markdown_path = write_markdown(&options.output_dir, options.date, &selected, &options.render)?;
    let html_path = if options.html {
        Some(write_html(
            &options.output_dir,
            options.date,
            &selected,
            &options.render,
        )?)
    } else {
        None
    };

    state.pending = remaining;
    store.save(&state)?;

    tracing::info!(
        date = %options.date,
        papers = selected.len(),
        pending = state.pending.len(),
        markdown = %markdown_path.display(),
        html = html_path.is_some(),
        "digest written"
    );

    Ok(DigestOutcome {
        markdown_path,
        html_path,
        count: selected.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paper;
    use crate::state::FileState;
    use std::fs;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 26).unwrap()
    }

    fn scored(id: &str, title: &str, score: u32, topic: &str) -> ScoredPaper {
        ScoredPaper::new(Paper::new(id, title).with_summary("s"), score).with_topic(topic)
    }

    fn seed(dir: &TempDir, pending: Vec<ScoredPaper>) -> PathBuf {
        let state_path = dir.path().join("state.json");
        let mut state = FileState::default();
        for paper in &pending {
            state.seen_ids.insert(paper.paper.id.clone(), true);
        }
        state.pending = pending;
        StateStore::new(&state_path).save(&state).unwrap();
        state_path
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2026-02-26").unwrap(), date());
        assert_eq!(parse_date(" 2026-02-26 ").unwrap(), date());

        let err = parse_date("26/02/2026").unwrap_err();
        assert!(matches!(err, Error::InvalidDate(ref s) if s == "26/02/2026"));
        assert!(parse_date("2026-02-30").is_err());
    }

    #[test]
    fn test_top_n_leaves_remaining_pending() {
        let dir = TempDir::new().unwrap();
        let state_path = seed(
            &dir,
            vec![
                scored("c", "C", 6, "t2"),
                scored("a", "A", 10, "t1"),
                scored("b", "B", 8, "t1"),
            ],
        );
        let out_dir = dir.path().join("out");

        let options = DigestOptions::new()
            .with_state_path(&state_path)
            .with_output_dir(&out_dir)
            .with_date(date())
            .with_top_n(2);
        let outcome = run_digest(&options).unwrap();

        assert_eq!(outcome.count, 2);
        assert_eq!(outcome.markdown_path, out_dir.join("2026-02-26.md"));
        assert!(outcome.html_path.is_none());

        let content = fs::read_to_string(&outcome.markdown_path).unwrap();
        assert!(content.contains("## 1. A"), "{}", content);
        assert!(content.contains("## 2. B"), "{}", content);
        assert!(!content.contains(". C\n"), "C must wait for the next digest");

        let after = StateStore::new(&state_path).load().unwrap();
        assert_eq!(after.pending.len(), 1);
        assert_eq!(after.pending[0].paper.id, "c");
        assert_eq!(after.seen_ids.len(), 3, "seen ids are kept");
    }

    #[test]
    fn test_html_written_on_request() {
        let dir = TempDir::new().unwrap();
        let state_path = seed(&dir, vec![scored("a", "A", 3, "t")]);
        let out_dir = dir.path().join("out");

        let options = DigestOptions::new()
            .with_state_path(&state_path)
            .with_output_dir(&out_dir)
            .with_date(date())
            .with_html();
        let outcome = run_digest(&options).unwrap();

        let html_path = outcome.html_path.clone().unwrap();
        assert_eq!(html_path, out_dir.join("2026-02-26.html"));
        let html = fs::read_to_string(&html_path).unwrap();
        assert!(html.contains("<article class='paper' id='paper1'>"));
        assert!(outcome.to_string().contains("(HTML: "));

        let after = StateStore::new(&state_path).load().unwrap();
        assert!(after.pending.is_empty());
    }

    #[test]
    fn test_empty_state_writes_no_matches_digest() {
        let dir = TempDir::new().unwrap();
        let options = DigestOptions::new()
            .with_state_path(dir.path().join("missing").join("state.json"))
            .with_output_dir(dir.path().join("out"))
            .with_date(date());

        let outcome = run_digest(&options).unwrap();
        assert_eq!(outcome.count, 0);
        assert_eq!(
            fs::read_to_string(&outcome.markdown_path).unwrap(),
            "# Paper Radar Digest 2026-02-26\n\nNo new papers matched the configured keywords.\n"
        );
        assert!(options.state_path.exists(), "state file is created");
    }

    #[test]
    fn test_write_markdown_and_html_helpers() {
        let dir = TempDir::new().unwrap();
        let papers = vec![scored("a", "A", 1, "t")];
        let options = RenderOptions::default();

        let md = write_markdown(dir.path(), date(), &papers, &options).unwrap();
        let html = write_html(dir.path(), date(), &papers, &options).unwrap();
        assert_eq!(md.file_name().unwrap(), "2026-02-26.md");
        assert_eq!(html.file_name().unwrap(), "2026-02-26.html");
        assert!(fs::read_to_string(md).unwrap().starts_with("# Paper Radar Digest 2026-02-26"));
    }
}
