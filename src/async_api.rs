//! Async API for writing digests without blocking the runtime.
//!
//! Enable the `async` feature to use these APIs:
//!
//! ```toml
//! [dependencies]
//! paper-radar = { version = "0.1", features = ["async"] }
//! ```

use crate::digest::{DigestOptions, DigestOutcome};
use crate::error::{Error, Result};
use crate::model::ScoredPaper;
use crate::render::RenderOptions;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Runs a blocking closure on the tokio blocking pool.
async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))?
}

/// Asynchronously renders and writes the Markdown digest.
///
/// # Example
///
/// ```no_run
/// # async fn example(papers: Vec<paper_radar::ScoredPaper>) -> paper_radar::Result<()> {
/// let date = paper_radar::parse_date("2026-02-26")?;
/// let options = paper_radar::RenderOptions::default();
/// let path = paper_radar::async_api::write_markdown("outputs", date, papers, options).await?;
/// println!("{}", path.display());
/// # Ok(())
/// # }
/// ```
pub async fn write_markdown(
    dir: impl AsRef<Path>,
    date: NaiveDate,
    papers: Vec<ScoredPaper>,
    options: RenderOptions,
) -> Result<PathBuf> {
    let dir = dir.as_ref().to_path_buf();
    blocking(move || crate::digest::write_markdown(dir, date, &papers, &options)).await
}

/// Asynchronously renders and writes the HTML digest.
pub async fn write_html(
    dir: impl AsRef<Path>,
    date: NaiveDate,
    papers: Vec<ScoredPaper>,
    options: RenderOptions,
) -> Result<PathBuf> {
    let dir = dir.as_ref().to_path_buf();
    blocking(move || crate::digest::write_html(dir, date, &papers, &options)).await
}

/// Asynchronously runs one digest cycle.
pub async fn run_digest(options: DigestOptions) -> Result<DigestOutcome> {
    blocking(move || crate::digest::run_digest(&options)).await
}
