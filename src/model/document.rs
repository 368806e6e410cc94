//! Rendered digest documents.

use crate::error::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Output format of a rendered digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Markdown,
    Html,
}

impl DocumentFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Markdown => "md",
            DocumentFormat::Html => "html",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Markdown => write!(f, "Markdown"),
            DocumentFormat::Html => write!(f, "HTML"),
        }
    }
}

/// A finished digest plus the file name it is stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub format: DocumentFormat,
    /// `<YYYY-MM-DD>.md` or `<YYYY-MM-DD>.html`.
    pub file_name: String,
    pub content: String,
}

impl RenderedDocument {
    /// Creates a document named after the digest date.
    pub fn new(format: DocumentFormat, date: NaiveDate, content: String) -> Self {
        Self {
            format,
            file_name: format!("{}.{}", date.format("%Y-%m-%d"), format.extension()),
            content,
        }
    }

    /// Writes the document into `dir`, creating the directory if needed.
    ///
    /// Returns the full path of the written file.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.content)?;
        Ok(path)
    }
}
