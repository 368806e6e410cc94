//! Paper records and their scored form.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A paper as produced by the acquisition stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// Source-unique identifier (arXiv id, papers.cool key, ...).
    pub id: String,
    /// Plain-text title.
    pub title: String,
    /// Free-text summary; may carry embedded markdown and `Q<n>:` markers.
    #[serde(default)]
    pub summary: String,
    /// Canonical URL.
    #[serde(default)]
    pub url: String,
    /// Publication time, `None` when absent or zero.
    #[serde(
        default,
        deserialize_with = "deserialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub published_at: Option<DateTime<Utc>>,
    /// Last update time, `None` when absent or zero.
    #[serde(
        default,
        deserialize_with = "deserialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Paper {
    /// Creates a paper with only an id and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Sets the summary text.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Sets the canonical URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the publication time.
    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    /// Last path segment of the URL, used as the link label.
    ///
    /// Returns the whole URL when it has no `/`.
    pub fn url_label(&self) -> &str {
        match self.url.rfind('/') {
            Some(idx) => &self.url[idx + 1..],
            None => &self.url,
        }
    }
}

/// A paper with its relevance score and matching topics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredPaper {
    pub paper: Paper,
    /// Sum of keyword occurrence counts across all matching topics.
    pub score: u32,
    /// Matching topic names in first-match order, without duplicates.
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub topics: Vec<String>,
}

impl ScoredPaper {
    /// Creates a scored paper with no topics.
    pub fn new(paper: Paper, score: u32) -> Self {
        Self {
            paper,
            score,
            topics: Vec::new(),
        }
    }

    /// Adds a topic unless it is already present.
    pub fn add_topic(&mut self, topic: impl Into<String>) {
        let topic = topic.into();
        if !self.topics.contains(&topic) {
            self.topics.push(topic);
        }
    }

    /// Builder form of [`ScoredPaper::add_topic`].
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.add_topic(topic);
        self
    }
}

/// Accepts missing, `null`, or zero timestamps (`0001-01-01T00:00:00Z`) as `None`.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<DateTime<Utc>>::deserialize(deserializer)?;
    Ok(value.filter(|ts| ts.year() > 1))
}

fn deserialize_nullable_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
