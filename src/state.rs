//! Persistent digest state: ids already seen and the queue of papers awaiting a digest.

use crate::error::Result;
use crate::model::ScoredPaper;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default location of the state file, relative to the working directory.
pub const DEFAULT_STATE_PATH: &str = ".paper-radar/state.json";

/// On-disk state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileState {
    /// Ids of every paper ever queued.
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub seen_ids: BTreeMap<String, bool>,
    /// Papers queued for the next digest.
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub pending: Vec<ScoredPaper>,
}

fn deserialize_nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// JSON file store for [`FileState`].
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(DEFAULT_STATE_PATH)
    }
}

impl StateStore {
    /// Creates a store backed by `path`. Nothing is read until [`StateStore::load`].
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the state; a missing file yields an empty state.
    pub fn load(&self) -> Result<FileState> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no state file, starting empty");
                return Ok(FileState::default());
            }
            Err(err) => return Err(err.into()),
        };

        let state: FileState = serde_json::from_slice(&data)?;

        let untitled = state
            .pending
            .iter()
            .filter(|scored| scored.paper.title.trim().is_empty())
            .count();
        if untitled > 0 {
            tracing::warn!(
                path = %self.path.display(),
                untitled,
                "state file has pending papers without a title"
            );
        }

        Ok(state)
    }

    /// Saves the state atomically: pretty JSON to `<path>.tmp`, then rename.
    pub fn save(&self, state: &FileState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut data = serde_json::to_vec_pretty(state)?;
        data.push(b'\n');

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, &data)?;
        fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(
            path = %self.path.display(),
            pending = state.pending.len(),
            "saved state"
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
