//! JSON file backed reading-position store.

use std::{
    collections::BTreeMap,
    fmt, fs, io,
    path::{Path, PathBuf},
};

use glimpse_core::{Checkpoint, ProgressStore};
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProgressFileError {
    #[error("progress file I/O: {0}")]
    Io(#[from] io::Error),

    #[error("progress file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
struct Entry {
    word_index: usize,
    total_words: usize,
}

/// One library entry: a stored text and how far it has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSession {
    pub session_key: String,
    pub word_index: usize,
    pub total_words: usize,
}

impl SavedSession {
    /// Share of the text shown so far, counting the word under the cursor.
    pub fn percent_done(&self) -> u32 {
        if self.total_words == 0 {
            return 0;
        }
        let shown = (self.word_index + 1).min(self.total_words) as f64;
        (shown / self.total_words as f64 * 100.0).round() as u32
    }

    /// Reading went past the first word, so it can be continued.
    pub fn is_started(&self) -> bool {
        self.word_index > 0
    }
}

impl fmt::Display for SavedSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {} / {}  {}%  {}",
            self.session_key,
            self.word_index + 1,
            self.total_words,
            self.percent_done(),
            if self.is_started() { "continue" } else { "start" }
        )
    }
}

/// Every session's checkpoint in one JSON object keyed by session key.
#[derive(Debug)]
pub struct JsonProgressStore {
    path: PathBuf,
    entries: BTreeMap<String, Entry>,
}

impl JsonProgressStore {
    /// Open the store, starting empty when the file is missing or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(ProgressFileError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                BTreeMap::new()
            }
            Err(err) => {
                warn!("ignoring progress file {}: {}", path.display(), err);
                BTreeMap::new()
            }
        };

        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored sessions in key order.
    pub fn sessions(&self) -> impl Iterator<Item = SavedSession> + '_ {
        self.entries.iter().map(|(key, entry)| SavedSession {
            session_key: key.clone(),
            word_index: entry.word_index,
            total_words: entry.total_words,
        })
    }

    /// Remove one session. `Ok(false)` when the key is unknown.
    pub fn forget(&mut self, session_key: &str) -> Result<bool, ProgressFileError> {
        let Some(entry) = self.entries.remove(session_key) else {
            return Ok(false);
        };

        if let Err(err) = self.write() {
            self.entries.insert(session_key.to_string(), entry);
            return Err(err);
        }
        Ok(true)
    }

    fn write(&self) -> Result<(), ProgressFileError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, Entry>, ProgressFileError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

impl ProgressStore for JsonProgressStore {
    type Error = ProgressFileError;

    fn load(&mut self, session_key: &str) -> Result<Option<usize>, Self::Error> {
        Ok(self.entries.get(session_key).map(|entry| entry.word_index))
    }

    fn save(&mut self, checkpoint: &Checkpoint) -> Result<(), Self::Error> {
        let previous = self.entries.insert(
            checkpoint.session_key.clone(),
            Entry {
                word_index: checkpoint.word_index,
                total_words: checkpoint.total_words,
            },
        );

        if let Err(err) = self.write() {
            match previous {
                Some(entry) => self.entries.insert(checkpoint.session_key.clone(), entry),
                None => self.entries.remove(&checkpoint.session_key),
            };
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkpoint(key: &str, word_index: usize) -> Checkpoint {
        Checkpoint {
            session_key: key.to_string(),
            word_index,
            total_words: 500,
        }
    }

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("progress.json");

        let mut store = JsonProgressStore::open(&path);
        assert_eq!(store.load("book").unwrap(), None);
        store.save(&checkpoint("book", 120)).unwrap();
        store.save(&checkpoint("other", 7)).unwrap();

        let mut reopened = JsonProgressStore::open(&path);
        assert_eq!(reopened.load("book").unwrap(), Some(120));
        assert_eq!(reopened.load("other").unwrap(), Some(7));
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(&path, "{ not json").unwrap();

        let mut store = JsonProgressStore::open(&path);
        assert_eq!(store.load("book").unwrap(), None);
    }

    #[test]
    fn failed_write_keeps_previous_entry() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes every write fail.
        let path = dir.path().join("progress.json");
        fs::create_dir(&path).unwrap();

        let mut store = JsonProgressStore::open(&path);
        assert!(store.save(&checkpoint("book", 3)).is_err());
        assert_eq!(store.load("book").unwrap(), None);
    }

    #[test]
    fn lists_sessions_in_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonProgressStore::open(dir.path().join("progress.json"));
        store.save(&checkpoint("zeta", 249)).unwrap();
        store.save(&checkpoint("alpha", 0)).unwrap();

        let lines: Vec<String> = store.sessions().map(|s| s.to_string()).collect();
        assert_eq!(
            lines,
            ["alpha  1 / 500  0%  start", "zeta  250 / 500  50%  continue"]
        );
    }

    #[test]
    fn finished_session_is_complete() {
        let done = SavedSession {
            session_key: "book".into(),
            word_index: 499,
            total_words: 500,
        };
        assert_eq!(done.percent_done(), 100);
        assert!(done.is_started());

        let empty = SavedSession {
            session_key: "blank".into(),
            word_index: 0,
            total_words: 0,
        };
        assert_eq!(empty.percent_done(), 0);
    }

    #[test]
    fn forget_removes_one_session_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");

        let mut store = JsonProgressStore::open(&path);
        store.save(&checkpoint("book", 12)).unwrap();
        store.save(&checkpoint("other", 3)).unwrap();

        assert!(store.forget("book").unwrap());
        assert!(!store.forget("book").unwrap());

        let mut reopened = JsonProgressStore::open(&path);
        assert_eq!(reopened.load("book").unwrap(), None);
        assert_eq!(reopened.load("other").unwrap(), Some(3));
    }

    #[test]
    fn failed_forget_keeps_the_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");

        let mut store = JsonProgressStore::open(&path);
        store.save(&checkpoint("book", 12)).unwrap();
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(store.forget("book").is_err());
        assert_eq!(store.load("book").unwrap(), Some(12));
    }
}
