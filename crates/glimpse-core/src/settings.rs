//! Reading checkpoint persistence abstraction.

use std::collections::HashMap;

/// Reading position persisted for one session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Checkpoint {
    pub session_key: String,
    pub word_index: usize,
    pub total_words: usize,
}

/// Abstract checkpoint persistence backend.
///
/// Failures are reported through `Self::Error` and never stop playback.
pub trait ProgressStore {
    type Error: core::fmt::Debug + core::fmt::Display;

    fn load(&mut self, session_key: &str) -> Result<Option<usize>, Self::Error>;
    fn save(&mut self, checkpoint: &Checkpoint) -> Result<(), Self::Error>;
}

/// Volatile store; progress is lost with the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryProgressStore {
    entries: HashMap<String, Checkpoint>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, session_key: &str) -> Option<&Checkpoint> {
        self.entries.get(session_key)
    }
}

impl ProgressStore for MemoryProgressStore {
    type Error = core::convert::Infallible;

    fn load(&mut self, session_key: &str) -> Result<Option<usize>, Self::Error> {
        Ok(self.entries.get(session_key).map(|c| c.word_index))
    }

    fn save(&mut self, checkpoint: &Checkpoint) -> Result<(), Self::Error> {
        self.entries
            .insert(checkpoint.session_key.clone(), checkpoint.clone());
        Ok(())
    }
}

impl<S: ProgressStore + ?Sized> ProgressStore for &mut S {
    type Error = S::Error;

    fn load(&mut self, session_key: &str) -> Result<Option<usize>, Self::Error> {
        (**self).load(session_key)
    }

    fn save(&mut self, checkpoint: &Checkpoint) -> Result<(), Self::Error> {
        (**self).save(checkpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip_per_key() {
        let mut store = MemoryProgressStore::new();
        assert_eq!(store.load("a").unwrap(), None);

        store
            .save(&Checkpoint {
                session_key: "a".into(),
                word_index: 42,
                total_words: 100,
            })
            .unwrap();

        assert_eq!(store.load("a").unwrap(), Some(42));
        assert_eq!(store.load("b").unwrap(), None);
    }
}
