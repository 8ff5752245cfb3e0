//! Error taxonomy for the reading engine.
//!
//! None of these are fatal to the host; the caller decides what the reader sees.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReaderError {
    /// Tokenizing the text produced zero words.
    #[error("no readable words in the supplied text")]
    EmptyInput,

    /// The text source could not produce any text.
    #[error("text source unavailable: {message}")]
    SourceUnavailable { message: String },

    /// Saving or loading a reading checkpoint failed.
    #[error("progress store failure: {message}")]
    PersistenceFailure { message: String },

    /// A configuration change was rejected; the previous value is kept.
    #[error("invalid value for {key}: {message}")]
    InvalidConfiguration { key: &'static str, message: String },
}

impl ReaderError {
    pub(crate) fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            key,
            message: message.into(),
        }
    }
}

pub type Result<T> = core::result::Result<T, ReaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_unavailable_display() {
        let error = ReaderError::SourceUnavailable {
            message: "no such file".to_string(),
        };
        assert_eq!(error.to_string(), "text source unavailable: no such file");
    }

    #[test]
    fn invalid_configuration_names_the_key() {
        let error = ReaderError::invalid("wpm", "must be greater than zero");
        assert_eq!(
            error.to_string(),
            "invalid value for wpm: must be greater than zero"
        );
    }
}
