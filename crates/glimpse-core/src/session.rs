//! Session bootstrap: text source -> tokenizer -> resumed controller.

use log::{info, warn};

use crate::{
    app::{PlaybackController, ReaderConfig, Ticker},
    content::{TextSource, tokenize},
    error::{ReaderError, Result},
    settings::ProgressStore,
};

/// Load text from `source`, tokenize it and resume from the stored checkpoint.
///
/// A failing source or a text without words creates no session. A failing
/// progress lookup is logged and reading starts at the first word.
pub fn open_session<S, T, P>(
    source: &mut S,
    mut store: P,
    ticker: T,
    session_key: &str,
    config: ReaderConfig,
) -> Result<PlaybackController<T, P>>
where
    S: TextSource,
    T: Ticker,
    P: ProgressStore,
{
    let raw = source
        .load()
        .map_err(|err| ReaderError::SourceUnavailable {
            message: err.to_string(),
        })?;

    let sequence = tokenize(&raw);
    if sequence.is_empty() {
        return Err(ReaderError::EmptyInput);
    }

    let start_index = match store.load(session_key) {
        Ok(Some(index)) => {
            info!("resuming `{}` from word {}", session_key, index + 1);
            index.min(sequence.len() - 1)
        }
        Ok(None) => 0,
        Err(err) => {
            warn!("progress lookup for `{}` failed: {}", session_key, err);
            0
        }
    };

    let mut controller = PlaybackController::new(ticker, store, config)?;
    controller.load(session_key, sequence, start_index);
    Ok(controller)
}
