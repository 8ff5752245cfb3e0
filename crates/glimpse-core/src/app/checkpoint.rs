impl<T, P> PlaybackController<T, P>
where
    T: Ticker,
    P: ProgressStore,
{
    /// Persist the cursor now, reporting store failures to the caller.
    /// Returns `Ok(false)` when the cursor has not moved since the last save.
    pub fn checkpoint_now(&mut self) -> Result<bool> {
        if self.sequence.is_empty() || self.current_index == self.last_notified_index {
            return Ok(false);
        }

        let checkpoint = Checkpoint {
            session_key: self.session_key.clone(),
            word_index: self.current_index,
            total_words: self.sequence.len(),
        };
        self.store
            .save(&checkpoint)
            .map_err(|err| ReaderError::PersistenceFailure {
                message: err.to_string(),
            })?;

        self.last_notified_index = self.current_index;
        Ok(true)
    }

    /// End of session: stop the timer and flush the checkpoint.
    pub fn teardown(&mut self) {
        if self.phase == Phase::Playing {
            self.ticker.cancel();
            self.phase = Phase::Ready;
        }
        self.notify_progress(CheckpointReason::Teardown);
    }

    fn notify_progress(&mut self, reason: CheckpointReason) {
        match self.checkpoint_now() {
            Ok(true) => debug!(
                "checkpoint ({}) `{}` at word {}",
                reason.as_str(),
                self.session_key,
                self.current_index
            ),
            Ok(false) => {}
            Err(err) => warn!("checkpoint ({}) failed: {}", reason.as_str(), err),
        }
    }
}

impl<T, P> Drop for PlaybackController<T, P>
where
    T: Ticker,
    P: ProgressStore,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
