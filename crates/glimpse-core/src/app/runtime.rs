impl<T, P> PlaybackController<T, P>
where
    T: Ticker,
    P: ProgressStore,
{
    /// Timer callback: show the word under the cursor, then advance.
    ///
    /// The returned frame is for the pre-advance index. Reaching the end
    /// cancels the timer and finishes the session.
    pub fn tick(&mut self) -> Option<DisplayFrame<'_>> {
        let len = self.sequence.len();
        if self.phase != Phase::Playing || self.current_index >= len {
            return None;
        }

        let shown = self.current_index;
        self.displayed_index = Some(shown);
        self.current_index += 1;
        self.ticks_since_checkpoint = self.ticks_since_checkpoint.saturating_add(1);

        if self.current_index == len {
            self.ticker.cancel();
            self.phase = Phase::Finished;
            debug!("session `{}` finished", self.session_key);
            self.notify_progress(CheckpointReason::Finished);
        } else if self.ticks_since_checkpoint >= self.config.checkpoint_every {
            self.ticks_since_checkpoint = 0;
            self.notify_progress(CheckpointReason::Periodic);
        }

        self.frame_at(shown)
    }

    /// Drive the controller from a poll loop: ticks once when the ticker is due.
    pub fn poll(&mut self, now_ms: u64) -> Option<DisplayFrame<'_>> {
        if self.phase != Phase::Playing || !self.ticker.take_due(now_ms) {
            return None;
        }
        self.tick()
    }

    pub fn apply_command(&mut self, command: Command) -> Result<()> {
        match command {
            Command::TogglePlay => self.toggle_play()?,
            Command::Pause => self.pause(),
            Command::SeekBackward(words) => {
                self.seek(-(words.min(isize::MAX as usize) as isize));
            }
            Command::SeekForward(words) => {
                self.seek(words.min(isize::MAX as usize) as isize);
            }
            Command::Restart => {
                self.restart();
            }
            Command::Faster => {
                self.adjust_wpm(true);
            }
            Command::Slower => {
                self.adjust_wpm(false);
            }
        }
        Ok(())
    }

    /// Apply every pending command from `input`. Returns how many were applied.
    pub fn drain_input<I>(&mut self, input: &mut I) -> usize
    where
        I: InputProvider,
        I::Error: core::fmt::Debug,
    {
        let mut applied = 0usize;
        loop {
            match input.poll_event() {
                Ok(Some(command)) => {
                    if let Err(err) = self.apply_command(command) {
                        debug!("command {:?} ignored: {}", command, err);
                    }
                    applied += 1;
                }
                Ok(None) => break,
                Err(err) => {
                    warn!("input provider failed: {:?}", err);
                    break;
                }
            }
        }
        applied
    }

    pub fn key_map(&self) -> KeyMap {
        self.key_map
    }
}
