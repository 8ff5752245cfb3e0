impl<T, P> PlaybackController<T, P>
where
    T: Ticker,
    P: ProgressStore,
{
    pub fn new(ticker: T, store: P, config: ReaderConfig) -> Result<Self> {
        let config = config.validated()?;

        Ok(Self {
            ticker,
            store,
            key_map: KeyMap::new(config.seek_step),
            config,
            session_key: String::new(),
            sequence: Sequence::empty(),
            phase: Phase::Idle,
            current_index: 0,
            displayed_index: None,
            last_notified_index: 0,
            ticks_since_checkpoint: 0,
        })
    }

    /// Replace the loaded text, resuming at `start_index` (clamped to the text).
    ///
    /// The previous session is checkpointed first. An empty sequence leaves the
    /// controller in [`Phase::Finished`] with nothing to play.
    pub fn load(&mut self, session_key: impl Into<String>, sequence: Sequence, start_index: usize) {
        self.teardown();

        let len = sequence.len();
        self.session_key = session_key.into();
        self.sequence = sequence;
        self.current_index = start_index.min(len);
        self.last_notified_index = self.current_index;
        self.ticks_since_checkpoint = 0;

        if self.current_index < len {
            self.phase = Phase::Ready;
            self.displayed_index = Some(self.current_index);
        } else {
            self.phase = Phase::Finished;
            self.displayed_index = None;
        }

        debug!(
            "session `{}` loaded: {} words, cursor {}",
            self.session_key, len, self.current_index
        );
    }

    /// Start the timer. Replaying a finished text starts over from the first word.
    pub fn play(&mut self) -> Result<()> {
        if self.sequence.is_empty() {
            return Err(ReaderError::EmptyInput);
        }
        if self.phase == Phase::Playing {
            return Ok(());
        }

        if self.current_index >= self.sequence.len() {
            self.current_index = 0;
            self.displayed_index = Some(0);
        }

        self.ticker.arm(self.config.period_ms());
        self.phase = Phase::Playing;
        debug!("play at word {} ({} wpm)", self.current_index, self.config.wpm);
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Playing {
            self.ticker.cancel();
            self.phase = Phase::Ready;
            debug!("paused at word {}", self.current_index);
        }
        self.notify_progress(CheckpointReason::Pause);
    }

    pub fn toggle_play(&mut self) -> Result<()> {
        if self.phase == Phase::Playing {
            self.pause();
            Ok(())
        } else {
            self.play()
        }
    }

    /// Move the cursor by `delta` words, clamped to the first and last word.
    ///
    /// Play state is kept; a finished controller becomes ready again.
    pub fn seek(&mut self, delta: isize) -> Option<DisplayFrame<'_>> {
        let len = self.sequence.len();
        if len == 0 {
            self.current_index = 0;
            return None;
        }

        let target = if delta < 0 {
            self.current_index.saturating_sub(delta.unsigned_abs())
        } else {
            self.current_index.saturating_add(delta as usize)
        };
        self.current_index = target.min(len - 1);
        self.displayed_index = Some(self.current_index);
        if self.phase == Phase::Finished {
            self.phase = Phase::Ready;
        }

        self.notify_progress(CheckpointReason::Seek);
        self.frame()
    }

    pub fn restart(&mut self) -> Option<DisplayFrame<'_>> {
        if self.phase == Phase::Playing {
            self.ticker.cancel();
        }

        self.current_index = 0;
        self.ticks_since_checkpoint = 0;
        if self.sequence.is_empty() {
            self.displayed_index = None;
            self.phase = if self.phase == Phase::Idle {
                Phase::Idle
            } else {
                Phase::Finished
            };
            return None;
        }

        self.displayed_index = Some(0);
        self.phase = Phase::Ready;
        self.notify_progress(CheckpointReason::Restart);
        self.frame()
    }

    /// Change the reading rate. While playing, the timer is re-armed once so the
    /// new period applies from the next tick.
    pub fn set_wpm(&mut self, wpm: u32) -> Result<()> {
        check_wpm(wpm, self.config.min_wpm, self.config.max_wpm)?;
        if wpm == self.config.wpm {
            return Ok(());
        }

        self.config.wpm = wpm;
        self.reschedule();
        Ok(())
    }

    /// Step the rate by a fixed increment within the configured bounds.
    /// Returns whether the rate changed.
    pub fn adjust_wpm(&mut self, faster: bool) -> bool {
        let next = if faster {
            self.config
                .wpm
                .saturating_add(WPM_STEP)
                .min(self.config.max_wpm)
        } else {
            self.config
                .wpm
                .saturating_sub(WPM_STEP)
                .max(self.config.min_wpm)
        };

        if next == self.config.wpm {
            return false;
        }
        self.config.wpm = next;
        self.reschedule();
        true
    }

    pub fn set_focus_mode(&mut self, mode: FocusMode) -> Option<DisplayFrame<'_>> {
        self.config.focus_mode = mode;
        self.frame()
    }

    pub fn set_focus_color(&mut self, color: FocusColor) -> Option<DisplayFrame<'_>> {
        self.config.style.focus_color = color;
        self.frame()
    }

    pub fn set_font_size(&mut self, size: u16) -> Result<()> {
        check_font_size(size)?;
        self.config.style.font_size = size;
        Ok(())
    }

    fn reschedule(&mut self) {
        if self.phase == Phase::Playing {
            self.ticker.cancel();
            self.ticker.arm(self.config.period_ms());
            debug!("timer re-armed at {} wpm", self.config.wpm);
        }
    }
}
