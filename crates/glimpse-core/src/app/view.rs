impl<T, P> PlaybackController<T, P>
where
    T: Ticker,
    P: ProgressStore,
{
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Index of the next word a tick will show; equals `len()` when finished.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn session_key(&self) -> &str {
        &self.session_key
    }

    pub fn wpm(&self) -> u32 {
        self.config.wpm
    }

    pub fn focus_mode(&self) -> FocusMode {
        self.config.focus_mode
    }

    pub fn style(&self) -> VisualStyle {
        self.config.style
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// The word currently on screen, if any.
    pub fn frame(&self) -> Option<DisplayFrame<'_>> {
        self.frame_at(self.displayed_index?)
    }

    /// `current_index / len`; 1.0 once finished, 0.0 with nothing loaded.
    pub fn progress_fraction(&self) -> f32 {
        let len = self.sequence.len();
        if len == 0 {
            return 0.0;
        }
        self.current_index as f32 / len as f32
    }

    pub fn time_remaining_seconds(&self) -> u32 {
        let remaining = self.sequence.len().saturating_sub(self.current_index);
        time_remaining_seconds(remaining, self.config.wpm)
    }

    pub fn time_remaining_label(&self) -> heapless::String<16> {
        time_label(self.time_remaining_seconds())
    }

    /// `N / total` for the word on screen (`0 / total` before anything is shown).
    pub fn counter_label(&self) -> heapless::String<48> {
        let number = self.displayed_index.map_or(0, |index| index + 1);
        counter_label(number, self.sequence.len())
    }

    fn frame_at(&self, index: usize) -> Option<DisplayFrame<'_>> {
        let word = self.sequence.get(index)?;
        let total = self.sequence.len();

        Some(DisplayFrame {
            word,
            focal_offset: compute_focal_offset(word.text(), self.config.focus_mode),
            progress_fraction: index as f32 / total as f32,
            time_remaining_seconds: time_remaining_seconds(total - index, self.config.wpm),
            total_words: total,
            style: self.config.style,
        })
    }
}
