//! Playback state machine for RSVP reading.

use log::{debug, warn};

use crate::{
    content::Sequence,
    error::{ReaderError, Result},
    focus::{FocusMode, compute_focal_offset},
    input::{Command, DEFAULT_SEEK_STEP, InputProvider, KeyMap},
    render::{DisplayFrame, FocusColor, MAX_FONT_SIZE, MIN_FONT_SIZE, VisualStyle},
    settings::{Checkpoint, ProgressStore},
    text_policy::{counter_label, time_label, time_remaining_seconds},
};

mod timer;

pub use timer::{IntervalTicker, Ticker};

const WPM_STEP: u32 = 10;
const DEFAULT_CHECKPOINT_EVERY: u32 = 50;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    pub wpm: u32,
    pub min_wpm: u32,
    pub max_wpm: u32,
    /// Words skipped by one seek key press.
    pub seek_step: usize,
    /// Ticks between periodic progress checkpoints.
    pub checkpoint_every: u32,
    pub focus_mode: FocusMode,
    pub style: VisualStyle,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            wpm: 250,
            min_wpm: 50,
            max_wpm: 1_000,
            seek_step: DEFAULT_SEEK_STEP,
            checkpoint_every: DEFAULT_CHECKPOINT_EVERY,
            focus_mode: FocusMode::Auto,
            style: VisualStyle::default(),
        }
    }
}

impl ReaderConfig {
    /// Normalizes bounds and rejects values playback cannot run with.
    pub fn validated(mut self) -> Result<Self> {
        if self.max_wpm < self.min_wpm {
            core::mem::swap(&mut self.max_wpm, &mut self.min_wpm);
        }
        if self.min_wpm == 0 {
            return Err(ReaderError::invalid("min_wpm", "must be greater than zero"));
        }
        check_wpm(self.wpm, self.min_wpm, self.max_wpm)?;
        check_font_size(self.style.font_size)?;
        if self.checkpoint_every == 0 {
            return Err(ReaderError::invalid(
                "checkpoint_every",
                "must be at least one tick",
            ));
        }
        if self.seek_step == 0 {
            return Err(ReaderError::invalid("seek_step", "must be at least one word"));
        }
        Ok(self)
    }

    /// Timer period for one word.
    pub fn period_ms(&self) -> u32 {
        60_000 / self.wpm.max(1)
    }
}

/// Controller lifecycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// No text loaded yet.
    Idle,
    /// Text loaded, timer not running.
    Ready,
    /// Timer armed, words advancing.
    Playing,
    /// Cursor at the end (or nothing to read). Left by `play`, `seek` or `restart`.
    Finished,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CheckpointReason {
    Periodic,
    Pause,
    Seek,
    Restart,
    Finished,
    Teardown,
}

impl CheckpointReason {
    fn as_str(self) -> &'static str {
        match self {
            Self::Periodic => "periodic",
            Self::Pause => "pause",
            Self::Seek => "seek",
            Self::Restart => "restart",
            Self::Finished => "finished",
            Self::Teardown => "teardown",
        }
    }
}

/// Owns one reading session: the word sequence, the cursor and the timer.
pub struct PlaybackController<T, P>
where
    T: Ticker,
    P: ProgressStore,
{
    ticker: T,
    store: P,
    config: ReaderConfig,
    key_map: KeyMap,
    session_key: String,
    sequence: Sequence,
    phase: Phase,
    current_index: usize,
    displayed_index: Option<usize>,
    last_notified_index: usize,
    ticks_since_checkpoint: u32,
}

include!("transport.rs");
include!("runtime.rs");
include!("view.rs");
include!("checkpoint.rs");

fn check_wpm(wpm: u32, min_wpm: u32, max_wpm: u32) -> Result<()> {
    if wpm == 0 {
        return Err(ReaderError::invalid("wpm", "must be greater than zero"));
    }
    if !(min_wpm..=max_wpm).contains(&wpm) {
        return Err(ReaderError::invalid(
            "wpm",
            format!("{wpm} is outside {min_wpm}..={max_wpm}"),
        ));
    }
    Ok(())
}

fn check_font_size(size: u16) -> Result<()> {
    if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
        return Err(ReaderError::invalid(
            "font_size",
            format!("{size} is outside {MIN_FONT_SIZE}..={MAX_FONT_SIZE}"),
        ));
    }
    Ok(())
}
