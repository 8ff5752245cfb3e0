//! Core RSVP reading engine: tokenizer, playback controller and focal-point policy.
//!
//! The crate performs no I/O. Text arrives through [`content::TextSource`],
//! checkpoints leave through [`settings::ProgressStore`], and timing is driven
//! through [`app::Ticker`].

pub mod app;
pub mod content;
pub mod error;
pub mod focus;
pub mod input;
pub mod render;
pub mod session;
pub mod settings;
pub mod text_policy;

pub use app::{IntervalTicker, Phase, PlaybackController, ReaderConfig, Ticker};
pub use content::{Sequence, TextSource, WordToken, tokenize};
pub use error::{ReaderError, Result};
pub use focus::{FocusMode, compute_focal_offset};
pub use render::DisplayFrame;
pub use session::open_session;
pub use settings::{Checkpoint, ProgressStore};
