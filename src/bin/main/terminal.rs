//! Single-line terminal renderer.

use std::io::{self, Write};

use glimpse_core::DisplayFrame;
use owo_colors::OwoColorize;

/// Column where the focal letter is pinned so the eye never moves.
const FOCAL_COLUMN: usize = 12;

pub struct Terminal {
    color: bool,
}

impl Terminal {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn word_line(&self, frame: &DisplayFrame<'_>) -> String {
        let (before, focal, after) = frame.split_focal();
        let pad = FOCAL_COLUMN.saturating_sub(before.chars().count());

        let focal = if self.color {
            let c = frame.style.focus_color;
            focal.truecolor(c.r, c.g, c.b).bold().to_string()
        } else {
            format!("[{focal}]")
        };

        format!("{:pad$}{before}{focal}{after}", "")
    }

    pub fn draw(&self, frame: Option<&DisplayFrame<'_>>, status: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        let line = frame.map(|f| self.word_line(f)).unwrap_or_default();
        write!(out, "\r\x1b[2K{line:<40}  {}", status.dimmed())?;
        out.flush()
    }

    pub fn message(&self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "\r\x1b[2K{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimpse_core::{
        IntervalTicker, PlaybackController, ReaderConfig, settings::MemoryProgressStore, tokenize,
    };

    #[test]
    fn pins_focal_letter_to_column() {
        let mut controller = PlaybackController::new(
            IntervalTicker::new(),
            MemoryProgressStore::new(),
            ReaderConfig::default(),
        )
        .unwrap();
        controller.load("t", tokenize("a reading"), 0);
        let term = Terminal::new(false);

        let first = term.word_line(&controller.frame().unwrap());
        assert_eq!(first, format!("{}[a]", " ".repeat(FOCAL_COLUMN)));

        controller.seek(1);
        let second = term.word_line(&controller.frame().unwrap());
        assert_eq!(second, format!("{}re[a]ding", " ".repeat(FOCAL_COLUMN - 2)));
    }
}
