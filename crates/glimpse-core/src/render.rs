//! Per-word view data and cosmetic styling consumed by the front-end renderer.

use core::{fmt, str::FromStr};

use crate::{content::WordToken, error::ReaderError};

pub const MIN_FONT_SIZE: u16 = 12;
pub const MAX_FONT_SIZE: u16 = 120;

/// Colour of the focal letter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FocusColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl FocusColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for FocusColor {
    fn default() -> Self {
        Self::new(0xdc, 0x26, 0x26)
    }
}

impl FromStr for FocusColor {
    type Err = ReaderError;

    /// Parses `#rrggbb` (the leading `#` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let bad = || ReaderError::invalid("focus_color", format!("expected #rrggbb, got `{s}`"));
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(bad());
        }

        let channel = |range: core::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| bad())
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for FocusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VisualStyle {
    pub focus_color: FocusColor,
    /// Pixels; only meaningful to front-ends that can size text.
    pub font_size: u16,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self {
            focus_color: FocusColor::default(),
            font_size: 48,
        }
    }
}

/// Everything a renderer needs to draw one word.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayFrame<'a> {
    pub word: &'a WordToken,
    /// Character offset of the focal letter within `word`.
    pub focal_offset: usize,
    /// `index / total`, in `[0, 1]`.
    pub progress_fraction: f32,
    pub time_remaining_seconds: u32,
    pub total_words: usize,
    pub style: VisualStyle,
}

impl DisplayFrame<'_> {
    /// One-based word counter for the reader ("word N of total").
    pub fn word_number(&self) -> usize {
        self.word.index() + 1
    }

    /// The word split around its focal letter as `(before, focal, after)`.
    pub fn split_focal(&self) -> (&str, &str, &str) {
        let text = self.word.text();
        let mut chars = text.char_indices().skip(self.focal_offset);
        let Some((start, ch)) = chars.next() else {
            return (text, "", "");
        };
        let end = start + ch.len_utf8();
        (&text[..start], &text[start..end], &text[end..])
    }
}
