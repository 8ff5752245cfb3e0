//! Short, bounded labels for the reading status line.

use core::fmt::Write;

use heapless::String;

/// Seconds left to read `remaining_words` at `wpm`, rounded to the nearest second.
pub fn time_remaining_seconds(remaining_words: usize, wpm: u32) -> u32 {
    if remaining_words == 0 {
        return 0;
    }

    let seconds = (remaining_words as f64 / wpm.max(1) as f64) * 60.0;
    seconds.round().min(u32::MAX as f64) as u32
}

/// `m:ss` rendering of a duration; minutes are not wrapped into hours.
pub fn time_label(total_seconds: u32) -> String<16> {
    let mut out = String::new();
    let _ = write!(out, "{}:{:02}", total_seconds / 60, total_seconds % 60);
    out
}

/// `N / total` word counter.
pub fn counter_label(word_number: usize, total: usize) -> String<48> {
    let mut out = String::new();
    let _ = write!(out, "{word_number} / {total}");
    out
}
