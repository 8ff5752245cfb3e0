use super::{Sequence, WordToken};

/// Split raw text into words on any run of Unicode whitespace.
///
/// Leading and trailing whitespace is ignored and no token is ever empty.
/// Whitespace-only input yields an empty sequence, which callers treat as
/// "no content" rather than an error.
pub fn tokenize(raw: &str) -> Sequence {
    let mut words = Vec::new();
    let mut cursor = 0usize;

    while let Some((word, next_cursor)) = next_word_at(raw, cursor) {
        words.push(WordToken::new(word, words.len()));
        cursor = next_cursor;
    }

    Sequence { words }
}

pub(super) fn next_word_at(text: &str, cursor: usize) -> Option<(&str, usize)> {
    let rest = &text[cursor..];
    let start = cursor + rest.find(|c: char| !c.is_whitespace())?;
    let end = text[start..]
        .find(char::is_whitespace)
        .map_or(text.len(), |offset| start + offset);

    Some((&text[start..end], end))
}
