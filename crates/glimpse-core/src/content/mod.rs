//! Text ingestion: raw text sources and the word sequence they tokenize into.

mod static_source;
mod tokenizer;

pub use static_source::StaticTextSource;
pub use tokenizer::tokenize;

/// One whitespace-delimited word and its position in the full sequence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WordToken {
    text: String,
    index: usize,
}

impl WordToken {
    pub(crate) fn new(text: &str, index: usize) -> Self {
        Self {
            text: text.to_owned(),
            index,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Zero-based position in the owning [`Sequence`].
    pub fn index(&self) -> usize {
        self.index
    }

    /// Length in Unicode scalar values.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Ordered, immutable list of words for one loaded text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Sequence {
    words: Vec<WordToken>,
}

impl Sequence {
    pub const fn empty() -> Self {
        Self { words: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WordToken> {
        self.words.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, WordToken> {
        self.words.iter()
    }

    /// Words rejoined with single spaces.
    pub fn normalized(&self) -> String {
        let mut out = String::new();
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(word.text());
        }
        out
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a WordToken;
    type IntoIter = core::slice::Iter<'a, WordToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Supplier of raw text: an uploaded file, a paste, or a stored record.
pub trait TextSource {
    type Error: core::fmt::Debug + core::fmt::Display;

    fn load(&mut self) -> Result<String, Self::Error>;
}
