//! Focal letter (optimal recognition point) selection.

use core::{fmt, str::FromStr};

use crate::error::ReaderError;

/// How the highlighted letter is chosen within each word.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FocusMode {
    /// Length-based recognition point heuristic.
    #[default]
    Auto,
    /// Centre letter, `floor(L / 2)`.
    Middle,
    /// Fixed zero-based letter, clamped to the last letter of short words.
    FixedOffset(usize),
}

impl FromStr for FocusMode {
    type Err = ReaderError;

    /// Accepts `auto`, `middle`, or an integer offset. Negative offsets clamp to 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        if value.eq_ignore_ascii_case("middle") {
            return Ok(Self::Middle);
        }

        match value.parse::<i64>() {
            Ok(n) if n < 0 => Ok(Self::FixedOffset(0)),
            Ok(n) => Ok(Self::FixedOffset(usize::try_from(n).unwrap_or(usize::MAX))),
            Err(_) => Err(ReaderError::invalid(
                "focus_mode",
                format!("expected `auto`, `middle` or a letter offset, got `{value}`"),
            )),
        }
    }
}

impl fmt::Display for FocusMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Middle => f.write_str("middle"),
            Self::FixedOffset(n) => write!(f, "{n}"),
        }
    }
}

/// Zero-based character offset of the focal letter, always within `[0, L-1]`.
///
/// `L` counts Unicode scalar values. An empty word yields 0.
pub fn compute_focal_offset(word: &str, mode: FocusMode) -> usize {
    let len = word.chars().count();
    if len == 0 {
        return 0;
    }

    let offset = match mode {
        FocusMode::Auto => auto_offset(len),
        FocusMode::Middle => len / 2,
        FocusMode::FixedOffset(n) => n,
    };

    offset.min(len - 1)
}

fn auto_offset(len: usize) -> usize {
    match len {
        0..=2 => 0,
        3 | 4 => 1,
        5..=8 => 2,
        9..=13 => 3,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn word_of(len: usize) -> String {
        "x".repeat(len)
    }

    #[test]
    fn auto_table() {
        let expected = [
            (1, 0),
            (2, 0),
            (3, 1),
            (4, 1),
            (5, 2),
            (6, 2),
            (8, 2),
            (9, 3),
            (13, 3),
            (14, 4),
            (20, 4),
        ];
        for (len, offset) in expected {
            assert_eq!(
                compute_focal_offset(&word_of(len), FocusMode::Auto),
                offset,
                "length {len}"
            );
        }
    }

    #[test]
    fn auto_stays_in_bounds() {
        for len in 1..64 {
            let offset = compute_focal_offset(&word_of(len), FocusMode::Auto);
            assert!(offset < len);
        }
    }

    #[test]
    fn middle_and_fixed() {
        assert_eq!(compute_focal_offset("reading", FocusMode::Middle), 3);
        assert_eq!(compute_focal_offset("ab", FocusMode::Middle), 1);
        assert_eq!(compute_focal_offset("word", FocusMode::FixedOffset(2)), 2);
        assert_eq!(compute_focal_offset("word", FocusMode::FixedOffset(9)), 3);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(compute_focal_offset("añadió", FocusMode::Middle), 3);
        assert_eq!(compute_focal_offset("", FocusMode::Auto), 0);
    }

    #[test]
    fn parses_modes() {
        assert_eq!("auto".parse::<FocusMode>(), Ok(FocusMode::Auto));
        assert_eq!(" Middle ".parse::<FocusMode>(), Ok(FocusMode::Middle));
        assert_eq!("3".parse::<FocusMode>(), Ok(FocusMode::FixedOffset(3)));
        assert_eq!("-2".parse::<FocusMode>(), Ok(FocusMode::FixedOffset(0)));
        assert!(matches!(
            "third".parse::<FocusMode>(),
            Err(ReaderError::InvalidConfiguration { key: "focus_mode", .. })
        ));
    }

    fn any_mode() -> impl Strategy<Value = FocusMode> {
        prop_oneof![
            Just(FocusMode::Auto),
            Just(FocusMode::Middle),
            any::<usize>().prop_map(FocusMode::FixedOffset),
        ]
    }

    proptest! {
        #[test]
        fn offset_points_inside_any_word(word in any::<String>(), mode in any_mode()) {
            let offset = compute_focal_offset(&word, mode);
            match word.chars().count() {
                0 => {
                    prop_assert_eq!(offset, 0);
                }
                len => {
                    prop_assert!(offset < len);
                }
            }
        }

        #[test]
        fn auto_offset_never_decreases_with_length(len in 1usize..512) {
            let shorter = compute_focal_offset(&word_of(len), FocusMode::Auto);
            let longer = compute_focal_offset(&word_of(len + 1), FocusMode::Auto);
            prop_assert!(shorter <= longer);
        }
    }
}
