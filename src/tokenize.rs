//! Splitting normalized text into units

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Unit granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenMode {
    /// Whitespace-delimited words
    Word,
    /// Individual characters
    Character,
}

impl TokenMode {
    #[must_use]
    pub const fn from_by_character(by_character: bool) -> Self {
        if by_character {
            Self::Character
        } else {
            Self::Word
        }
    }

    /// String placed between units of one n-gram
    #[must_use]
    pub const fn joiner(self) -> &'static str {
        match self {
            Self::Word => " ",
            Self::Character => "",
        }
    }
}

/// Ordered units borrowed from the normalized text. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence<'a> {
    units: Vec<&'a str>,
}

impl<'a> TokenSequence<'a> {
    /// Split `text` according to `mode`.
    ///
    /// Character mode performs no splitting on whitespace: every char,
    /// spaces included, is one unit.
    #[must_use]
    pub fn new(text: &'a str, mode: TokenMode) -> Self {
        let units = match mode {
            TokenMode::Word => text.split_whitespace().collect(),
            TokenMode::Character => text
                .char_indices()
                .map(|(i, c)| &text[i..i + c.len_utf8()])
                .collect(),
        };
        Self { units }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[&'a str] {
        &self.units
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.units.iter().copied()
    }
}

impl<'a> From<Vec<&'a str>> for TokenSequence<'a> {
    fn from(units: Vec<&'a str>) -> Self {
        Self { units }
    }
}

impl<'a> Index<usize> for TokenSequence<'a> {
    type Output = &'a str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.units[index]
    }
}

/// Split `text` into units
#[must_use]
pub fn tokenize(text: &str, mode: TokenMode) -> TokenSequence<'_> {
    TokenSequence::new(text, mode)
}
