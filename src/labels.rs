//! Label file loading and lookup

use crate::error::{FeatureError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Token written in place of a label for files missing from the label file
pub const UNKNOWN_LABEL: &str = "unknown";

/// Result of a label lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    /// Token taken verbatim from the label file
    Known(String),

    /// The file name had no entry
    Unknown,
}

impl Label {
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Token as written to the first line of a feature file
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(token) => token,
            Self::Unknown => UNKNOWN_LABEL,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mapping from short email file name to label token, immutable once built
#[derive(Debug, Clone, Default)]
pub struct LabelStore {
    labels: HashMap<String, String>,
}

impl LabelStore {
    /// Read and parse a label file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| FeatureError::io(path, e))?;
        let store = Self::parse(&content);
        tracing::debug!("Loaded {} labels from {}", store.len(), path.display());
        Ok(store)
    }

    /// Parse label file content made of `<label> <filename>\n` records.
    ///
    /// Line endings are read as universal newlines, so `\r\n` and `\r`
    /// count as `\n`. Each line is split once on its first whitespace run.
    /// Lines with fewer than two parts are skipped. The file name keeps
    /// everything after that run except its final character, which is
    /// assumed to be the newline.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let content = content.replace("\r\n", "\n").replace('\r', "\n");
        let labels = content
            .split_inclusive('\n')
            .filter_map(parse_line)
            .map(|(label, name)| (name.to_string(), label.to_string()))
            .collect();

        Self { labels }
    }

    /// Look up the label for a short file name
    #[must_use]
    pub fn lookup(&self, short_name: &str) -> Label {
        self.labels
            .get(short_name)
            .map_or(Label::Unknown, |token| Label::Known(token.clone()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start();
    let (label, rest) = line.split_once(char::is_whitespace)?;
    let rest = rest.trim_start();
    if rest.is_empty() {
        return None;
    }

    let mut chars = rest.chars();
    chars.next_back();
    Some((label, chars.as_str()))
}
