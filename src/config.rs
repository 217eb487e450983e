//! Run configuration
//!
//! A [`PipelineConfig`] names one labelled corpus and any number of runs over
//! it. Each run has its own output template and extraction toggles, so a
//! single invocation can produce word unigrams and character 4-grams side by
//! side.

use crate::corpus::CorpusSource;
use crate::error::{FeatureError, Result};
use crate::template::PathTemplate;
use crate::tokenize::TokenMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Marker that starts the short file name used for label lookups
pub const DEFAULT_SHORT_NAME_MARKER: &str = "TRAIN_";

/// Per-run extraction toggles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionOptions {
    /// Keep markup verbatim. When false, tags are stripped.
    pub include_markup: bool,

    /// Lowercase the text before tokenizing
    pub case_insensitive: bool,

    /// N-gram orders, in the order features are emitted per start index
    pub ngram_orders: Vec<usize>,

    /// Collapse whitespace runs to one space
    pub normalize_whitespace: bool,

    /// Use characters instead of words as units
    pub by_character: bool,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            include_markup: true,
            case_insensitive: false,
            ngram_orders: vec![1],
            normalize_whitespace: true,
            by_character: false,
        }
    }
}

impl ExtractionOptions {
    pub fn validate(&self) -> Result<()> {
        if self.ngram_orders.is_empty() {
            return Err(FeatureError::Config("no n-gram orders requested".into()));
        }
        if self.ngram_orders.contains(&0) {
            return Err(FeatureError::Config(
                "n-gram orders must be positive".into(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub const fn token_mode(&self) -> TokenMode {
        TokenMode::from_by_character(self.by_character)
    }
}

/// One output set over the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Name used in logs and summaries
    pub name: String,

    /// Output path per document, the document index substituted in
    pub output_template: PathTemplate,

    #[serde(default)]
    pub options: ExtractionOptions,
}

/// Everything one invocation needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Label file with `<label> <short name>` records
    pub label_file: PathBuf,

    /// Where the emails come from
    pub corpus: CorpusSource,

    /// Short names start at the last occurrence of this marker in a path
    #[serde(default = "default_marker")]
    pub short_name_marker: String,

    /// Fail on payload bytes that are not UTF-8 instead of replacing them
    #[serde(default)]
    pub strict_decoding: bool,

    pub runs: Vec<RunConfig>,
}

fn default_marker() -> String {
    DEFAULT_SHORT_NAME_MARKER.to_string()
}

impl PipelineConfig {
    /// Load a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| FeatureError::io(path, e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| FeatureError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.runs.is_empty() {
            return Err(FeatureError::Config("no runs configured".into()));
        }
        for run in &self.runs {
            match run.options.validate() {
                Err(FeatureError::Config(details)) => {
                    return Err(FeatureError::Config(format!("run {:?}: {details}", run.name)));
                }
                other => other?,
            }
        }
        Ok(())
    }
}
