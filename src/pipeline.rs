//! Corpus driver: decode, normalize, tokenize, generate n-grams, write

use crate::config::{ExtractionOptions, PipelineConfig, RunConfig};
use crate::corpus::short_name;
use crate::decoder::decode_email;
use crate::error::{FeatureError, Result};
use crate::labels::LabelStore;
use crate::ngram::NGramGenerator;
use crate::normalize::{NormalizeOptions, normalize};
use crate::stopwords::StopwordSet;
use crate::tokenize::TokenSequence;
use crate::types::FeatureDocument;
use crate::writer::FeatureFileWriter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of one run over the corpus
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub name: String,
    pub documents: usize,
    pub features: usize,
    pub unknown_labels: usize,
    pub outputs: Vec<PathBuf>,
}

/// Normalize, tokenize and generate n-grams for already combined text
#[must_use]
pub fn extract_features(
    text: &str,
    options: &ExtractionOptions,
    stopwords: StopwordSet,
) -> Vec<String> {
    let normalized = normalize(text, NormalizeOptions::from(options));
    let mode = options.token_mode();
    let tokens = TokenSequence::new(&normalized, mode);
    NGramGenerator::new(options.ngram_orders.clone(), mode, stopwords).generate(&tokens)
}

/// Per-corpus state shared read-only by every document
#[derive(Debug, Clone)]
pub struct Pipeline {
    labels: LabelStore,
    stopwords: StopwordSet,
    short_name_marker: String,
    strict_decoding: bool,
}

impl Pipeline {
    #[must_use]
    pub fn new(labels: LabelStore, short_name_marker: impl Into<String>) -> Self {
        Self {
            labels,
            stopwords: StopwordSet::english(),
            short_name_marker: short_name_marker.into(),
            strict_decoding: false,
        }
    }

    #[must_use]
    pub fn strict_decoding(mut self, strict: bool) -> Self {
        self.strict_decoding = strict;
        self
    }

    /// Build from a configuration, loading its label file
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let labels = LabelStore::load(&config.label_file)?;
        Ok(Self::new(labels, config.short_name_marker.clone())
            .strict_decoding(config.strict_decoding))
    }

    #[must_use]
    pub const fn labels(&self) -> &LabelStore {
        &self.labels
    }

    /// Turn one raw message into a feature document
    pub fn extract(
        &self,
        source: &Path,
        raw: &[u8],
        options: &ExtractionOptions,
    ) -> Result<FeatureDocument> {
        let email = decode_email(raw)?;
        for header in email.missing_headers() {
            warn!("Email {} is missing the header {header}", source.display());
        }

        let short = short_name(source, &self.short_name_marker);
        let label = self.labels.lookup(&short);
        info!("Processing {} aka {short}, label {label}", source.display());
        if !label.is_known() {
            warn!("No label for {short}");
        }

        let text = email.combined_text(self.strict_decoding)?;
        let features = extract_features(&text, options, self.stopwords);
        debug!("{} features from {}", features.len(), source.display());

        Ok(FeatureDocument {
            label,
            source: source.to_path_buf(),
            features,
        })
    }

    /// Read the email at `path` and extract its feature document
    pub fn extract_file(&self, path: &Path, options: &ExtractionOptions) -> Result<FeatureDocument> {
        let raw = std::fs::read(path).map_err(|e| FeatureError::io(path, e))?;
        self.extract(path, &raw, options)
    }

    /// Process every email in order, writing document `i` to the run's
    /// template rendered with `i`. The first failure aborts the run.
    pub fn run(&self, run: &RunConfig, emails: &[PathBuf]) -> Result<RunSummary> {
        run.options.validate()?;
        let writer = FeatureFileWriter::new(run.output_template.clone());
        let mut summary = RunSummary {
            name: run.name.clone(),
            ..RunSummary::default()
        };

        for (index, path) in emails.iter().enumerate() {
            let document = self.extract_file(path, &run.options)?;
            let output = writer.write(index, &document)?;

            summary.documents += 1;
            summary.features += document.features.len();
            if !document.label.is_known() {
                summary.unknown_labels += 1;
            }
            summary.outputs.push(output);
        }

        info!(
            "Run {}: {} documents, {} features, {} unknown labels",
            summary.name, summary.documents, summary.features, summary.unknown_labels
        );
        Ok(summary)
    }
}

/// Execute every run of `config` over its corpus
pub fn run_pipeline(config: &PipelineConfig) -> Result<Vec<RunSummary>> {
    config.validate()?;
    let pipeline = Pipeline::from_config(config)?;
    let emails = config.corpus.enumerate()?;
    info!("{} emails, {} labels", emails.len(), pipeline.labels().len());

    config
        .runs
        .iter()
        .map(|run| pipeline.run(run, &emails))
        .collect()
}
