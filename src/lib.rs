// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]

//! Email Feature Extraction
//!
//! Converts a corpus of raw email messages into per-document feature files
//! for a spam classifier.
//!
//! # Pipeline
//!
//! - Decode the message and follow the first part of every multipart down
//!   to a single leaf payload
//! - Join subject and body, then optionally strip markup, fold case and
//!   collapse whitespace
//! - Split into words or characters
//! - Emit n-grams whose first unit is not a stopword
//! - Write label, provenance and features to one file per email
//!
//! # Example
//!
//! ```rust
//! use email_features::{ExtractionOptions, StopwordSet, decode_email, extract_features};
//!
//! let raw = b"From: sender@example.com\r\nSubject: Cheap watches\r\n\r\nBuy cheap watches today";
//! let email = decode_email(raw).unwrap();
//! let text = email.combined_text(false).unwrap();
//!
//! let options = ExtractionOptions::default();
//! let features = extract_features(&text, &options, StopwordSet::english());
//! assert_eq!(features, ["Cheap", "watches", "Buy", "cheap", "watches"]);
//! ```

mod config;
mod corpus;
mod decoder;
mod error;
mod labels;
mod ngram;
mod normalize;
mod pipeline;
mod stopwords;
mod template;
mod tokenize;
mod types;
mod writer;

pub use config::{DEFAULT_SHORT_NAME_MARKER, ExtractionOptions, PipelineConfig, RunConfig};
pub use corpus::{CorpusSource, short_name};
pub use decoder::{decode_email, first_leaf};
pub use error::{FeatureError, Result};
pub use labels::{Label, LabelStore, UNKNOWN_LABEL};
pub use ngram::{NGramGenerator, window_count};
pub use normalize::{NormalizeOptions, collapse_whitespace, normalize, strip_markup};
pub use pipeline::{Pipeline, RunSummary, extract_features, run_pipeline};
pub use stopwords::{STOPWORDS, StopwordSet};
pub use template::PathTemplate;
pub use tokenize::{TokenMode, TokenSequence, tokenize};
pub use types::*;
pub use writer::{FeatureFileWriter, PAYLOAD_MARKER, write_document, write_file};
