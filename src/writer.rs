//! Feature file serialization
//!
//! ```text
//! <label>
//! // <spam|ham> email derived from <source path>
//! // Begin payload
//! <feature 1>
//! <feature 2>
//! ```
//!
//! Features are written as-is, one per line, without escaping.

use crate::error::{FeatureError, Result};
use crate::template::PathTemplate;
use crate::types::FeatureDocument;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Third line of every feature file
pub const PAYLOAD_MARKER: &str = "// Begin payload";

/// Serialize `document` to any writer
pub fn write_document<W: Write>(document: &FeatureDocument, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", document.label)?;
    writeln!(
        out,
        "// {} email derived from {}",
        document.spam_class(),
        document.source.display()
    )?;
    writeln!(out, "{PAYLOAD_MARKER}")?;
    for feature in &document.features {
        writeln!(out, "{feature}")?;
    }
    Ok(())
}

/// Writes one file per document, named from a template and the document index
#[derive(Debug, Clone)]
pub struct FeatureFileWriter {
    template: PathTemplate,
}

impl FeatureFileWriter {
    #[must_use]
    pub const fn new(template: PathTemplate) -> Self {
        Self { template }
    }

    #[must_use]
    pub fn output_path(&self, index: usize) -> PathBuf {
        self.template.path(index)
    }

    /// Write `document` to the path for `index` and return that path
    pub fn write(&self, index: usize, document: &FeatureDocument) -> Result<PathBuf> {
        let path = self.output_path(index);
        write_file(&path, document)?;
        Ok(path)
    }
}

/// Create `path` and write `document` into it
pub fn write_file(path: &Path, document: &FeatureDocument) -> Result<()> {
    let file = File::create(path).map_err(|e| FeatureError::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_document(document, &mut out).map_err(|e| FeatureError::io(path, e))?;
    out.flush().map_err(|e| FeatureError::io(path, e))
}
