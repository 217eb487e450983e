//! Corpus enumeration and short-name derivation

use crate::error::{FeatureError, Result};
use crate::template::PathTemplate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the email files of a corpus come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CorpusSource {
    /// An explicit list of files, processed in the given order
    Files { paths: Vec<PathBuf> },

    /// Every file in a directory with the given extension, sorted by name
    Directory {
        path: PathBuf,
        #[serde(default = "default_extension")]
        extension: String,
    },

    /// `template` rendered for every index in `start..=end`
    Indexed {
        template: PathTemplate,
        start: usize,
        end: usize,
    },
}

fn default_extension() -> String {
    "eml".to_string()
}

impl CorpusSource {
    /// Resolve the source into an ordered list of email paths
    pub fn enumerate(&self) -> Result<Vec<PathBuf>> {
        match self {
            Self::Files { paths } => Ok(paths.clone()),
            Self::Directory { path, extension } => list_directory(path, extension),
            Self::Indexed {
                template,
                start,
                end,
            } => Ok((*start..=*end).map(|i| template.path(i)).collect()),
        }
    }
}

fn list_directory(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| FeatureError::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| FeatureError::io(dir, e))?.path();
        let matches = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if path.is_file() && matches {
            paths.push(path);
        }
    }
    paths.sort();

    tracing::debug!("Found {} .{extension} files in {}", paths.len(), dir.display());
    Ok(paths)
}

/// Label-file key for an email path: `marker` followed by whatever comes
/// after the last `marker` in the path, or the whole path if it has none
#[must_use]
pub fn short_name(path: &Path, marker: &str) -> String {
    let path = path.to_string_lossy();
    let suffix = if marker.is_empty() {
        &*path
    } else {
        path.rsplit(marker).next().unwrap_or_default()
    };
    format!("{marker}{suffix}")
}
