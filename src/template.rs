//! Path templates with a single integer placeholder

use crate::error::{FeatureError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

// `{}`, `{0}`, `{:5}`, `{:05}`, `{:05d}`, `{0:05d}`
static PLACEHOLDER_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"\{0?(?::(0)?([1-9][0-9]?)d?)?\}").unwrap()
});

/// A path with one index placeholder, such as `out/payload{}.data` or
/// `corpus/TRAIN_{:05d}.eml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathTemplate {
    source: String,
    prefix: String,
    suffix: String,
    width: usize,
    zero_pad: bool,
}

impl PathTemplate {
    pub fn parse(template: &str) -> Result<Self> {
        let mut matches = PLACEHOLDER_REGEX.captures_iter(template);
        let caps = matches.next().ok_or_else(|| FeatureError::Template {
            template: template.to_string(),
            details: "no index placeholder".into(),
        })?;
        if matches.next().is_some() {
            return Err(FeatureError::Template {
                template: template.to_string(),
                details: "more than one index placeholder".into(),
            });
        }

        let whole = caps.get(0).ok_or_else(|| FeatureError::Template {
            template: template.to_string(),
            details: "no index placeholder".into(),
        })?;
        let width = caps
            .get(2)
            .and_then(|w| w.as_str().parse().ok())
            .unwrap_or(0);

        Ok(Self {
            source: template.to_string(),
            prefix: template[..whole.start()].to_string(),
            suffix: template[whole.end()..].to_string(),
            width,
            zero_pad: caps.get(1).is_some(),
        })
    }

    /// Substitute `index` into the template
    #[must_use]
    pub fn render(&self, index: usize) -> String {
        let number = if self.zero_pad {
            format!("{index:0width$}", width = self.width)
        } else {
            format!("{index:>width$}", width = self.width)
        };
        format!("{}{}{}", self.prefix, number, self.suffix)
    }

    #[must_use]
    pub fn path(&self, index: usize) -> PathBuf {
        PathBuf::from(self.render(index))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl TryFrom<String> for PathTemplate {
    type Error = FeatureError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<PathTemplate> for String {
    fn from(template: PathTemplate) -> Self {
        template.source
    }
}

impl std::str::FromStr for PathTemplate {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
