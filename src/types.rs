//! Core types flowing through the extraction pipeline

use crate::error::{FeatureError, Result};
use crate::labels::Label;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

/// A decoded email: the header fields we care about plus one leaf payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Email {
    /// Raw From header, if present
    pub from: Option<String>,

    /// Subject with encoded words decoded; empty when the header is missing
    pub subject: String,

    /// Whether the Subject header was present at all
    pub has_subject: bool,

    /// Raw Date header, if present
    pub date: Option<String>,

    /// Date header parsed as RFC 2822
    pub parsed_date: Option<DateTime<Utc>>,

    /// Payload of the first leaf reached by first-child descent
    pub body: Payload,

    /// Mime type of that leaf
    pub body_mimetype: String,
}

impl Email {
    /// Names of the tracked headers that were missing from the message
    #[must_use]
    pub fn missing_headers(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.from.is_none() {
            missing.push("From");
        }
        if !self.has_subject {
            missing.push("Subject");
        }
        if self.date.is_none() {
            missing.push("Date");
        }
        missing
    }

    /// Subject and body joined by a blank line, subject first
    pub fn combined_text(&self, strict: bool) -> Result<String> {
        let body = self.body.decode(strict)?;
        Ok(format!("{}\n\n{}", self.subject, body))
    }
}

/// A leaf payload as handed out by the MIME layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload {
    Text(String),
    Bytes(Vec<u8>),
}

impl Payload {
    /// Decode to text.
    ///
    /// Text passes through untouched. Bytes must be UTF-8 when `strict` is set;
    /// otherwise invalid sequences are replaced.
    pub fn decode(&self, strict: bool) -> Result<Cow<'_, str>> {
        match self {
            Self::Text(text) => Ok(Cow::Borrowed(text)),
            Self::Bytes(bytes) => match std::str::from_utf8(bytes) {
                Ok(text) => Ok(Cow::Borrowed(text)),
                Err(e) if strict => Err(FeatureError::Decode(e.to_string())),
                Err(e) => {
                    tracing::warn!("Payload is not valid UTF-8 ({e}), decoding lossily");
                    Ok(String::from_utf8_lossy(bytes))
                }
            },
        }
    }

    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

/// Spam/ham wording used in the provenance comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpamClass {
    Spam,
    Ham,
}

impl SpamClass {
    /// Any known, non-empty label token reads as spam
    #[must_use]
    pub fn from_label(label: &Label) -> Self {
        match label {
            Label::Known(token) if !token.is_empty() => Self::Spam,
            _ => Self::Ham,
        }
    }
}

impl fmt::Display for SpamClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spam => write!(f, "spam"),
            Self::Ham => write!(f, "ham"),
        }
    }
}

/// One serialized output unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureDocument {
    /// Classification label, or the unknown sentinel
    pub label: Label,

    /// Path of the email this document was derived from
    pub source: PathBuf,

    /// Feature strings in window order
    pub features: Vec<String>,
}

impl FeatureDocument {
    #[must_use]
    pub fn spam_class(&self) -> SpamClass {
        SpamClass::from_label(&self.label)
    }
}
