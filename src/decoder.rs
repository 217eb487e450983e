//! Email decoding: header fields and a single leaf payload

use crate::error::{FeatureError, Result};
use crate::types::{Email, Payload};
use chrono::{DateTime, Utc};
use mailparse::{MailHeader, ParsedMail};
use tracing::debug;

/// Parse raw email bytes into an [`Email`]
pub fn decode_email(raw: &[u8]) -> Result<Email> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| FeatureError::Structure(e.to_string()))?;

    let from = raw_header_value(&parsed.headers, "from");
    let subject = header_value(&parsed.headers, "subject");
    let date = raw_header_value(&parsed.headers, "date");
    let parsed_date = date.as_deref().and_then(parse_date);

    let (body, body_mimetype) = leaf_payload(&parsed)?;

    debug!(
        "Decoded email with {} leaf ({} payload)",
        body_mimetype,
        if body.is_text() { "text" } else { "binary" }
    );

    Ok(Email {
        from,
        has_subject: subject.is_some(),
        subject: subject.unwrap_or_default(),
        date,
        parsed_date,
        body,
        body_mimetype,
    })
}

/// First value of a header, encoded words decoded
fn header_value(headers: &[MailHeader], name: &str) -> Option<String> {
    headers
        .iter()
        .find(|h| h.get_key().eq_ignore_ascii_case(name))
        .map(MailHeader::get_value)
}

/// First value of a header exactly as it appears in the message
fn raw_header_value(headers: &[MailHeader], name: &str) -> Option<String> {
    headers
        .iter()
        .find(|h| h.get_key().eq_ignore_ascii_case(name))
        .map(|h| {
            String::from_utf8_lossy(h.get_value_raw())
                .trim_start()
                .trim_end_matches(['\r', '\n'])
                .to_string()
        })
}

fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Follow the first subpart of every multipart until a leaf is reached.
/// Sibling parts (alternatives, attachments) are never looked at.
#[must_use]
pub fn first_leaf<'a>(parsed: &'a ParsedMail<'a>) -> &'a ParsedMail<'a> {
    let mut part = parsed;
    let mut depth = 0usize;
    while let Some(first) = part.subparts.first() {
        part = first;
        depth += 1;
    }
    if depth > 0 {
        debug!("Reached leaf at multipart depth {depth}");
    }
    part
}

/// Payload and mime type of the first leaf.
///
/// An embedded `message/rfc822` leaf is parsed in turn and descended the same
/// way. Text leaves are decoded through their charset; anything else, or text
/// that fails to decode, is handed back as raw bytes.
fn leaf_payload(parsed: &ParsedMail) -> Result<(Payload, String)> {
    let leaf = first_leaf(parsed);
    let mimetype = leaf.ctype.mimetype.to_lowercase();

    if mimetype == "message/rfc822" {
        let raw = leaf
            .get_body_raw()
            .map_err(|e| FeatureError::Decode(e.to_string()))?;
        let embedded =
            mailparse::parse_mail(&raw).map_err(|e| FeatureError::Structure(e.to_string()))?;
        debug!("Descending into embedded message");
        return leaf_payload(&embedded);
    }

    if mimetype.starts_with("text/")
        && let Ok(text) = leaf.get_body()
    {
        return Ok((Payload::Text(text), mimetype));
    }

    let bytes = leaf
        .get_body_raw()
        .map_err(|e| FeatureError::Decode(e.to_string()))?;
    Ok((Payload::Bytes(bytes), mimetype))
}
