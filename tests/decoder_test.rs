use email_features::*;

#[test]
fn test_decode_simple_email() {
    let raw = b"From: John Doe <john@example.com>\r\n\
                Subject: Lunch tomorrow\r\n\
                Date: Thu, 01 Jan 2025 12:00:00 +0000\r\n\
                \r\n\
                Meeting at noon.";

    let email = decode_email(raw).unwrap();

    assert_eq!(email.from.as_deref(), Some("John Doe <john@example.com>"));
    assert_eq!(email.subject, "Lunch tomorrow");
    assert_eq!(email.date.as_deref(), Some("Thu, 01 Jan 2025 12:00:00 +0000"));
    assert!(email.parsed_date.is_some());
    assert_eq!(email.body, Payload::Text("Meeting at noon.".into()));
    assert!(email.missing_headers().is_empty());
}

#[test]
fn test_combined_text_subject_first() {
    let raw = b"Subject: Cheap prize\r\n\r\nClick to claim";

    let email = decode_email(raw).unwrap();

    assert_eq!(email.combined_text(false).unwrap(), "Cheap prize\n\nClick to claim");
}

#[test]
fn test_missing_headers_are_not_errors() {
    let raw = b"X-Mailer: test\r\n\r\nNo headers to speak of";

    let email = decode_email(raw).unwrap();

    assert!(email.from.is_none());
    assert!(email.date.is_none());
    assert!(email.parsed_date.is_none());
    assert_eq!(email.subject, "");
    assert!(!email.has_subject);
    assert_eq!(email.missing_headers(), vec!["From", "Subject", "Date"]);
    assert_eq!(email.combined_text(false).unwrap(), "\n\nNo headers to speak of");
}

#[test]
fn test_unparseable_date_is_kept_raw() {
    let raw = b"Date: sometime last week\r\nSubject: x\r\n\r\nbody";

    let email = decode_email(raw).unwrap();

    assert_eq!(email.date.as_deref(), Some("sometime last week"));
    assert!(email.parsed_date.is_none());
}

#[test]
fn test_encoded_word_subject_is_decoded() {
    let raw = b"Subject: =?UTF-8?B?SGVsbG8gV29ybGQ=?=\r\n\r\nbody";

    let email = decode_email(raw).unwrap();

    assert_eq!(email.subject, "Hello World");
}

#[test]
fn test_quoted_printable_latin1_subject() {
    let raw = b"Subject: =?ISO-8859-1?Q?Caf=E9?=\r\n\r\nbody";

    let email = decode_email(raw).unwrap();

    assert_eq!(email.subject, "Caf\u{e9}");
}

#[test]
fn test_multipart_follows_first_part_only() {
    let raw = b"From: sender@example.com\r\n\
                Subject: Offer\r\n\
                Content-Type: multipart/alternative; boundary=\"b1\"\r\n\
                \r\n\
                --b1\r\n\
                Content-Type: text/html\r\n\
                \r\n\
                <p>Hello <b>friend</b></p>\r\n\
                --b1\r\n\
                Content-Type: text/plain\r\n\
                \r\n\
                plain version\r\n\
                --b1--\r\n";

    let email = decode_email(raw).unwrap();
    let body = email.body.decode(true).unwrap();

    assert_eq!(email.body_mimetype, "text/html");
    assert!(body.contains("<b>friend</b>"));
    assert!(!body.contains("plain version"));
}

#[test]
fn test_nested_multipart_descends_to_first_leaf() {
    let raw = b"Subject: Nested\r\n\
                Content-Type: multipart/mixed; boundary=\"outer\"\r\n\
                \r\n\
                --outer\r\n\
                Content-Type: multipart/alternative; boundary=\"inner\"\r\n\
                \r\n\
                --inner\r\n\
                Content-Type: text/plain\r\n\
                \r\n\
                innermost text\r\n\
                --inner\r\n\
                Content-Type: text/html\r\n\
                \r\n\
                <p>html text</p>\r\n\
                --inner--\r\n\
                --outer\r\n\
                Content-Type: application/pdf\r\n\
                \r\n\
                attachment\r\n\
                --outer--\r\n";

    let email = decode_email(raw).unwrap();
    let body = email.body.decode(true).unwrap();

    assert_eq!(email.body_mimetype, "text/plain");
    assert!(body.contains("innermost text"));
    assert!(!body.contains("html text"));
    assert!(!body.contains("attachment"));
}

#[test]
fn test_base64_text_part_is_transfer_decoded() {
    let raw = b"Subject: b64\r\n\
                Content-Type: text/plain; charset=utf-8\r\n\
                Content-Transfer-Encoding: base64\r\n\
                \r\n\
                RnJlZSBtb25leQ==\r\n";

    let email = decode_email(raw).unwrap();

    assert_eq!(email.body.decode(true).unwrap(), "Free money");
}

#[test]
fn test_non_text_leaf_is_bytes() {
    let raw = b"Subject: binary\r\n\
                Content-Type: application/octet-stream\r\n\
                \r\n\
                abc";

    let email = decode_email(raw).unwrap();

    assert!(matches!(email.body, Payload::Bytes(_)));
    assert!(email.body.decode(true).unwrap().starts_with("abc"));
}

#[test]
fn test_invalid_utf8_bytes_strict_and_lossy() {
    let payload = Payload::Bytes(vec![b'o', b'k', 0xff, 0xfe]);

    assert!(matches!(payload.decode(true), Err(FeatureError::Decode(_))));

    let lossy = payload.decode(false).unwrap();
    assert!(lossy.starts_with("ok"));
    assert!(lossy.contains('\u{fffd}'));
}

#[test]
fn test_text_payload_passes_through() {
    let payload = Payload::Text("as is  \n".into());

    assert!(payload.is_text());
    assert_eq!(payload.decode(true).unwrap(), "as is  \n");
}

#[test]
fn test_from_and_date_are_kept_raw() {
    let raw = b"From: =?UTF-8?B?Sm9obiBEb2U=?= <john@example.com>\r\n\
                Subject: =?UTF-8?B?SGVsbG8=?=\r\n\
                Date: Thu, 01 Jan 2025 12:00:00 +0000\r\n\
                \r\n\
                body";

    let email = decode_email(raw).unwrap();

    assert_eq!(
        email.from.as_deref(),
        Some("=?UTF-8?B?Sm9obiBEb2U=?= <john@example.com>")
    );
    assert_eq!(email.date.as_deref(), Some("Thu, 01 Jan 2025 12:00:00 +0000"));
    assert_eq!(email.subject, "Hello");
}

#[test]
fn test_forwarded_message_descends_into_embedded_email() {
    let raw = b"Subject: Fwd: deal\r\n\
                Content-Type: multipart/mixed; boundary=\"outer\"\r\n\
                \r\n\
                --outer\r\n\
                Content-Type: message/rfc822\r\n\
                \r\n\
                From: original@example.com\r\n\
                Subject: deal\r\n\
                Content-Type: multipart/alternative; boundary=\"inner\"\r\n\
                \r\n\
                --inner\r\n\
                Content-Type: text/plain\r\n\
                \r\n\
                forwarded body text\r\n\
                --inner\r\n\
                Content-Type: text/html\r\n\
                \r\n\
                <p>forwarded html</p>\r\n\
                --inner--\r\n\
                --outer\r\n\
                Content-Type: text/plain\r\n\
                \r\n\
                cover note\r\n\
                --outer--\r\n";

    let email = decode_email(raw).unwrap();
    let body = email.body.decode(true).unwrap();

    assert_eq!(email.subject, "Fwd: deal");
    assert_eq!(email.body_mimetype, "text/plain");
    assert!(body.contains("forwarded body text"));
    assert!(!body.contains("original@example.com"));
    assert!(!body.contains("forwarded html"));
    assert!(!body.contains("cover note"));
}
