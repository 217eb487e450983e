use email_features::*;
use std::path::PathBuf;

fn document(label: Label, features: &[&str]) -> FeatureDocument {
    FeatureDocument {
        label,
        source: PathBuf::from("corpus/TRAIN_00001.eml"),
        features: features.iter().map(ToString::to_string).collect(),
    }
}

fn render(document: &FeatureDocument) -> String {
    let mut out = Vec::new();
    write_document(document, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_write_spam_document() {
    let doc = document(Label::Known("1".into()), &["cheap watches", "watches today"]);

    assert_eq!(
        render(&doc),
        "1\n\
         // spam email derived from corpus/TRAIN_00001.eml\n\
         // Begin payload\n\
         cheap watches\n\
         watches today\n"
    );
}

#[test]
fn test_write_empty_label_as_ham() {
    let doc = document(Label::Known(String::new()), &[]);

    assert_eq!(
        render(&doc),
        "\n// ham email derived from corpus/TRAIN_00001.eml\n// Begin payload\n"
    );
}

#[test]
fn test_write_unknown_label_verbatim() {
    let doc = document(Label::Unknown, &["x"]);
    let text = render(&doc);

    assert_eq!(text.lines().next(), Some(UNKNOWN_LABEL));
    assert_eq!(
        text.lines().nth(1),
        Some("// ham email derived from corpus/TRAIN_00001.eml")
    );
    assert_eq!(text.lines().nth(2), Some(PAYLOAD_MARKER));
}

#[test]
fn test_features_are_not_escaped() {
    let doc = document(Label::Known("1".into()), &["two\nlines"]);

    assert!(render(&doc).ends_with("// Begin payload\ntwo\nlines\n"));
}

#[test]
fn test_file_writer_uses_template() {
    let dir = tempfile::tempdir().unwrap();
    let template = PathTemplate::parse(&format!("{}/payload{{}}.data", dir.path().display())).unwrap();
    let writer = FeatureFileWriter::new(template);
    let doc = document(Label::Known("0".into()), &["hello"]);

    let path = writer.write(7, &doc).unwrap();

    assert_eq!(path, dir.path().join("payload7.data"));
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("0\n// spam email derived from"));
    assert!(text.ends_with("// Begin payload\nhello\n"));
}

#[test]
fn test_unwritable_output_is_io_error() {
    let doc = document(Label::Known("1".into()), &[]);
    let err = write_file(std::path::Path::new("/nonexistent/dir/out.data"), &doc).unwrap_err();

    assert!(matches!(err, FeatureError::Io { .. }));
}

// --- PathTemplate ---

#[test]
fn test_template_plain_placeholder() {
    let template = PathTemplate::parse("data/payload{}.data").unwrap();

    assert_eq!(template.render(0), "data/payload0.data");
    assert_eq!(template.render(4326), "data/payload4326.data");
}

#[test]
fn test_template_positional_placeholder() {
    let template = PathTemplate::parse("data/char{0}.data").unwrap();

    assert_eq!(template.render(12), "data/char12.data");
}

#[test]
fn test_template_zero_padded() {
    let template = PathTemplate::parse("TRAINING/TRAIN_{:05d}.eml").unwrap();

    assert_eq!(template.render(42), "TRAINING/TRAIN_00042.eml");
    assert_eq!(template.render(123_456), "TRAINING/TRAIN_123456.eml");
}

#[test]
fn test_template_space_padded() {
    let template = PathTemplate::parse("out{:3}").unwrap();

    assert_eq!(template.render(7), "out  7");
}

#[test]
fn test_template_without_placeholder_is_rejected() {
    let err = PathTemplate::parse("data/payload.data").unwrap_err();

    assert!(matches!(err, FeatureError::Template { .. }));
}

#[test]
fn test_template_with_two_placeholders_is_rejected() {
    assert!(PathTemplate::parse("{}/payload{}.data").is_err());
}

#[test]
fn test_template_display_and_from_str() {
    let template: PathTemplate = "a{}b".parse().unwrap();

    assert_eq!(template.to_string(), "a{}b");
    assert_eq!(template.as_str(), "a{}b");
}
