//! Tests for converter command construction

use md2lo::command::{CommandBuilder, CommandSpec};
use md2lo::format::OutputFormat;
use md2lo::request::ConversionRequest;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const FORMATS: [OutputFormat; 3] = [OutputFormat::Html, OutputFormat::Docx, OutputFormat::Odt];

/// Builder whose default reference document lives in an empty temp dir.
fn isolated_builder() -> (TempDir, CommandBuilder) {
    let dir = TempDir::new().unwrap();
    let builder = CommandBuilder::new("pandoc").with_default_template(dir.path().join("template.odt"));
    (dir, builder)
}

fn tokens(spec: &CommandSpec) -> Vec<String> {
    spec.tokens().map(|t| t.to_string_lossy().into_owned()).collect()
}

fn has_toc_flags(tokens: &[String]) -> bool {
    tokens.iter().any(|t| t == "--toc" || t.starts_with("--toc-depth"))
}

fn has_reference_doc(tokens: &[String]) -> bool {
    tokens.iter().any(|t| t == "--reference-doc")
}

#[test]
fn test_output_path_replaces_markdown_extension() {
    let (_dir, builder) = isolated_builder();

    for input in ["notes.md", "docs/notes.md", "notes.markdown", "docs/read-me.markdown"] {
        for format in FORMATS {
            let spec = builder.build(&ConversionRequest::new(input, format));
            let stem = input
                .strip_suffix(".markdown")
                .or_else(|| input.strip_suffix(".md"))
                .unwrap();
            let expected = PathBuf::from(format!("{}{}", stem, format.extension()));

            assert_eq!(spec.output(), expected.as_path(), "input {} as {}", input, format);
            assert_eq!(
                tokens(&spec).last().unwrap(),
                &expected.to_string_lossy().into_owned()
            );
        }
    }
}

#[test]
fn test_html_toc_flags_follow_option() {
    let (_dir, builder) = isolated_builder();

    let with_toc = builder.build(&ConversionRequest::new("notes.md", OutputFormat::Html).with_toc(true));
    assert!(tokens(&with_toc).contains(&"--toc".to_string()));
    assert!(tokens(&with_toc).contains(&"--toc-depth=2".to_string()));

    let without = builder.build(&ConversionRequest::new("notes.md", OutputFormat::Html));
    assert!(!has_toc_flags(&tokens(&without)));
}

#[test]
fn test_odt_uses_existing_explicit_template() {
    let (dir, builder) = isolated_builder();
    let template = dir.path().join("house.odt");
    fs::write(&template, b"odt").unwrap();
    fs::write(dir.path().join("template.odt"), b"odt").unwrap();

    let spec = builder.build(
        &ConversionRequest::new("notes.md", OutputFormat::Odt).with_template(Some(template.clone())),
    );

    let position = tokens(&spec).iter().position(|t| t == "--reference-doc").unwrap();
    assert_eq!(tokens(&spec)[position + 1], template.to_string_lossy());
    assert_eq!(tokens(&spec).iter().filter(|t| *t == "--reference-doc").count(), 1);
}

#[test]
fn test_odt_uses_default_template_when_not_supplied() {
    let (dir, builder) = isolated_builder();
    let default = dir.path().join("template.odt");
    fs::write(&default, b"odt").unwrap();

    let spec = builder.build(&ConversionRequest::new("notes.md", OutputFormat::Odt));

    let position = tokens(&spec).iter().position(|t| t == "--reference-doc").unwrap();
    assert_eq!(tokens(&spec)[position + 1], default.to_string_lossy());
}

#[test]
fn test_odt_without_any_template() {
    let (dir, builder) = isolated_builder();

    let spec = builder.build(
        &ConversionRequest::new("notes.md", OutputFormat::Odt)
            .with_template(Some(dir.path().join("missing.odt"))),
    );
    assert!(!has_reference_doc(&tokens(&spec)));
}

#[test]
fn test_docx_ignores_toc_and_template() {
    let (dir, builder) = isolated_builder();
    let template = dir.path().join("template.odt");
    fs::write(&template, b"odt").unwrap();

    let spec = builder.build(
        &ConversionRequest::new("notes.md", OutputFormat::Docx)
            .with_toc(true)
            .with_template(Some(template)),
    );

    assert!(!has_toc_flags(&tokens(&spec)));
    assert!(!has_reference_doc(&tokens(&spec)));
    assert_eq!(tokens(&spec), ["pandoc", "notes.md", "-o", "notes.docx"]);
}

#[test]
fn test_scenario_odt_without_template() {
    let (_dir, builder) = isolated_builder();
    let spec = builder.build(&ConversionRequest::new("notes.md", OutputFormat::Odt));

    assert_eq!(tokens(&spec), ["pandoc", "notes.md", "-s", "-o", "notes.odt"]);
}

#[test]
fn test_scenario_html_with_toc() {
    let (_dir, builder) = isolated_builder();
    let spec = builder.build(&ConversionRequest::new("notes.md", OutputFormat::Html).with_toc(true));

    assert_eq!(
        tokens(&spec),
        [
            "pandoc",
            "notes.md",
            "-s",
            "--css=styles.css",
            "--toc",
            "--toc-depth=2",
            "-o",
            "notes.html"
        ]
    );
}

#[test]
fn test_explicit_output_with_mismatched_extension_is_kept() {
    let (_dir, builder) = isolated_builder();
    let spec = builder.build(
        &ConversionRequest::new("notes.md", OutputFormat::Odt)
            .with_output(Some(PathBuf::from("notes.docx"))),
    );

    assert_eq!(spec.output(), PathBuf::from("notes.docx").as_path());
    assert_eq!(tokens(&spec).last().unwrap(), "notes.docx");
}
