//! Tests for configuration loading

use crate::{CodegenConfig, CodegenError, FormatConfig, IndentStyle, LineEnding};
use std::io::Write;

#[test]
fn test_defaults() {
    let config = CodegenConfig::default();

    assert!(config.imports.ignored_packages.is_empty());
    assert_eq!(config.format.indent, IndentStyle::Spaces4);
    assert_eq!(config.format.line_ending, LineEnding::Lf);
}

#[test]
fn test_parse_full_document() {
    let config = CodegenConfig::from_toml_str(
        r#"
[imports]
ignored_packages = ["java.lang", "com.example.shared"]

[format]
indent = "tabs"
line_ending = "crlf"
"#,
    )
    .unwrap();

    assert_eq!(
        config.imports.ignored_packages,
        vec!["java.lang", "com.example.shared"]
    );
    assert_eq!(config.format.indent, IndentStyle::Tabs);
    assert_eq!(config.format.line_ending, LineEnding::CrLf);

    let deps = config.dependency_manager();
    assert!(deps.is_ignored("java.lang.String"));
    assert!(deps.is_ignored("com.example.shared.Id"));
    assert!(!deps.is_ignored("com.example.Id"));
}

#[test]
fn test_missing_sections_use_defaults() {
    let config = CodegenConfig::from_toml_str("[format]\nindent = \"spaces2\"\n").unwrap();

    assert_eq!(config.format.indent, IndentStyle::Spaces2);
    assert_eq!(config.format.line_ending, LineEnding::Lf);
    assert!(config.imports.ignored_packages.is_empty());
}

#[test]
fn test_unknown_indent_is_rejected() {
    let err = CodegenConfig::from_toml_str("[format]\nindent = \"spaces3\"\n").unwrap_err();
    assert!(matches!(err, CodegenError::Toml(_)));
}

#[test]
fn test_invalid_package_is_rejected() {
    let err = CodegenConfig::from_toml_str("[imports]\nignored_packages = [\"java.\"]\n")
        .unwrap_err();
    assert!(matches!(err, CodegenError::Config(_)));
    assert!(err.to_string().contains("java."));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[imports]\nignored_packages = [\"java.lang\"]").unwrap();

    let config = CodegenConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.imports.ignored_packages, vec!["java.lang"]);
}

#[test]
fn test_load_missing_file_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = CodegenConfig::load(Some(dir.path().join("modelgen.toml").as_path())).unwrap();
    assert_eq!(config, CodegenConfig::default());
}

#[test]
fn test_builder_methods() {
    let config = CodegenConfig::new()
        .with_ignored_package("java.lang")
        .with_indent(IndentStyle::Spaces2)
        .with_line_ending(LineEnding::CrLf);

    assert_eq!(config.imports.ignored_packages, vec!["java.lang"]);
    assert_eq!(config.format.indent.as_str(), "  ");
    assert_eq!(config.format.line_ending.as_str(), "\r\n");
}

#[test]
fn test_indent_block_skips_empty_lines() {
    let format = FormatConfig::default();
    assert_eq!(format.indent_block("a\n\nb"), "    a\n\n    b");
    assert_eq!(format.indent.indent(2), "        ");

    let crlf = FormatConfig {
        indent: IndentStyle::Tabs,
        line_ending: LineEnding::CrLf,
    };
    assert_eq!(crlf.indent_block("a\r\nb"), "\ta\r\n\tb");
    assert_eq!(crlf.lines(["x", "y"]), "x\r\ny\r\n");
}
