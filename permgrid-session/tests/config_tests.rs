use permgrid_session::{ConfigError, EditorConfig};
use permgrid_types::Effect;
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn defaults() {
    let c = EditorConfig::default();
    assert_eq!(c.legacy_default_effect, Effect::Allow);
    assert_eq!(c.unset_label, "NONE");
    assert!(!c.keyword_case_sensitive);
    assert_eq!(c.ingest_options().legacy_default_effect, Effect::Allow);
}

#[test]
fn empty_toml_is_default() {
    assert_eq!(EditorConfig::from_toml_str("").unwrap(), EditorConfig::default());
}

#[test]
fn full_toml() {
    let c = EditorConfig::from_toml_str(
        r#"
        [ingest]
        legacy-default-effect = "DENY"

        [preview]
        unset-label = "(none)"

        [filter]
        keyword-case-sensitive = true
        "#,
    )
    .unwrap();
    assert_eq!(c.legacy_default_effect, Effect::Deny);
    assert_eq!(c.unset_label, "(none)");
    assert!(c.keyword_case_sensitive);
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let c = EditorConfig::from_toml_str("[preview]\nunset-label = \"-\"\n").unwrap();
    assert_eq!(c.unset_label, "-");
    assert_eq!(c.legacy_default_effect, Effect::Allow);
}

#[test]
fn invalid_effect_is_parse_error() {
    let err = EditorConfig::from_toml_str("[ingest]\nlegacy-default-effect = \"MAYBE\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_missing_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let c = EditorConfig::load_from(&dir.path().join("permgrid.toml"));
    assert_eq!(c, EditorConfig::default());
}

#[test]
fn load_malformed_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("permgrid.toml");
    std::fs::write(&path, "[ingest\nthis is not toml").unwrap();
    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
    assert!(EditorConfig::read_from(&path).is_err());
}

#[test]
fn load_valid_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[ingest]\nlegacy-default-effect = \"UNSET\"").unwrap();
    let c = EditorConfig::load_from(file.path());
    assert_eq!(c.legacy_default_effect, Effect::Unset);
}
