use std::fs;

use qa_core::analysis::Tokenizer;
use qa_core::config::{ConfigError, RetrievalConfig};
use tempfile::tempdir;

#[test]
fn defaults_match_v0() {
    let config = RetrievalConfig::default();

    assert_eq!(config, RetrievalConfig::v0());
    assert_eq!(config.file_matches, RetrievalConfig::DEFAULT_FILE_MATCHES);
    assert_eq!(config.sentence_matches, RetrievalConfig::DEFAULT_SENTENCE_MATCHES);
    assert_eq!(config.file_matches.get(), 7);
    assert_eq!(config.sentence_matches.get(), 2);
    assert!(config.stopwords.is_none());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("qa.json");
    fs::write(&path, r#"{"sentence_matches": 5}"#).unwrap();

    let config = RetrievalConfig::from_path(&path).unwrap();

    assert_eq!(config.file_matches.get(), 7);
    assert_eq!(config.sentence_matches.get(), 5);
}

#[test]
fn zero_limit_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("qa.json");
    fs::write(&path, r#"{"file_matches": 0}"#).unwrap();

    let result = RetrievalConfig::from_path(&path);

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();

    let result = RetrievalConfig::from_path(&dir.path().join("absent.json"));

    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn configured_stopwords_drive_the_tokenizer() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("qa.json");
    fs::write(&path, r#"{"stopwords": ["Python"]}"#).unwrap();

    let config = RetrievalConfig::from_path(&path).unwrap();
    let tokens = config.tokenizer().tokenize("the python language");

    assert_eq!(tokens, vec!["the", "language"]);
}
