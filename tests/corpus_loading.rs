use std::fs;

use qa_core::corpus::{load_corpus, CorpusError};
use qa_core::document::DocumentId;
use tempfile::tempdir;

#[test]
fn loads_every_file_keyed_by_filename() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("python.txt"), "Python is a language.").unwrap();
    fs::write(dir.path().join("java.txt"), "Java is a language.").unwrap();
    fs::write(dir.path().join("notes.md"), "Markdown counts too.").unwrap();

    let corpus = load_corpus(dir.path()).unwrap();

    assert_eq!(corpus.len(), 3);
    let ids: Vec<&str> = corpus.documents().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["java.txt", "notes.md", "python.txt"]);

    let doc = corpus.get(&DocumentId::from("python.txt")).unwrap();
    assert_eq!(doc.content, "Python is a language.");
    assert!(doc.version.as_str().starts_with("sha256:"));
}

#[test]
fn subdirectories_are_skipped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("top.txt"), "Top level.").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("inner.txt"), "Hidden.").unwrap();

    let corpus = load_corpus(dir.path()).unwrap();

    assert_eq!(corpus.len(), 1);
    assert!(corpus.get(&DocumentId::from("top.txt")).is_some());
}

#[test]
fn empty_directory_is_an_empty_corpus() {
    let dir = tempdir().unwrap();

    let corpus = load_corpus(dir.path()).unwrap();

    assert!(corpus.is_empty());
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempdir().unwrap();

    let result = load_corpus(&dir.path().join("does-not-exist"));

    assert!(matches!(result, Err(CorpusError::Io { .. })));
}

#[test]
fn file_path_is_not_a_corpus() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("single.txt");
    fs::write(&file, "Just one file.").unwrap();

    let result = load_corpus(&file);

    assert!(matches!(result, Err(CorpusError::NotADirectory(_))));
}

#[test]
fn non_utf8_file_aborts_the_load() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("good.txt"), "Fine text.").unwrap();
    fs::write(dir.path().join("bad.bin"), [0u8, 159, 146, 150]).unwrap();

    let result = load_corpus(dir.path());

    assert!(matches!(result, Err(CorpusError::Document { .. })));
}

#[test]
fn fingerprint_tracks_content_not_location() {
    let dir1 = tempdir().unwrap();
    let dir2 = tempdir().unwrap();
    for dir in [&dir1, &dir2] {
        fs::write(dir.path().join("a.txt"), "Alpha.").unwrap();
        fs::write(dir.path().join("b.txt"), "Beta.").unwrap();
    }

    let first = load_corpus(dir1.path()).unwrap();
    let second = load_corpus(dir2.path()).unwrap();
    assert_eq!(first.fingerprint(), second.fingerprint());
    assert!(first.fingerprint().starts_with("sha256:"));

    fs::write(dir2.path().join("b.txt"), "Beta, edited.").unwrap();
    let edited = load_corpus(dir2.path()).unwrap();
    assert_ne!(first.fingerprint(), edited.fingerprint());
}

#[test]
fn document_source_records_the_file_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("source.txt");
    fs::write(&path, "Where it came from.").unwrap();

    let corpus = load_corpus(dir.path()).unwrap();

    let doc = corpus.get(&DocumentId::from("source.txt")).unwrap();
    assert_eq!(doc.source, path.display().to_string());
}
