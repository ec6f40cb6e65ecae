use qa_core::config::RetrievalConfig;
use qa_core::types::{Answer, AnswerMetadata, DocumentId, RankedFile, RankedSentence};

#[test]
fn golden_answer_serialization() {
    // 1. Construct a fixed answer
    let answer = Answer {
        files: vec![RankedFile {
            id: DocumentId::from("python.txt"),
            score: 1.5,
            matched_terms: vec!["python".to_string()],
        }],
        sentences: vec![RankedSentence {
            text: "Python was created by Guido van Rossum.".to_string(),
            score: 0.75,
            density: 0.25,
            query_term_matches: 1,
            total_tokens: 4,
        }],
        metadata: AnswerMetadata {
            query: "who created python".to_string(),
            query_terms: vec!["created".to_string(), "python".to_string()],
            corpus_fingerprint: "sha256:mock".to_string(),
            documents_considered: 3,
            sentences_considered: 12,
            file_matches: 7,
            sentence_matches: 2,
        },
    };

    // 2. Serialize
    let json_str = serde_json::to_string_pretty(&answer).unwrap();

    // 3. Key order: files, sentences, metadata
    let files_pos = json_str.find("\"files\":").expect("Missing files key");
    let sentences_pos = json_str.find("\"sentences\":").expect("Missing sentences key");
    let metadata_pos = json_str.find("\"metadata\":").expect("Missing metadata key");
    assert!(files_pos < sentences_pos);
    assert!(sentences_pos < metadata_pos);

    // 4. Snapshot
    const EXPECTED_JSON: &str = r#"{
      "files": [
        {
          "id": "python.txt",
          "score": 1.5,
          "matched_terms": ["python"]
        }
      ],
      "sentences": [
        {
          "text": "Python was created by Guido van Rossum.",
          "score": 0.75,
          "density": 0.25,
          "query_term_matches": 1,
          "total_tokens": 4
        }
      ],
      "metadata": {
        "query": "who created python",
        "query_terms": ["created", "python"],
        "corpus_fingerprint": "sha256:mock",
        "documents_considered": 3,
        "sentences_considered": 12,
        "file_matches": 7,
        "sentence_matches": 2
      }
    }"#;

    let normalized_actual: String = json_str.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized_expected: String = EXPECTED_JSON.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(normalized_actual, normalized_expected, "JSON structure mismatch against golden snapshot");

    // 5. Roundtrip
    let deserialized: Answer = serde_json::from_str(&json_str).expect("Deserialization failed");
    assert_eq!(deserialized, answer);
}

#[test]
fn golden_default_config_serialization() {
    let json = serde_json::to_string(&RetrievalConfig::v0()).unwrap();

    assert_eq!(json, r#"{"file_matches":7,"sentence_matches":2}"#);
}
