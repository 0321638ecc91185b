use std::io::Write;
use std::sync::Arc;
use std::thread;

use lexis::error::LexisError;
use lexis::spelling::{
    CorrectionTable, DictionaryConfig, DictionaryIndex, WordVerifier, is_greater, ordinal_cmp,
};
use tempfile::NamedTempFile;

fn write_lines(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn sample_index() -> DictionaryIndex {
    let file = write_lines(&["an", "and", "bat", "cat"]);
    let config = DictionaryConfig::default().with_verify_order(true);
    DictionaryIndex::open_with_config(file.path(), config).unwrap()
}

#[test]
fn test_lookup_scenarios() {
    let index = sample_index();
    assert!(index.contains("cat"));
    assert!(!index.contains("dog"));
    assert!(!index.contains("cat5"));

    let index = DictionaryIndex::from_words(["an", "and"], DictionaryConfig::default()).unwrap();
    assert!(!index.contains("a"));

    let empty: [&str; 0] = [];
    let index = DictionaryIndex::from_words(empty, DictionaryConfig::default()).unwrap();
    assert!(!index.contains("anything"));
}

#[test]
fn test_comparator_scenarios() {
    assert!(!is_greater("an", "and"));
    assert!(is_greater("and", "an"));
    assert!(!is_greater("cat", "cat"));
    assert!(is_greater("cat", "bat"));
}

#[test]
fn test_missing_word_list_is_a_load_error() {
    let result = DictionaryIndex::open("/nonexistent/words_alpha.txt");
    assert!(matches!(result, Err(LexisError::Load { .. })));
}

#[test]
fn test_unsorted_word_list_is_rejected_when_verified() {
    let file = write_lines(&["an", "and", "cat", "bat"]);

    let config = DictionaryConfig::default().with_verify_order(true);
    let result = DictionaryIndex::open_with_config(file.path(), config);
    assert!(matches!(
        result,
        Err(LexisError::DataIntegrity { position: 3, .. })
    ));

    let index = DictionaryIndex::open_with_config(
        file.path(),
        DictionaryConfig::default().with_verify_order(false),
    )
    .unwrap();
    assert_eq!(index.len(), 4);
}

#[test]
fn test_large_generated_list() {
    let mut words = Vec::new();
    for a in 'a'..='z' {
        for b in 'a'..='z' {
            words.push(format!("{a}{b}"));
            words.push(format!("{a}{b}{b}"));
        }
    }
    words.sort_by(|a, b| ordinal_cmp(a, b));
    let file = write_lines(&words.iter().map(String::as_str).collect::<Vec<_>>());

    let index = DictionaryIndex::open_with_config(
        file.path(),
        DictionaryConfig::default().with_verify_order(true),
    )
    .unwrap();
    assert_eq!(index.len(), 26 * 26 * 2);

    for word in &words {
        assert!(index.contains(word), "{word:?} should be found");
    }
    for missing in ["a", "abc", "zzzz", "aab", "mno"] {
        assert!(!index.contains(missing), "{missing:?} should be missing");
    }
}

#[test]
fn test_handoff_to_corrector() {
    let index = Arc::new(sample_index());
    let corrections = write_lines(&["# recognizer confusions", "cta cat", "bal bat"]);
    let table = CorrectionTable::load_from_file(corrections.path()).unwrap();
    let verifier = WordVerifier::new(index, table);

    let labels: Vec<String> = verifier
        .verify_all(["cat", "cta", "bal", "dog"])
        .iter()
        .map(|result| result.label())
        .collect();

    assert_eq!(labels, vec!["cat -> cat", "cta -> cat", "bal -> bat", "dog -> dog"]);
}

#[test]
fn test_concurrent_readers() {
    let index = Arc::new(sample_index());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                for _ in 0..100 {
                    assert!(index.contains("bat"));
                    assert!(!index.contains("dog"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
