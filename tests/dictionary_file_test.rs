//! End-to-end search over a dictionary loaded from disk.

use std::io::Write;

use sentence_anagrams::{sentence_anagrams, sentence_anagrams_with, AnagramError, Dictionary, SearchOptions};
use tempfile::NamedTempFile;

fn write_dictionary(lines: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(lines.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_and_search() -> Result<(), AnagramError> {
    let file = write_dictionary("man\nyes\n\nmen\nsay\n  as  \nen\nmy\nsane\nSean\n");
    let dictionary = Dictionary::from_dictionary_path(file.path())?;
    assert_eq!(dictionary.len(), 9);

    let sentences = sentence_anagrams(&dictionary, &["Yes", "man"])?;
    assert_eq!(sentences.len(), 14);
    assert!(sentences.contains(&vec!["yes", "man"]));
    assert!(sentences.contains(&vec!["man", "yes"]));
    assert!(sentences.contains(&vec!["Sean", "my"]));
    assert!(sentences.contains(&vec!["as", "en", "my"]));

    Ok(())
}

#[test]
fn test_letter_and_word_bounds() -> Result<(), AnagramError> {
    let file = write_dictionary("man\nyes\nmen\nsay\nas\nen\nmy\nsane\nSean\n");
    let dictionary = Dictionary::from_dictionary_path(file.path())?.with_letter_bounds(3, 3);

    let sentences = sentence_anagrams(&dictionary, &["yes", "man"])?;
    let mut sorted = sentences.clone();
    sorted.sort();
    assert_eq!(
        sorted,
        vec![
            vec!["man", "yes"],
            vec!["men", "say"],
            vec!["say", "men"],
            vec!["yes", "man"],
        ]
    );

    let one_word = sentence_anagrams_with(&dictionary, &["yes", "man"], SearchOptions::new().max_words(1))?;
    assert!(one_word.is_empty());

    Ok(())
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    match Dictionary::from_dictionary_path(dir.path().join("missing")) {
        Err(AnagramError::Io(_)) => {}
        other => panic!("expected I/O error, got {:?}", other.map(|d| d.len())),
    }
}

#[test]
fn test_default_list_sentence() -> Result<(), AnagramError> {
    let dictionary = Dictionary::from_default_list();
    let sentences = sentence_anagrams(&dictionary, &["listen"])?;
    assert!(sentences.contains(&vec!["silent"]));
    assert!(sentences.contains(&vec!["listen"]));
    Ok(())
}
