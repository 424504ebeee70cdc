//! Dictionary words grouped by their letter multiset.

use std::collections::{hash_map::DefaultHasher, HashMap};
use std::fs::File;
use std::hash::BuildHasherDefault;
use std::io::prelude::*;
use std::path::Path;

use log::{debug, warn};

use crate::error::Result;
use crate::occurrences::{word_occurrences, Occurrences};

type Index = HashMap<Occurrences, Vec<Box<str>>, BuildHasherDefault<DefaultHasher>>;

/// Maps each letter multiset to the dictionary words spelled with exactly
/// those letters. The empty multiset never has an entry, which is what
/// keeps the sentence search from recursing without consuming letters.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    index: Index,
    words: usize,
}

impl Dictionary {
    /// Builds the index from `words`, keeping their original spelling and
    /// order within each multiset. Surrounding whitespace is trimmed and
    /// entries with no characters left are rejected.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::default();

        for word in words {
            let word = word.as_ref().trim();
            let key = word_occurrences(word);
            if key.is_empty() {
                warn!("skipping dictionary entry {:?}: it has no letters", word);
                continue;
            }

            let bucket = dictionary.index.entry(key).or_insert_with(Vec::new);
            if bucket.iter().all(|existing| &**existing != word) {
                bucket.push(word.into());
                dictionary.words += 1;
            }
        }

        debug!(
            "built dictionary of {} words over {} letter multisets",
            dictionary.words,
            dictionary.index.len()
        );
        dictionary
    }

    /// Reads a newline-separated word list. Blank lines are ignored.
    pub fn from_dictionary_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path.as_ref())?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        debug!("loading dictionary from {}", path.as_ref().display());
        Ok(Self::from_words(non_blank_lines(&contents)))
    }

    /// The English word list compiled into the binary.
    pub fn from_default_list() -> Self {
        Self::from_words(non_blank_lines(include_str!("english-words")))
    }

    /// Keeps only the words with between `min_letters` and `max_letters`
    /// letters, inclusive.
    pub fn with_letter_bounds(mut self, min_letters: usize, max_letters: usize) -> Self {
        self.index.retain(|key, _| {
            let total = key.total();
            total >= min_letters && total <= max_letters
        });
        self.words = self.index.values().map(Vec::len).sum();

        debug!(
            "restricted dictionary to words of {}..={} letters, {} words left",
            min_letters, max_letters, self.words
        );
        self
    }

    /// Words spelled with exactly the letters in `occurrences`, or an empty
    /// slice when there are none.
    pub fn lookup(&self, occurrences: &Occurrences) -> &[Box<str>] {
        self.index.get(occurrences).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Dictionary words that are anagrams of `word`, possibly including
    /// `word` itself.
    pub fn word_anagrams(&self, word: &str) -> &[Box<str>] {
        self.lookup(&word_occurrences(word))
    }

    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}

fn non_blank_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents.lines().map(str::trim).filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(slice: &[Box<str>]) -> Vec<&str> {
        slice.iter().map(|w| &**w).collect()
    }

    #[test]
    fn test_word_anagrams() {
        let dictionary = Dictionary::from_words(vec!["married", "admirer", "player", "parley", "replay"]);
        assert_eq!(words(dictionary.word_anagrams("married")), vec!["married", "admirer"]);
        assert_eq!(words(dictionary.word_anagrams("player")), vec!["player", "parley", "replay"]);
        assert_eq!(words(dictionary.word_anagrams("Pearly")), vec!["player", "parley", "replay"]);
        assert!(dictionary.word_anagrams("nothingmatchesme").is_empty());
    }

    #[test]
    fn test_lookup_keeps_original_case() {
        let dictionary = Dictionary::from_words(vec!["Sean", "sane"]);
        assert_eq!(words(dictionary.lookup(&word_occurrences("aens"))), vec!["Sean", "sane"]);
    }

    #[test]
    fn test_empty_entries_rejected() {
        let dictionary = Dictionary::from_words(vec!["", "   ", "a"]);
        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.lookup(&Occurrences::empty()).is_empty());
    }

    #[test]
    fn test_duplicates_kept_once() {
        let dictionary = Dictionary::from_words(vec!["eat", "tea", "eat"]);
        assert_eq!(dictionary.len(), 2);
        assert_eq!(words(dictionary.word_anagrams("ate")), vec!["eat", "tea"]);
    }

    #[test]
    fn test_with_letter_bounds() {
        let dictionary = Dictionary::from_words(vec!["a", "as", "sea", "sane"]).with_letter_bounds(2, 3);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.word_anagrams("a").is_empty());
        assert_eq!(words(dictionary.word_anagrams("sa")), vec!["as"]);
        assert!(dictionary.word_anagrams("sean").is_empty());
    }

    #[test]
    fn test_default_list() {
        let dictionary = Dictionary::from_default_list();
        assert!(!dictionary.is_empty());
        let anagrams = words(dictionary.word_anagrams("tea"));
        assert!(anagrams.contains(&"eat"));
        assert!(anagrams.contains(&"ate"));
    }
}
