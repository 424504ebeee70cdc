//! Depth-first search for sentence anagrams.

use log::trace;

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::occurrences::{combinations, sentence_occurrences, subtract, Occurrences};

/// An ordered sequence of dictionary words.
pub type Sentence<'a> = Vec<&'a str>;

/// Bounds on the number of words in each generated sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub min_words: usize,
    pub max_words: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            min_words: 0,
            max_words: usize::MAX,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    pub fn max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }
}

/// Every sentence of dictionary words using exactly the letters of
/// `sentence`. The empty sentence has one anagram: itself.
pub fn sentence_anagrams<'a, S: AsRef<str>>(
    dictionary: &'a Dictionary,
    sentence: &[S],
) -> Result<Vec<Sentence<'a>>> {
    sentence_anagrams_with(dictionary, sentence, SearchOptions::default())
}

/// Like [`sentence_anagrams`], keeping only sentences whose word count is
/// within `options`.
pub fn sentence_anagrams_with<'a, S: AsRef<str>>(
    dictionary: &'a Dictionary,
    sentence: &[S],
    options: SearchOptions,
) -> Result<Vec<Sentence<'a>>> {
    let mut sentences = vec![];
    for_each_sentence(dictionary, &sentence_occurrences(sentence), options, |s| {
        sentences.push(s)
    })?;
    Ok(sentences)
}

/// Calls `f` with each sentence spelling exactly `occurrences`, as the
/// search finds it.
pub fn for_each_sentence<'a, F: FnMut(Sentence<'a>)>(
    dictionary: &'a Dictionary,
    occurrences: &Occurrences,
    options: SearchOptions,
    mut f: F,
) -> Result<()> {
    if options.min_words > options.max_words {
        return Ok(());
    }

    let mut prefix = vec![];
    search(dictionary, occurrences, options, &mut prefix, &mut f)
}

fn search<'a>(
    dictionary: &'a Dictionary,
    occurrences: &Occurrences,
    options: SearchOptions,
    prefix: &mut Vec<&'a str>,
    f: &mut dyn FnMut(Sentence<'a>),
) -> Result<()> {
    if occurrences.is_empty() {
        if prefix.len() >= options.min_words {
            f(prefix.clone());
        }
        return Ok(());
    }

    if prefix.len() >= options.max_words {
        return Ok(());
    }

    for piece in combinations(occurrences) {
        // Covers the empty piece too: the dictionary has no empty entry.
        let words = dictionary.lookup(&piece);
        if words.is_empty() {
            continue;
        }

        let remaining = subtract(occurrences, &piece)?;
        trace!(
            "{} candidate(s) after {:?}, {} letters left",
            words.len(),
            prefix,
            remaining.total()
        );

        for word in words {
            prefix.push(word);
            search(dictionary, &remaining, options, prefix, f)?;
            prefix.pop();
        }
    }

    Ok(())
}
