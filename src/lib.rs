//! Enumerates the anagram sentences of a sentence over a fixed dictionary.
//!
//! Letters are handled as [`Occurrences`], a canonical multiset. The
//! [`Dictionary`] groups its words by multiset, and the search repeatedly
//! picks a sub-multiset of the remaining letters that spells some word,
//! until no letters are left.
//!
//! ```
//! use sentence_anagrams::{sentence_anagrams, Dictionary};
//!
//! let dictionary = Dictionary::from_words(vec!["eat", "tea", "ate"]);
//! let sentences = sentence_anagrams(&dictionary, &["eat"]).unwrap();
//! assert_eq!(sentences.len(), 3);
//! ```

pub mod anagrams;
pub mod dictionary;
pub mod error;
pub mod occurrences;

pub use crate::anagrams::{for_each_sentence, sentence_anagrams, sentence_anagrams_with, SearchOptions, Sentence};
pub use crate::dictionary::Dictionary;
pub use crate::error::{AnagramError, Result};
pub use crate::occurrences::{combinations, sentence_occurrences, subtract, word_occurrences, Occurrences};
