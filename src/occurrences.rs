//! Letter multisets and the operations the sentence search is built from.

use std::collections::BTreeMap;
use std::iter::FromIterator;

use crate::error::{AnagramError, Result};

/// A multiset of characters in canonical form: `(character, count)` pairs
/// sorted by character, with lowercase characters, no repeats and no zero
/// counts. Two multisets are equal exactly when their pair lists are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Occurrences(Vec<(char, usize)>);

impl Occurrences {
    pub fn empty() -> Self {
        Occurrences(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[(char, usize)] {
        &self.0
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Total number of letters, counting repeats.
    pub fn total(&self) -> usize {
        self.0.iter().map(|&(_, count)| count).sum()
    }

    pub fn count(&self, c: char) -> usize {
        match self.0.binary_search_by_key(&c, |&(key, _)| key) {
            Ok(i) => self.0[i].1,
            Err(_) => 0,
        }
    }

    fn from_counts(counts: BTreeMap<char, usize>) -> Self {
        Occurrences(counts.into_iter().filter(|&(_, count)| count > 0).collect())
    }
}

/// Collects arbitrary pairs into canonical form: characters are lowercased,
/// repeated characters are summed and zero counts dropped.
impl FromIterator<(char, usize)> for Occurrences {
    fn from_iter<I: IntoIterator<Item = (char, usize)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (c, count) in iter {
            for lc in c.to_lowercase() {
                *counts.entry(lc).or_insert(0) += count;
            }
        }
        Occurrences::from_counts(counts)
    }
}

impl<'a> IntoIterator for &'a Occurrences {
    type Item = &'a (char, usize);
    type IntoIter = std::slice::Iter<'a, (char, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Lowercases `word` and counts each character. Non-alphabetic characters
/// are counted like any other.
pub fn word_occurrences(word: &str) -> Occurrences {
    let mut counts = BTreeMap::new();
    for c in word.chars().flat_map(char::to_lowercase) {
        *counts.entry(c).or_insert(0) += 1;
    }
    Occurrences::from_counts(counts)
}

/// The occurrences of all words of `sentence` taken together.
pub fn sentence_occurrences<S: AsRef<str>>(sentence: &[S]) -> Occurrences {
    let joined: String = sentence.iter().map(AsRef::as_ref).collect();
    word_occurrences(&joined)
}

/// Every sub-multiset of `occurrences`, from the empty one up to
/// `occurrences` itself. For each pair `(c, n)` any count in `0..=n` is
/// chosen independently, so there are `(n1 + 1) * (n2 + 1) * ...` results.
pub fn combinations(occurrences: &Occurrences) -> Vec<Occurrences> {
    combine(&occurrences.0).into_iter().map(Occurrences).collect()
}

fn combine(pairs: &[(char, usize)]) -> Vec<Vec<(char, usize)>> {
    let (&(c, freq), rest) = match pairs.split_first() {
        Some(split) => split,
        None => return vec![vec![]],
    };

    let tails = combine(rest);
    let mut result = Vec::with_capacity(tails.len() * (freq + 1));
    for i in 0..=freq {
        for tail in &tails {
            // `c` sorts before everything in `rest`, so prepending keeps the
            // pairs canonical.
            let mut combination = Vec::with_capacity(tail.len() + 1);
            if i > 0 {
                combination.push((c, i));
            }
            combination.extend_from_slice(tail);
            result.push(combination);
        }
    }
    result
}

/// Removes the letters of `y` from `x`. Fails with
/// [`AnagramError::InvalidSubtraction`] if `y` is not a sub-multiset of `x`.
pub fn subtract(x: &Occurrences, y: &Occurrences) -> Result<Occurrences> {
    let mut counts: BTreeMap<char, usize> = x.0.iter().copied().collect();

    for &(c, requested) in &y.0 {
        let available = counts.get(&c).copied().unwrap_or(0);
        match available.checked_sub(requested) {
            Some(0) => {
                counts.remove(&c);
            }
            Some(left) => {
                counts.insert(c, left);
            }
            None => {
                return Err(AnagramError::InvalidSubtraction {
                    character: c,
                    available,
                    requested,
                })
            }
        }
    }

    Ok(Occurrences::from_counts(counts))
}
