//! Error types for anagram search.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnagramError {
    /// `subtract` was asked to remove letters the pool does not hold.
    #[error("invalid subtraction: cannot remove {requested} of {character:?}, only {available} available")]
    InvalidSubtraction {
        character: char,
        available: usize,
        requested: usize,
    },

    /// Reading a word list failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, AnagramError>;
