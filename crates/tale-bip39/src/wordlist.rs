//! BIP39 wordlists
//!
//! The English list is compiled in. Other lists can be loaded from a
//! newline-separated file and are validated the same way: exactly 2048
//! unique words, one 11-bit index each.

use std::collections::HashMap;
use std::path::Path;

use lazy_static::lazy_static;
use tale_core::{Error, Result};

/// Number of words in a BIP39 wordlist (2^11)
pub const WORDLIST_SIZE: usize = 2048;

const ENGLISH_TEXT: &str = include_str!("../data/english.txt");

lazy_static! {
    static ref ENGLISH: Wordlist = {
        tracing::debug!("building english BIP39 wordlist");
        Wordlist::build(ENGLISH_TEXT.lines().map(str::to_string).collect())
    };
}

/// An ordered list of 2048 words with a reverse index
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
    index: HashMap<String, u16>,
}

impl Wordlist {
    /// The standard English list
    pub fn english() -> &'static Wordlist {
        &ENGLISH
    }

    /// Parse a newline-separated wordlist
    pub fn parse(text: &str) -> Result<Self> {
        let words: Vec<String> = text
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();

        if words.len() != WORDLIST_SIZE {
            return Err(Error::MalformedWordlist(format!(
                "expected {} words, got {}",
                WORDLIST_SIZE,
                words.len()
            )));
        }
        if let Some(word) = words.iter().find(|w| w.contains(char::is_whitespace)) {
            return Err(Error::MalformedWordlist(format!("'{}' is not a single word", word)));
        }

        let list = Self::build(words);
        if list.index.len() != WORDLIST_SIZE {
            return Err(Error::MalformedWordlist(format!(
                "{} duplicate words",
                WORDLIST_SIZE - list.index.len()
            )));
        }
        Ok(list)
    }

    fn build(words: Vec<String>) -> Self {
        let index = words
            .iter()
            .enumerate()
            .map(|(i, word)| (word.clone(), i as u16))
            .collect();
        Self { words, index }
    }

    /// Word at an 11-bit index
    pub fn word(&self, index: u16) -> &str {
        &self.words[index as usize]
    }

    /// Index of a word (case-insensitive)
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word.to_lowercase().as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Load a wordlist file, failing if it is missing or malformed
pub fn load_wordlist(path: impl AsRef<Path>) -> Result<Wordlist> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let list = Wordlist::parse(&text)?;
    tracing::debug!(path = %path.display(), "loaded wordlist");
    Ok(list)
}
