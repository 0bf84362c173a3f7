//! Error taxonomy shared by all codecs

/// Errors that can occur while encoding or decoding a seed
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid entropy length: expected one of {expected:?} bytes, got {got}")]
    InvalidEntropyLength {
        expected: &'static [usize],
        got: usize,
    },

    #[error("Invalid mnemonic length: {got} words (expected 12, 15, 18, 21 or 24)")]
    InvalidWordCount { got: usize },

    #[error("Invalid BIP39 word: '{0}'")]
    UnknownWord(String),

    #[error("Invalid mnemonic checksum")]
    InvalidChecksum,

    #[error("Cannot parse syllable at: '{remainder}...'")]
    UnmatchedSyllable { remainder: String },

    #[error("Entropy has no unambiguous syllable string (greedy decoding would not reproduce it)")]
    AmbiguousSyllables,

    #[error("Expected {expected} sentences, got {got}")]
    SentenceCount { expected: usize, got: usize },

    #[error("Could not parse sentence {sentence}: missing {}", .missing.join(", "))]
    MissingSlots {
        sentence: usize,
        missing: Vec<&'static str>,
    },

    #[error("Vocabulary overlap: '{word}' appears in both {first} and {second}")]
    OverlappingVocabulary {
        word: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("Malformed {table} table: {reason}")]
    MalformedTable { table: &'static str, reason: String },

    #[error("Malformed wordlist: {0}")]
    MalformedWordlist(String),

    #[error("Invalid library location: {0}")]
    InvalidLocation(String),

    #[error("Invalid hex name: {0}")]
    InvalidHexName(String),

    #[error("Hex name does not belong to {0}")]
    CoordinateMismatch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Length,
    Vocabulary,
    Checksum,
    Parse,
    /// A compiled-in or loaded table violates its invariants
    Table,
    Location,
    Config,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidEntropyLength { .. } | Error::InvalidWordCount { .. } => ErrorKind::Length,

            Error::UnknownWord(_) => ErrorKind::Vocabulary,

            Error::InvalidChecksum => ErrorKind::Checksum,

            Error::UnmatchedSyllable { .. }
            | Error::AmbiguousSyllables
            | Error::SentenceCount { .. }
            | Error::MissingSlots { .. } => ErrorKind::Parse,

            Error::OverlappingVocabulary { .. }
            | Error::MalformedTable { .. }
            | Error::MalformedWordlist(_) => ErrorKind::Table,

            Error::InvalidLocation(_)
            | Error::InvalidHexName(_)
            | Error::CoordinateMismatch(_) => ErrorKind::Location,

            Error::Config(_) | Error::Io(_) => ErrorKind::Config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Error::InvalidWordCount { got: 11 }.kind(), ErrorKind::Length);
        assert_eq!(Error::UnknownWord("zzz".into()).kind(), ErrorKind::Vocabulary);
        assert_eq!(Error::InvalidChecksum.kind(), ErrorKind::Checksum);
        assert_eq!(
            Error::SentenceCount { expected: 4, got: 3 }.kind(),
            ErrorKind::Parse
        );
    }

    #[test]
    fn test_missing_slots_message() {
        let err = Error::MissingSlots {
            sentence: 2,
            missing: vec!["noun", "verb"],
        };
        assert_eq!(err.to_string(), "Could not parse sentence 2: missing noun, verb");
    }
}
