//! # tale-core
//!
//! Shared foundation for the seed-tale codecs.
//!
//! Every codec crate (mnemonic, syllables, story, library) reports failures
//! through the single [`Error`] enum defined here, so a caller composing
//! several codecs handles one taxonomy:
//!
//! ```text
//! Length      entropy size / word count / sentence entropy outside the allowed set
//! Vocabulary  a word that is not in its table
//! Checksum    BIP39 checksum mismatch
//! Parse       unmatched syllables, wrong sentence count, unfillable slots
//! ```
//!
//! [`Entropy`] is the secret buffer passed between codecs. It zeroizes its
//! bytes when dropped and never prints them in `Debug` output.

pub mod entropy;
pub mod error;

pub use entropy::{Entropy, STORY_ENTROPY_LEN, VALID_ENTROPY_LENGTHS};
pub use error::{Error, ErrorKind};

/// Result type for seed-tale operations
pub type Result<T> = std::result::Result<T, Error>;
