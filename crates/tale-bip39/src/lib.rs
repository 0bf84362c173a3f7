//! # tale-bip39
//!
//! BIP39 mnemonic handling: convert between seed phrases and entropy.
//!
//! ```text
//! entropy (128..256 bits) ++ SHA-256(entropy)[0..len/32 bits]
//!     │
//!     └── split into 11-bit groups ──► word indices ──► "abandon ability ..."
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use tale_bip39::{mnemonic_to_entropy, entropy_to_mnemonic, Wordlist};
//!
//! let entropy = mnemonic_to_entropy(phrase, Wordlist::english())?;
//! let phrase = entropy_to_mnemonic(&entropy, Wordlist::english());
//! ```

pub mod mnemonic;
pub mod wordlist;

pub use mnemonic::{entropy_to_mnemonic, mnemonic_to_entropy, VALID_WORD_COUNTS};
pub use wordlist::{load_wordlist, Wordlist, WORDLIST_SIZE};

pub use tale_core::{Entropy, Error, Result};
