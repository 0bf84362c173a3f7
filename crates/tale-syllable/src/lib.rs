//! # tale-syllable
//!
//! Byte-per-syllable encoding of entropy into a pronounceable string.
//!
//! ```text
//! 16 bytes ──► 16 syllables ──► "alkauzeibo..." ──► "alka-uzei-bo.."
//!                  │
//!                  └── table[byte], 256 entries generated from
//!                      onset × vowel × coda
//! ```
//!
//! Decoding is greedy longest-match. Some syllables are concatenations of
//! others ("a" + "i" == "ai"), so not every buffer survives a round trip;
//! [`encode_checked`] refuses those buffers instead of handing out a string
//! that decodes to different bytes.

pub mod codec;
pub mod table;

pub use codec::{as_sentences, chunked, clean, decode, encode, encode_checked, encode_list};
pub use table::{generate_table, SyllableTable, TABLE_SIZE};

pub use tale_core::{Error, Result};
