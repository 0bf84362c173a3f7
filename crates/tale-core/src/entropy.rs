//! Entropy buffer shared between the mnemonic and text codecs
//!
//! ```text
//! bytes   bits   checksum bits   words
//!   16     128         4           12
//!   20     160         5           15
//!   24     192         6           18
//!   28     224         7           21
//!   32     256         8           24
//! ```

use zeroize::Zeroize;

use crate::{Error, Result};

/// Entropy sizes accepted by BIP39
pub const VALID_ENTROPY_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

/// Entropy size used by the syllable and story codecs
pub const STORY_ENTROPY_LEN: usize = 16;

/// Seed entropy. Zeroized on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Entropy {
    bytes: Vec<u8>,
}

impl Zeroize for Entropy {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl Drop for Entropy {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Entropy {
    /// Wrap bytes, rejecting sizes BIP39 cannot express
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if !VALID_ENTROPY_LENGTHS.contains(&bytes.len()) {
            return Err(Error::InvalidEntropyLength {
                expected: &VALID_ENTROPY_LENGTHS,
                got: bytes.len(),
            });
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Number of checksum bits appended by BIP39 (one per 32 entropy bits)
    pub fn checksum_bits(&self) -> usize {
        self.bytes.len() / 4
    }

    /// Number of mnemonic words this entropy encodes to
    pub fn word_count(&self) -> usize {
        (self.bit_len() + self.checksum_bits()) / 11
    }
}

impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for Entropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entropy({} bytes)", self.bytes.len())
    }
}
