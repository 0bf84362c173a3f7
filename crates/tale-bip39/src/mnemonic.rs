//! Entropy <-> mnemonic conversion
//!
//! For 12 words: 128 bits entropy + 4 bits checksum = 132 bits.

use sha2::{Digest, Sha256};
use tale_core::{Entropy, Error, Result, VALID_ENTROPY_LENGTHS};
use zeroize::Zeroize;

use crate::Wordlist;

/// Word counts accepted by BIP39
pub const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

const INDEX_BITS: usize = 11;
const INDEX_MASK: u32 = 0x7FF;

/// Leading `bits` bits of SHA-256(entropy), right-aligned
fn checksum(entropy: &[u8], bits: usize) -> u32 {
    let digest = Sha256::digest(entropy);
    (digest[0] >> (8 - bits)) as u32
}

/// Split entropy ++ checksum into 11-bit word indices
fn to_indices(entropy: &[u8], checksum: u32, checksum_bits: usize) -> Vec<u16> {
    let mut indices = Vec::with_capacity((entropy.len() * 8 + checksum_bits) / INDEX_BITS);
    let chunks = entropy
        .iter()
        .map(|&byte| (byte as u32, 8))
        .chain(std::iter::once((checksum, checksum_bits)));

    let mut acc: u32 = 0;
    let mut acc_bits = 0;
    for (value, bits) in chunks {
        acc = (acc << bits) | value;
        acc_bits += bits;
        while acc_bits >= INDEX_BITS {
            acc_bits -= INDEX_BITS;
            indices.push(((acc >> acc_bits) & INDEX_MASK) as u16);
            acc &= (1 << acc_bits) - 1;
        }
    }
    indices
}

/// Convert entropy to a space-separated mnemonic phrase
pub fn entropy_to_mnemonic(entropy: &Entropy, wordlist: &Wordlist) -> String {
    let checksum_bits = entropy.checksum_bits();
    let indices = to_indices(
        entropy.as_bytes(),
        checksum(entropy.as_bytes(), checksum_bits),
        checksum_bits,
    );

    tracing::trace!(words = indices.len(), "encoded mnemonic");
    indices
        .into_iter()
        .map(|index| wordlist.word(index))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a mnemonic phrase back to its entropy, verifying the checksum
pub fn mnemonic_to_entropy(mnemonic: &str, wordlist: &Wordlist) -> Result<Entropy> {
    let words: Vec<&str> = mnemonic.split_whitespace().collect();
    if !VALID_WORD_COUNTS.contains(&words.len()) {
        return Err(Error::InvalidWordCount { got: words.len() });
    }

    let checksum_bits = words.len() / 3;
    let entropy_len = (words.len() * INDEX_BITS - checksum_bits) / 8;
    debug_assert!(VALID_ENTROPY_LENGTHS.contains(&entropy_len));

    let mut bytes = Vec::with_capacity(entropy_len);
    let mut acc: u32 = 0;
    let mut acc_bits = 0;
    for word in &words {
        let index = wordlist
            .index_of(word)
            .ok_or_else(|| Error::UnknownWord(word.to_lowercase()))?;

        acc = (acc << INDEX_BITS) | index as u32;
        acc_bits += INDEX_BITS;
        while acc_bits >= 8 && bytes.len() < entropy_len {
            acc_bits -= 8;
            bytes.push((acc >> acc_bits) as u8);
            acc &= (1 << acc_bits) - 1;
        }
    }

    // Whatever is left in the accumulator is the checksum
    let matches = acc_bits == checksum_bits && acc == checksum(&bytes, checksum_bits);
    let result = if matches {
        Entropy::from_slice(&bytes)
    } else {
        tracing::warn!(words = words.len(), "mnemonic checksum mismatch");
        Err(Error::InvalidChecksum)
    };

    bytes.zeroize();
    result
}
