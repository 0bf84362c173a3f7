//! Syllable table construction
//!
//! Onsets are iterated outermost, then vowels, then codas. Each onset+vowel
//! pair contributes its open form first, then every closed form that is new
//! and not awkward. Generation stops at 256 entries.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Number of syllables, one per byte value
pub const TABLE_SIZE: usize = 256;

pub const ONSETS: [&str; 41] = [
    "", "b", "bl", "br", "ch", "d", "dr", "f", "fl", "fr", "g", "gl", "gr", "h", "j", "k", "kl",
    "kr", "l", "m", "n", "p", "pl", "pr", "r", "s", "sh", "sk", "sl", "sm", "sn", "sp", "st",
    "str", "sw", "t", "tr", "th", "v", "w", "z",
];

pub const VOWELS: [&str; 10] = ["a", "e", "i", "o", "u", "ai", "au", "ei", "ou", "oo"];

pub const CODAS: [&str; 36] = [
    "", "b", "d", "f", "g", "k", "l", "ld", "lk", "lm", "lp", "lt", "m", "n", "nd", "ng", "nk",
    "nt", "p", "r", "rb", "rd", "rk", "rm", "rn", "rp", "rt", "s", "sh", "sk", "sp", "st", "t",
    "th", "x", "z",
];

/// Clusters that are hard to say
pub const AWKWARD: [&str; 6] = ["shsh", "thth", "xx", "zz", "shth", "thsh"];

fn is_awkward(syllable: &str) -> bool {
    AWKWARD.iter().any(|pattern| syllable.contains(pattern))
}

/// Generate the 256 syllables in byte order
pub fn generate_table() -> Vec<String> {
    let mut syllables: Vec<String> = Vec::with_capacity(TABLE_SIZE);

    'outer: for onset in ONSETS {
        for vowel in VOWELS {
            let open = format!("{}{}", onset, vowel);
            if !syllables.contains(&open) {
                syllables.push(open);
            }

            for coda in CODAS.iter().filter(|c| !c.is_empty()) {
                if syllables.len() >= TABLE_SIZE {
                    break 'outer;
                }
                let closed = format!("{}{}{}", onset, vowel, coda);
                if !is_awkward(&closed) && !syllables.contains(&closed) {
                    syllables.push(closed);
                }
            }
        }
    }

    syllables.truncate(TABLE_SIZE);
    syllables
}

lazy_static! {
    static ref TABLE: SyllableTable = {
        let table = SyllableTable::build(generate_table());
        tracing::debug!(
            entries = table.len(),
            longest = table.max_len(),
            "built syllable table"
        );
        table
    };
}

/// The byte <-> syllable bijection
#[derive(Debug, Clone)]
pub struct SyllableTable {
    syllables: Vec<String>,
    index: HashMap<String, u8>,
    max_len: usize,
}

impl SyllableTable {
    /// The process-wide table
    pub fn global() -> &'static SyllableTable {
        &TABLE
    }

    fn build(syllables: Vec<String>) -> Self {
        let index = syllables
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i as u8))
            .collect();
        let max_len = syllables.iter().map(|s| s.chars().count()).max().unwrap_or(0);
        Self {
            syllables,
            index,
            max_len,
        }
    }

    pub fn syllable(&self, byte: u8) -> &str {
        &self.syllables[byte as usize]
    }

    /// Byte value of an exact (lowercase) syllable
    pub fn byte_of(&self, syllable: &str) -> Option<u8> {
        self.index.get(syllable).copied()
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// Length in characters of the longest syllable
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.syllables.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};
    use std::collections::HashSet;

    const TABLE_DIGEST: &str = "dab55cdfe5b6de3b5a8020a8e1433d2149181c0d237c55cc4dcf8c5dd6660d11";

    #[test]
    fn test_table_is_stable() {
        let joined = generate_table().join(",");
        assert_eq!(hex::encode(Sha256::digest(joined.as_bytes())), TABLE_DIGEST);
        assert_eq!(generate_table(), generate_table());
    }

    #[test]
    fn test_table_is_a_bijection() {
        let table = SyllableTable::global();
        assert_eq!(table.len(), TABLE_SIZE);

        let unique: HashSet<&str> = table.iter().collect();
        assert_eq!(unique.len(), TABLE_SIZE);

        for byte in 0..=255u8 {
            assert_eq!(table.byte_of(table.syllable(byte)), Some(byte));
        }
    }

    #[test]
    fn test_table_layout() {
        let table = SyllableTable::global();
        assert_eq!(table.syllable(0), "a");
        assert_eq!(table.syllable(1), "ab");
        assert_eq!(table.syllable(255), "eif");
        assert_eq!(table.byte_of("ai"), Some(180));
        assert_eq!(table.max_len(), 4);
        assert!(table.iter().all(|s| !is_awkward(s)));
    }

    #[test]
    fn test_awkward_filter() {
        assert!(is_awkward("shsh"));
        assert!(is_awkward("ouzz"));
        assert!(!is_awkward("ash"));
    }
}
