//! Encode and decode syllable strings

use tale_core::{Error, Result};

use crate::SyllableTable;

/// Longest prefix the decoder tries, in characters
const MAX_MATCH_LEN: usize = 6;

/// Characters of unmatched input quoted in errors
const REMAINDER_PREVIEW: usize = 10;

/// Concatenate one syllable per byte
pub fn encode(bytes: &[u8]) -> String {
    let table = SyllableTable::global();
    bytes.iter().map(|&b| table.syllable(b)).collect()
}

/// One syllable per byte, unjoined
pub fn encode_list(bytes: &[u8]) -> Vec<&'static str> {
    let table = SyllableTable::global();
    bytes.iter().map(|&b| table.syllable(b)).collect()
}

/// Encode, refusing buffers whose string the greedy decoder would misread
pub fn encode_checked(bytes: &[u8]) -> Result<String> {
    let encoded = encode(bytes);
    match decode(&encoded) {
        Ok(decoded) if decoded == bytes => Ok(encoded),
        _ => {
            tracing::debug!(len = bytes.len(), "syllable encoding is ambiguous");
            Err(Error::AmbiguousSyllables)
        }
    }
}

/// Greedy longest-match decode (case-insensitive)
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let table = SyllableTable::global();
    let lowered = input.to_lowercase();
    let mut rest = lowered.as_str();
    let mut bytes = Vec::with_capacity(rest.len() / 2);

    while !rest.is_empty() {
        let matched = prefix_ends(rest)
            .into_iter()
            .rev()
            .find_map(|end| table.byte_of(&rest[..end]).map(|byte| (byte, end)));

        match matched {
            Some((byte, end)) => {
                bytes.push(byte);
                rest = &rest[end..];
            }
            None => {
                return Err(Error::UnmatchedSyllable {
                    remainder: rest.chars().take(REMAINDER_PREVIEW).collect(),
                })
            }
        }
    }

    tracing::trace!(bytes = bytes.len(), "decoded syllables");
    Ok(bytes)
}

/// Byte offsets ending the first 1..=MAX_MATCH_LEN characters
fn prefix_ends(s: &str) -> Vec<usize> {
    s.char_indices()
        .skip(1)
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .take(MAX_MATCH_LEN)
        .collect()
}

/// Strip display separators (hyphens, whitespace, periods)
pub fn clean(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != '-' && *c != '.' && !c.is_whitespace())
        .collect()
}

/// Break a syllable string into hyphen-separated groups of `size` characters
///
/// "aztulinerblinken" -> "aztu-line-rbli-nken"
pub fn chunked(s: &str, size: usize) -> String {
    if size == 0 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    chars
        .chunks(size)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("-")
}

/// Group syllables into pseudo-sentences: two syllables per word, two words
/// per sentence.
///
/// ```text
/// "Augai zofug. Airoru rpaip. Ifalma ulpor. Erdex estal."
/// ```
pub fn as_sentences(bytes: &[u8]) -> String {
    let syllables = encode_list(bytes);
    let words: Vec<String> = syllables.chunks(2).map(|pair| pair.concat()).collect();

    words
        .chunks(2)
        .map(|pair| format!("{}.", capitalize(&pair.join(" "))))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
