//! Story encoding and decoding

use tale_core::{Entropy, Error, Result, STORY_ENTROPY_LEN};
use zeroize::Zeroize;

use crate::{Scheme, SchemeTables};

/// Encode 16 bytes as the scheme's sentences, one per line
pub fn encode(entropy: &[u8], scheme: Scheme) -> Result<String> {
    if entropy.len() != STORY_ENTROPY_LEN {
        return Err(Error::InvalidEntropyLength {
            expected: &[STORY_ENTROPY_LEN],
            got: entropy.len(),
        });
    }

    let tables = scheme.tables()?;
    let sentences: Vec<String> = entropy
        .chunks(scheme.slots_per_sentence())
        .enumerate()
        .map(|(i, chunk)| {
            let words: Vec<&str> = tables
                .slots()
                .zip(chunk)
                .map(|(slot, &byte)| slot.word(byte))
                .collect();
            scheme.render(i, &words)
        })
        .collect();

    Ok(sentences.join("\n"))
}

/// Decode a story back to its 16 bytes of entropy
///
/// Sentences are read one per line; if the line count is wrong the text is
/// re-split on periods, so a story pasted on a single line still decodes.
pub fn decode(story: &str, scheme: Scheme) -> Result<Entropy> {
    let tables = scheme.tables()?;
    let expected = scheme.sentence_count();

    let sentences = split_sentences(story, expected);
    if sentences.len() != expected {
        return Err(Error::SentenceCount {
            expected,
            got: sentences.len(),
        });
    }

    let mut bytes = Vec::with_capacity(STORY_ENTROPY_LEN);
    for (i, sentence) in sentences.iter().enumerate() {
        let parsed = parse_sentence(tables, i + 1, sentence);
        match parsed {
            Ok(mut values) => {
                bytes.extend_from_slice(&values);
                values.zeroize();
            }
            Err(e) => {
                bytes.zeroize();
                return Err(e);
            }
        }
    }

    let entropy = Entropy::from_slice(&bytes);
    bytes.zeroize();
    entropy
}

fn split_sentences(story: &str, expected: usize) -> Vec<String> {
    let lines: Vec<&str> = story
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() == expected {
        return lines.into_iter().map(String::from).collect();
    }

    tracing::debug!(lines = lines.len(), expected, "splitting story on periods");
    story
        .replace('\n', " ")
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Recover one sentence's bytes (word slots, then location)
fn parse_sentence(tables: &SchemeTables, number: usize, sentence: &str) -> Result<Vec<u8>> {
    let line = sentence.trim().trim_end_matches('.').to_lowercase();
    let marker = tables.scheme().location_marker();

    let (head, segment) = match line.find(marker) {
        Some(at) => (&line[..at], Some(&line[at + marker.len()..])),
        None => (line.as_str(), None),
    };

    // Each word fills the first open slot that knows it
    let slots = tables.word_slots();
    let mut filled: Vec<Option<u8>> = vec![None; slots.len()];
    for word in head.split_whitespace() {
        let hit = slots
            .iter()
            .enumerate()
            .filter(|(i, _)| filled[*i].is_none())
            .find_map(|(i, slot)| slot.lookup(word).map(|byte| (i, byte)));
        if let Some((i, byte)) = hit {
            filled[i] = Some(byte);
        }
    }

    let locations = tables.location();
    let location = match segment {
        Some(segment) => {
            let segment = segment.trim();
            locations
                .lookup(segment)
                .or_else(|| locations.find_within(segment))
        }
        None => {
            tracing::debug!(sentence = number, "no location marker, scanning whole sentence");
            locations.find_within(&line)
        }
    };

    let mut missing: Vec<&'static str> = slots
        .iter()
        .zip(&filled)
        .filter(|(_, value)| value.is_none())
        .map(|(slot, _)| slot.name())
        .collect();
    if location.is_none() {
        missing.push(locations.name());
    }
    if !missing.is_empty() {
        return Err(Error::MissingSlots {
            sentence: number,
            missing,
        });
    }

    Ok(filled.into_iter().flatten().chain(location).collect())
}
