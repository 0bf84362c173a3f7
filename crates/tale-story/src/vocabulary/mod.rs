//! Slot vocabularies and their validation
//!
//! Tables are checked once, when first used:
//!
//! - every slot holds exactly 256 distinct (case-folded) entries
//! - word slots hold single words, disjoint across the scheme
//! - no word slot contains a template word (articles, "in", "a", "near")
//! - no entry contains a period or line break, which delimit sentences

pub mod classic;
pub mod fable;

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use tale_core::{Error, Result};

use crate::Scheme;

/// Entries per slot, one per byte value
pub const SLOT_SIZE: usize = 256;

lazy_static! {
    static ref CLASSIC: Result<SchemeTables> = SchemeTables::build(Scheme::Classic);
    static ref FABLE: Result<SchemeTables> = SchemeTables::build(Scheme::Fable);
}

/// Validated tables for a scheme
pub fn tables(scheme: Scheme) -> Result<&'static SchemeTables> {
    let built = match scheme {
        Scheme::Classic => &*CLASSIC,
        Scheme::Fable => &*FABLE,
    };
    built.as_ref().map_err(reissue)
}

/// Errors are not `Clone`; rebuild the table error for each caller
fn reissue(err: &Error) -> Error {
    match err {
        Error::OverlappingVocabulary {
            word,
            first,
            second,
        } => Error::OverlappingVocabulary {
            word: word.clone(),
            first: *first,
            second: *second,
        },
        Error::MalformedTable { table, reason } => Error::MalformedTable {
            table: *table,
            reason: reason.clone(),
        },
        other => Error::MalformedTable {
            table: "story",
            reason: other.to_string(),
        },
    }
}

/// One byte-indexed word list
#[derive(Debug)]
pub struct Slot {
    name: &'static str,
    words: &'static [&'static str],
    lowered: Vec<String>,
    index: HashMap<String, u8>,
}

impl Slot {
    fn new(table: &'static str, name: &'static str, words: &'static [&'static str]) -> Result<Self> {
        let malformed = |reason: String| Error::MalformedTable { table, reason };

        if words.len() != SLOT_SIZE {
            return Err(malformed(format!(
                "{} has {} entries, expected {}",
                name,
                words.len(),
                SLOT_SIZE
            )));
        }

        let lowered: Vec<String> = words.iter().map(|w| w.trim().to_lowercase()).collect();
        let mut index = HashMap::with_capacity(SLOT_SIZE);
        for (i, word) in lowered.iter().enumerate() {
            if word.is_empty() || word.contains(['.', '\n']) {
                return Err(malformed(format!("{} entry {} is not a phrase: {:?}", name, i, word)));
            }
            if index.insert(word.clone(), i as u8).is_some() {
                return Err(malformed(format!("'{}' appears twice in {}", word, name)));
            }
        }

        Ok(Self {
            name,
            words,
            lowered,
            index,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn word(&self, byte: u8) -> &'static str {
        self.words[byte as usize]
    }

    /// Byte for a lowercase entry
    pub fn lookup(&self, word: &str) -> Option<u8> {
        self.index.get(word).copied()
    }

    /// First entry, in table order, contained in `text` (lowercase)
    pub fn find_within(&self, text: &str) -> Option<u8> {
        self.lowered
            .iter()
            .position(|entry| text.contains(entry.as_str()))
            .map(|i| i as u8)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.words.iter().copied()
    }
}

/// The slot lists of one scheme, in byte order
#[derive(Debug)]
pub struct SchemeTables {
    scheme: Scheme,
    words: Vec<Slot>,
    location: Slot,
}

impl SchemeTables {
    fn build(scheme: Scheme) -> Result<Self> {
        let tables = match scheme {
            Scheme::Classic => Self::from_lists(
                scheme,
                &[
                    ("adjective", &classic::ADJECTIVES[..]),
                    ("noun", &classic::NOUNS[..]),
                    ("verb", &classic::VERBS[..]),
                ],
                &classic::LOCATIONS[..],
            ),
            Scheme::Fable => Self::from_lists(
                scheme,
                &[
                    ("quality", &fable::QUALITIES[..]),
                    ("color", &fable::COLORS[..]),
                    ("creature", &fable::CREATURES[..]),
                    ("adverb", &fable::ADVERBS[..]),
                    ("verb", &fable::VERBS[..]),
                    ("place-adjective", &fable::PLACE_ADJECTIVES[..]),
                    ("place", &fable::PLACES[..]),
                ],
                &fable::LOCATIONS[..],
            ),
        };

        match &tables {
            Ok(_) => tracing::debug!(scheme = scheme.name(), "built story tables"),
            Err(e) => tracing::error!(scheme = scheme.name(), error = %e, "story tables are invalid"),
        }
        tables
    }

    pub(crate) fn from_lists(
        scheme: Scheme,
        word_lists: &[(&'static str, &'static [&'static str])],
        locations: &'static [&'static str],
    ) -> Result<Self> {
        let table = scheme.name();
        if word_lists.len() + 1 != scheme.slots_per_sentence() {
            return Err(Error::MalformedTable {
                table,
                reason: format!(
                    "{} slots, template has {}",
                    word_lists.len() + 1,
                    scheme.slots_per_sentence()
                ),
            });
        }

        let words = word_lists
            .iter()
            .map(|&(name, list)| Slot::new(table, name, list))
            .collect::<Result<Vec<_>>>()?;
        let location = Slot::new(table, "location", locations)?;

        let tables = Self {
            scheme,
            words,
            location,
        };
        tables.check_word_slots()?;
        Ok(tables)
    }

    /// Word slots must be single words, disjoint, and free of template words
    fn check_word_slots(&self) -> Result<()> {
        let template: HashSet<String> = self.scheme.template_words().into_iter().collect();
        let mut owner: HashMap<&str, &'static str> = HashMap::new();

        for slot in &self.words {
            for word in &slot.lowered {
                if word.contains(char::is_whitespace) {
                    return Err(Error::MalformedTable {
                        table: self.scheme.name(),
                        reason: format!("{} entry '{}' is not a single word", slot.name, word),
                    });
                }
                if template.contains(word) {
                    return Err(Error::OverlappingVocabulary {
                        word: word.clone(),
                        first: "template",
                        second: slot.name,
                    });
                }
                if let Some(first) = owner.insert(word.as_str(), slot.name) {
                    return Err(Error::OverlappingVocabulary {
                        word: word.clone(),
                        first,
                        second: slot.name,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Single-word slots in template order
    pub fn word_slots(&self) -> &[Slot] {
        &self.words
    }

    pub fn location(&self) -> &Slot {
        &self.location
    }

    /// All slots in byte order (word slots, then location)
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.words.iter().chain(std::iter::once(&self.location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leak(words: Vec<&'static str>) -> &'static [&'static str] {
        Box::leak(words.into_boxed_slice())
    }

    fn classic_with(slot: usize, at: usize, word: &'static str) -> Result<SchemeTables> {
        let mut lists: Vec<Vec<&'static str>> = vec![
            classic::ADJECTIVES.to_vec(),
            classic::NOUNS.to_vec(),
            classic::VERBS.to_vec(),
        ];
        lists[slot][at] = word;
        let mut lists = lists.into_iter().map(leak);
        SchemeTables::from_lists(
            Scheme::Classic,
            &[
                ("adjective", lists.next().unwrap()),
                ("noun", lists.next().unwrap()),
                ("verb", lists.next().unwrap()),
            ],
            &classic::LOCATIONS[..],
        )
    }

    #[test]
    fn test_builtin_tables_are_valid() {
        for scheme in Scheme::ALL {
            let tables = tables(scheme).unwrap();
            assert_eq!(tables.slots().count(), scheme.slots_per_sentence());
            for slot in tables.slots() {
                assert_eq!(slot.iter().count(), SLOT_SIZE);
            }
        }
    }

    #[test]
    fn test_first_entries() {
        let classic = tables(Scheme::Classic).unwrap();
        let firsts: Vec<&str> = classic.slots().map(|s| s.word(0)).collect();
        assert_eq!(firsts, ["purple", "elephant", "dances", "Tokyo"]);

        let fable = tables(Scheme::Fable).unwrap();
        let firsts: Vec<&str> = fable.slots().map(|s| s.word(0)).collect();
        assert_eq!(
            firsts,
            ["brave", "red", "fox", "quickly", "danced", "misty", "cottage", "Paris"]
        );
    }

    #[test]
    fn test_lookup_is_lowercase() {
        let classic = tables(Scheme::Classic).unwrap();
        assert_eq!(classic.location().lookup("tokyo"), Some(0));
        assert_eq!(classic.location().lookup("Tokyo"), None);
        assert_eq!(classic.word_slots()[0].lookup("purple"), Some(0));
    }

    #[test]
    fn test_find_within_uses_table_order() {
        let classic = tables(Scheme::Classic).unwrap();
        let location = classic.location();
        assert_eq!(location.word(2), "Mars");
        assert_eq!(location.word(93), "a marsh");
        // "mars" is listed first, so it wins a substring scan
        assert_eq!(location.find_within("a marsh"), Some(2));
        assert_eq!(location.lookup("a marsh"), Some(93));
    }

    #[test]
    fn test_overlap_is_rejected() {
        match classic_with(1, 10, "purple") {
            Err(Error::OverlappingVocabulary {
                word,
                first,
                second,
            }) => {
                assert_eq!(word, "purple");
                assert_eq!(first, "adjective");
                assert_eq!(second, "noun");
            }
            other => panic!("expected overlap, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_template_word_is_rejected() {
        let err = classic_with(0, 5, "The").unwrap_err();
        assert!(matches!(
            err,
            Error::OverlappingVocabulary { first: "template", second: "adjective", .. }
        ));
    }

    #[test]
    fn test_duplicate_and_shape_errors() {
        let err = classic_with(2, 1, "dances").unwrap_err();
        assert!(err.to_string().contains("appears twice in verb"));

        let err = classic_with(1, 0, "sea lion").unwrap_err();
        assert!(err.to_string().contains("not a single word"));

        let short = leak(classic::NOUNS[..255].to_vec());
        let err = SchemeTables::from_lists(
            Scheme::Classic,
            &[
                ("adjective", &classic::ADJECTIVES[..]),
                ("noun", short),
                ("verb", &classic::VERBS[..]),
            ],
            &classic::LOCATIONS[..],
        )
        .unwrap_err();
        assert!(matches!(err, Error::MalformedTable { table: "classic", .. }));
    }
}
