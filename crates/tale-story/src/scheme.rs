//! Story schemes and their sentence templates

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tale_core::{Error, Result, STORY_ENTROPY_LEN};

use crate::vocabulary::{self, classic, fable, SchemeTables};

/// Which template and vocabulary a story uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Four sentences: `<Article> <adj> <noun> <verb> in <location>.`
    #[default]
    #[serde(alias = "a")]
    Classic,
    /// Two sentences: `<Article> <quality> <color> <creature> <adverb> <verb>
    /// in a <place-adj> <place> near <location>.`
    #[serde(alias = "b")]
    Fable,
}

impl Scheme {
    pub const ALL: [Scheme; 2] = [Scheme::Classic, Scheme::Fable];

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Classic => "classic",
            Scheme::Fable => "fable",
        }
    }

    pub fn sentence_count(&self) -> usize {
        match self {
            Scheme::Classic => 4,
            Scheme::Fable => 2,
        }
    }

    /// Bytes (and slots) per sentence, location included
    pub fn slots_per_sentence(&self) -> usize {
        STORY_ENTROPY_LEN / self.sentence_count()
    }

    pub fn articles(&self) -> &'static [&'static str] {
        match self {
            Scheme::Classic => &classic::ARTICLES,
            Scheme::Fable => &fable::ARTICLES,
        }
    }

    /// Text that precedes the location in every sentence
    pub fn location_marker(&self) -> &'static str {
        match self {
            Scheme::Classic => " in ",
            Scheme::Fable => " near ",
        }
    }

    /// Fixed words of the template, lowercased. No word slot may contain them.
    pub fn template_words(&self) -> Vec<String> {
        let fixed: &[&str] = match self {
            Scheme::Classic => &["in"],
            Scheme::Fable => &["in", "a", "near"],
        };
        self.articles()
            .iter()
            .chain(fixed)
            .map(|w| w.to_lowercase())
            .collect()
    }

    /// Validated vocabulary for this scheme
    pub fn tables(&self) -> Result<&'static SchemeTables> {
        vocabulary::tables(*self)
    }

    /// Fill the template for sentence `index` with one word per slot
    pub(crate) fn render(&self, index: usize, words: &[&str]) -> String {
        let articles = self.articles();
        let article = articles[index % articles.len()];
        match self {
            Scheme::Classic => format!(
                "{} {} {} {} in {}.",
                article, words[0], words[1], words[2], words[3]
            ),
            Scheme::Fable => format!(
                "{} {} {} {} {} {} in a {} {} near {}.",
                article, words[0], words[1], words[2], words[3], words[4], words[5], words[6],
                words[7]
            ),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" | "a" => Ok(Scheme::Classic),
            "fable" | "b" => Ok(Scheme::Fable),
            other => Err(Error::Config(format!(
                "unknown story scheme '{}' (expected classic or fable)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        assert_eq!(Scheme::Classic.slots_per_sentence(), 4);
        assert_eq!(Scheme::Fable.slots_per_sentence(), 8);
        for scheme in Scheme::ALL {
            assert_eq!(
                scheme.sentence_count() * scheme.slots_per_sentence(),
                STORY_ENTROPY_LEN
            );
        }
    }

    #[test]
    fn test_articles_cycle() {
        let words = ["x"; 4];
        assert!(Scheme::Classic.render(0, &words).starts_with("A x"));
        assert!(Scheme::Classic.render(7, &words).starts_with("That x"));
        assert!(Scheme::Classic.render(8, &words).starts_with("A x"));
        assert!(Scheme::Fable.render(1, &["y"; 8]).starts_with("A y"));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("classic".parse::<Scheme>().unwrap(), Scheme::Classic);
        assert_eq!("B".parse::<Scheme>().unwrap(), Scheme::Fable);
        assert!("epic".parse::<Scheme>().is_err());
        assert_eq!(Scheme::Fable.to_string(), "fable");
        assert_eq!(Scheme::default(), Scheme::Classic);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Scheme::Fable).unwrap(), "\"fable\"");
        let scheme: Scheme = serde_json::from_str("\"classic\"").unwrap();
        assert_eq!(scheme, Scheme::Classic);
    }

    #[test]
    fn test_serde_accepts_letter_aliases() {
        let scheme: Scheme = serde_json::from_str("\"b\"").unwrap();
        assert_eq!(scheme, Scheme::Fable);
        let scheme: Scheme = serde_json::from_str("\"a\"").unwrap();
        assert_eq!(scheme, "a".parse::<Scheme>().unwrap());
        assert!(serde_json::from_str::<Scheme>("\"epic\"").is_err());
    }
}
