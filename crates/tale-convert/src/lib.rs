//! # tale-convert
//!
//! Turns a BIP39 seed phrase into something a person can remember, and back:
//!
//! - a pronounceable syllable string (`seed_to_babel` / `babel_to_seed`)
//! - a short story (`seed_to_story` / `story_to_seed`)
//! - an offline Library of Babel page holding the phrase (`*_to_url`,
//!   `*_to_page`, `get_babel_location`)
//!
//! ```ignore
//! use tale_convert::{SeedTale, TaleConfig};
//!
//! let tale = SeedTale::new(TaleConfig::load(None)?);
//! let story = tale.seed_to_story(phrase)?;
//! assert_eq!(tale.story_to_seed(&story)?, phrase);
//! ```

pub mod config;
pub mod convert;

pub use config::TaleConfig;
pub use convert::{load_converter, BabelLocation, SeedTale};

pub use tale_babel::{BabelAddress, Location};
pub use tale_core::{Entropy, Error, ErrorKind, Result};
pub use tale_story::Scheme;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::io::Write;
    use tale_bip39::{entropy_to_mnemonic, Wordlist};

    const ZERO_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn tale(scheme: Scheme) -> SeedTale {
        SeedTale::new(TaleConfig {
            scheme,
            ..TaleConfig::default()
        })
    }

    fn mnemonic_for(bytes: &[u8]) -> String {
        entropy_to_mnemonic(&Entropy::from_slice(bytes).unwrap(), Wordlist::english())
    }

    #[test]
    fn test_zero_seed_story() {
        let classic = tale(Scheme::Classic);
        let story = classic.seed_to_story(ZERO_MNEMONIC).unwrap();
        assert!(story.starts_with("A purple elephant dances in Tokyo."));
        assert_eq!(classic.story_to_seed(&story).unwrap(), ZERO_MNEMONIC);
    }

    #[test]
    fn test_random_seeds_roundtrip() {
        let mut rng = StdRng::seed_from_u64(2024);
        let classic = tale(Scheme::Classic);
        let fable = tale(Scheme::Fable);

        for _ in 0..100 {
            let mut bytes = [0u8; 16];
            rng.fill(&mut bytes[..]);
            let phrase = mnemonic_for(&bytes);

            for converter in [&classic, &fable] {
                let story = converter.seed_to_story(&phrase).unwrap();
                assert_eq!(converter.story_to_seed(&story).unwrap(), phrase);
            }

            match classic.seed_to_babel(&phrase) {
                Ok(babel) => assert_eq!(classic.babel_to_seed(&babel).unwrap(), phrase),
                Err(e) => assert_eq!(e.kind(), ErrorKind::Parse),
            }
        }
    }

    #[test]
    fn test_ambiguous_seed_is_refused() {
        let mut bytes = [0u8; 16];
        bytes[1] = 72;
        let phrase = mnemonic_for(&bytes);
        let err = tale(Scheme::Classic).seed_to_babel(&phrase).unwrap_err();
        assert!(matches!(err, Error::AmbiguousSyllables));
    }

    #[test]
    fn test_all_paths_share_one_url() {
        for scheme in Scheme::ALL {
            let converter = tale(scheme);
            let url = converter.seed_to_url(ZERO_MNEMONIC).unwrap();
            assert!(url.starts_with("https://libraryofbabel.info/book.cgi?5t5ixkj2hk71m6za"));
            assert!(url.ends_with("-w1-s1-v01:1"));

            let babel = converter.seed_to_babel(ZERO_MNEMONIC).unwrap();
            assert_eq!(converter.babel_to_url(&babel).unwrap(), url);

            let story = converter.seed_to_story(ZERO_MNEMONIC).unwrap();
            assert_eq!(converter.story_to_url(&story).unwrap(), url);
        }
    }

    #[test]
    fn test_url_uses_canonical_phrase() {
        let converter = tale(Scheme::Classic);
        let messy = format!("  {}  ", ZERO_MNEMONIC.to_uppercase().replace(' ', "\t"));
        assert_eq!(
            converter.seed_to_url(&messy).unwrap(),
            converter.seed_to_url(ZERO_MNEMONIC).unwrap()
        );
    }

    #[test]
    fn test_pages_show_the_phrase() {
        let converter = tale(Scheme::Fable);
        let page = converter.seed_to_page(ZERO_MNEMONIC).unwrap();
        let first_line = page.lines().next().unwrap();
        assert_eq!(first_line.len(), 80);
        assert!(first_line.starts_with("abandon abandon"));
        assert_eq!(page.lines().count(), 40);

        let story = converter.seed_to_story(ZERO_MNEMONIC).unwrap();
        assert_eq!(converter.story_to_page(&story).unwrap(), page);
    }

    #[test]
    fn test_get_babel_location() {
        let config = TaleConfig {
            location: Location::new(2, 3, 4, 5).unwrap(),
            ..TaleConfig::default()
        };
        let converter = SeedTale::new(config);
        let story = converter.seed_to_story(ZERO_MNEMONIC).unwrap();
        let record = converter.get_babel_location(&story).unwrap();

        assert_eq!(record.seed_phrase, ZERO_MNEMONIC);
        assert_eq!((record.wall, record.shelf, record.volume, record.page), (2, 3, 4, 5));
        assert!(record.url.contains(&record.hex_name));
        assert!(record.url.ends_with("-w2-s3-v04:5"));

        let location = Location::new(2, 3, 4, 5).unwrap();
        assert!(tale_babel::verify_text_on_page(ZERO_MNEMONIC, &record.hex_name, &location).unwrap());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["volume"], 4);
        assert_eq!(json["seed_phrase"], ZERO_MNEMONIC);

        let babel = converter.seed_to_babel(ZERO_MNEMONIC).unwrap();
        assert_eq!(converter.babel_location(&babel).unwrap(), record);
    }

    #[test]
    fn test_long_seed_has_syllables_but_no_story() {
        let phrase = mnemonic_for(&[0x11; 32]);
        let converter = tale(Scheme::Classic);

        let babel = converter.seed_to_babel(&phrase).unwrap();
        assert_eq!(converter.babel_to_seed(&babel).unwrap(), phrase);

        let err = converter.seed_to_story(&phrase).unwrap_err();
        assert!(matches!(err, Error::InvalidEntropyLength { got: 32, .. }));
        assert_eq!(err.kind(), ErrorKind::Length);
    }

    #[test]
    fn test_error_taxonomy() {
        let converter = tale(Scheme::Classic);
        let kind = |r: Result<String>| r.unwrap_err().kind();

        assert_eq!(kind(converter.seed_to_babel("abandon about")), ErrorKind::Length);
        assert_eq!(
            kind(converter.seed_to_babel(&ZERO_MNEMONIC.replace("about", "bitcoin"))),
            ErrorKind::Vocabulary
        );
        assert_eq!(
            kind(converter.seed_to_story(&ZERO_MNEMONIC.replace("about", "abandon"))),
            ErrorKind::Checksum
        );
        assert_eq!(kind(converter.babel_to_seed("aaqq")), ErrorKind::Parse);
        assert_eq!(kind(converter.story_to_seed("One sentence.")), ErrorKind::Parse);
        // 15 syllables is not a BIP39 entropy size
        assert_eq!(kind(converter.babel_to_seed(&"a".repeat(15))), ErrorKind::Length);
    }

    #[test]
    fn test_story_in_wrong_scheme() {
        let story = tale(Scheme::Fable).seed_to_story(ZERO_MNEMONIC).unwrap();
        let err = tale(Scheme::Classic).story_to_seed(&story).unwrap_err();
        assert!(matches!(err, Error::SentenceCount { expected: 4, got: 2 }));
    }

    #[test]
    fn test_custom_wordlist_from_config() {
        let mut wordlist = tempfile::NamedTempFile::new().unwrap();
        let words: Vec<&str> = Wordlist::english().iter().collect();
        wordlist.write_all(words.join("\n").as_bytes()).unwrap();

        let mut config_file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::json!({ "wordlist": wordlist.path(), "chunk_size": 8 });
        config_file.write_all(json.to_string().as_bytes()).unwrap();

        let config = TaleConfig::load(Some(config_file.path())).unwrap();
        let converter = load_converter(config).unwrap();
        let babel = converter.seed_to_babel(ZERO_MNEMONIC).unwrap();
        assert_eq!(converter.format_babel_string(&babel), "aaaaaaaa-aaaaaaaa");
    }
}
