//! The conversions between a seed phrase and its tale forms
//!
//! ```text
//! encode: seed phrase ─► entropy ─► syllables | story
//! decode: syllables | story ─► entropy ─► seed phrase ─► library page
//! ```
//!
//! The library is searched with the seed phrase text itself, so a page
//! shows the words, not the entropy.

use std::borrow::Cow;

use serde::Serialize;
use tale_babel::{BabelAddress, Location};
use tale_bip39::{entropy_to_mnemonic, load_wordlist, mnemonic_to_entropy, Wordlist};
use tale_core::{Entropy, Result};

use crate::TaleConfig;

/// Where a story's seed phrase lives in the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BabelLocation {
    pub hex_name: String,
    pub wall: u32,
    pub shelf: u32,
    pub volume: u32,
    pub page: u32,
    pub url: String,
    pub seed_phrase: String,
}

/// Seed phrase converter bound to a wordlist and settings
#[derive(Debug, Clone)]
pub struct SeedTale {
    config: TaleConfig,
    wordlist: Cow<'static, Wordlist>,
}

impl SeedTale {
    /// Converter using the English wordlist
    pub fn new(config: TaleConfig) -> Self {
        Self {
            config,
            wordlist: Cow::Borrowed(Wordlist::english()),
        }
    }

    /// Converter owning a loaded wordlist
    pub fn with_owned_wordlist(config: TaleConfig, wordlist: Wordlist) -> Self {
        Self {
            config,
            wordlist: Cow::Owned(wordlist),
        }
    }

    pub fn config(&self) -> &TaleConfig {
        &self.config
    }

    fn entropy(&self, mnemonic: &str) -> Result<Entropy> {
        mnemonic_to_entropy(mnemonic, &self.wordlist)
    }

    fn mnemonic(&self, entropy: &Entropy) -> String {
        entropy_to_mnemonic(entropy, &self.wordlist)
    }

    // ═══════════════════════════════════════════════════════════
    // SYLLABLES
    // ═══════════════════════════════════════════════════════════

    /// Seed phrase to pronounceable syllable string
    ///
    /// Fails with `AmbiguousSyllables` for the few seeds whose string would
    /// not decode back to the same entropy.
    pub fn seed_to_babel(&self, mnemonic: &str) -> Result<String> {
        let entropy = self.entropy(mnemonic)?;
        tale_syllable::encode_checked(entropy.as_bytes())
    }

    pub fn babel_to_seed(&self, babel: &str) -> Result<String> {
        let bytes = tale_syllable::decode(babel)?;
        let entropy = Entropy::from_slice(&bytes)?;
        Ok(self.mnemonic(&entropy))
    }

    /// Syllable string in hyphenated groups of `chunk_size` characters
    pub fn format_babel_string(&self, babel: &str) -> String {
        tale_syllable::chunked(babel, self.config.chunk_size)
    }

    /// Seed phrase's syllables as pseudo-sentences
    ///
    /// Refuses the same seeds as [`Self::seed_to_babel`], since the sentences
    /// decode through the same syllable string.
    pub fn format_as_sentences(&self, mnemonic: &str) -> Result<String> {
        let entropy = self.entropy(mnemonic)?;
        tale_syllable::encode_checked(entropy.as_bytes())?;
        Ok(tale_syllable::as_sentences(entropy.as_bytes()))
    }

    // ═══════════════════════════════════════════════════════════
    // STORIES
    // ═══════════════════════════════════════════════════════════

    /// Seed phrase (12 words) to a story in the configured scheme
    pub fn seed_to_story(&self, mnemonic: &str) -> Result<String> {
        let entropy = self.entropy(mnemonic)?;
        tale_story::encode(entropy.as_bytes(), self.config.scheme)
    }

    pub fn story_to_seed(&self, story: &str) -> Result<String> {
        let entropy = tale_story::decode(story, self.config.scheme)?;
        Ok(self.mnemonic(&entropy))
    }

    // ═══════════════════════════════════════════════════════════
    // LIBRARY
    // ═══════════════════════════════════════════════════════════

    /// Library address of arbitrary text at the configured location
    pub fn locate(&self, text: &str) -> Result<BabelAddress> {
        tale_babel::search(text, &self.config.location)
    }

    /// Address of a seed phrase, written in canonical form
    fn address_of_seed(&self, mnemonic: &str) -> Result<(String, BabelAddress)> {
        let phrase = self.mnemonic(&self.entropy(mnemonic)?);
        let address = self.locate(&phrase)?;
        Ok((phrase, address))
    }

    fn page_of(&self, address: &BabelAddress) -> Result<String> {
        Ok(tale_babel::format_page(&address.page()?))
    }

    pub fn seed_to_url(&self, mnemonic: &str) -> Result<String> {
        let (_, address) = self.address_of_seed(mnemonic)?;
        Ok(address.url(&self.config.base_url))
    }

    pub fn babel_to_url(&self, babel: &str) -> Result<String> {
        self.seed_to_url(&self.babel_to_seed(babel)?)
    }

    pub fn story_to_url(&self, story: &str) -> Result<String> {
        self.seed_to_url(&self.story_to_seed(story)?)
    }

    /// Formatted library page showing the seed phrase
    pub fn seed_to_page(&self, mnemonic: &str) -> Result<String> {
        let (_, address) = self.address_of_seed(mnemonic)?;
        self.page_of(&address)
    }

    pub fn story_to_page(&self, story: &str) -> Result<String> {
        self.seed_to_page(&self.story_to_seed(story)?)
    }

    /// Formatted page for a hex name; the location is recovered from the
    /// hex name when not given
    pub fn read_page(&self, hex_name: &str, location: Option<Location>) -> Result<String> {
        let location = match location {
            Some(location) => location,
            None => tale_babel::location_of(hex_name)?,
        };
        let address = BabelAddress {
            hex_name: hex_name.trim().to_lowercase(),
            location,
        };
        self.page_of(&address)
    }

    /// Everything needed to find a story's seed phrase in the library
    pub fn get_babel_location(&self, story: &str) -> Result<BabelLocation> {
        let (seed_phrase, address) = self.address_of_seed(&self.story_to_seed(story)?)?;
        Ok(self.describe(seed_phrase, address))
    }

    /// Same record for a syllable string
    pub fn babel_location(&self, babel: &str) -> Result<BabelLocation> {
        let (seed_phrase, address) = self.address_of_seed(&self.babel_to_seed(babel)?)?;
        Ok(self.describe(seed_phrase, address))
    }

    fn describe(&self, seed_phrase: String, address: BabelAddress) -> BabelLocation {
        let url = address.url(&self.config.base_url);
        let Location {
            wall,
            shelf,
            volume,
            page,
        } = address.location;
        BabelLocation {
            hex_name: address.hex_name,
            wall,
            shelf,
            volume,
            page,
            url,
            seed_phrase,
        }
    }
}

/// Build a converter from config, loading the configured wordlist if any
pub fn load_converter(config: TaleConfig) -> Result<SeedTale> {
    match &config.wordlist {
        Some(path) => {
            let wordlist = load_wordlist(path)?;
            Ok(SeedTale::with_owned_wordlist(config, wordlist))
        }
        None => Ok(SeedTale::new(config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn tale() -> SeedTale {
        SeedTale::new(TaleConfig::default())
    }

    #[test]
    fn test_zero_seed_syllables() {
        let babel = tale().seed_to_babel(ZERO_MNEMONIC).unwrap();
        assert_eq!(babel, "a".repeat(16));
        assert_eq!(tale().format_babel_string(&babel), "aaaa-aaaa-aaaa-aaaa");
        assert_eq!(tale().babel_to_seed(&babel).unwrap(), ZERO_MNEMONIC);
        assert_eq!(
            tale().format_as_sentences(ZERO_MNEMONIC).unwrap(),
            "Aa aa. Aa aa. Aa aa. Aa aa."
        );
    }

    #[test]
    fn test_describe_flattens_location() {
        let address = BabelAddress {
            hex_name: "xyz".into(),
            location: Location::new(2, 3, 4, 5).unwrap(),
        };
        let record = tale().describe("seed".into(), address);
        assert_eq!((record.wall, record.shelf, record.volume, record.page), (2, 3, 4, 5));
        assert_eq!(record.url, "https://libraryofbabel.info/book.cgi?xyz-w2-s3-v04:5");
    }

    #[test]
    fn test_read_page_infers_location() {
        let address = tale_babel::search("hidden words", &Location::new(3, 2, 9, 100).unwrap()).unwrap();
        let page = tale().read_page(&address.hex_name, None).unwrap();
        assert!(page.starts_with("hidden words"));
        assert!(tale().read_page(&address.hex_name, Some(Location::default())).is_err());
    }
}
