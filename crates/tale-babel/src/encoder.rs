//! Text <-> integer <-> hex name arithmetic

use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use tale_core::{Error, Result};

use crate::{BabelAddress, Location};

/// Page symbols in digit order: a=0 .. z=25, space=26, comma=27, period=28
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz ,.";

/// Characters per page (80 × 40)
pub const PAGE_LENGTH: usize = 3200;

const RADIX: u32 = 29;
const HEX_RADIX: u32 = 36;

lazy_static! {
    /// Number of distinct pages, 29^3200
    static ref PAGE_SPACE: BigUint = BigUint::from(RADIX).pow(PAGE_LENGTH as u32);
}

fn digit(c: char) -> u8 {
    ALPHABET.find(c).unwrap_or(26) as u8
}

fn symbol(digit: u8) -> char {
    ALPHABET.as_bytes()[digit as usize % ALPHABET.len()] as char
}

/// Lowercase, replace anything outside the alphabet with a space, trim the
/// right edge and pad (or cut) to exactly one page
pub fn normalize(text: &str) -> String {
    let mapped: String = text
        .to_lowercase()
        .chars()
        .map(|c| if ALPHABET.contains(c) { c } else { ' ' })
        .collect();

    let mut page: String = mapped.trim_end_matches(' ').chars().take(PAGE_LENGTH).collect();
    let pad = PAGE_LENGTH - page.len();
    page.extend(std::iter::repeat(' ').take(pad));
    page
}

/// Read a normalized page as a base-29 numeral, first character most significant
pub fn text_to_number(text: &str) -> BigUint {
    normalize(text)
        .chars()
        .fold(BigUint::zero(), |acc, c| acc * RADIX + digit(c))
}

/// The page whose numeral is `number` (low 3200 digits)
pub fn number_to_text(number: &BigUint) -> String {
    let mut digits = number.to_radix_le(RADIX);
    digits.resize(PAGE_LENGTH, 0);
    digits.iter().rev().map(|&d| symbol(d)).collect()
}

fn parse_hex(hex_name: &str) -> Result<BigUint> {
    let hex = hex_name.trim().to_lowercase();
    if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::InvalidHexName(format!(
            "'{}' is not a base-36 number",
            preview(&hex)
        )));
    }
    BigUint::parse_bytes(hex.as_bytes(), HEX_RADIX)
        .ok_or_else(|| Error::InvalidHexName(format!("'{}' is not a base-36 number", preview(&hex))))
}

fn preview(hex: &str) -> String {
    hex.chars().take(16).collect()
}

/// Address of the page holding `text` at `location`
pub fn search(text: &str, location: &Location) -> Result<BabelAddress> {
    location.validate()?;
    let composite = BigUint::from(location.coordinate()) * &*PAGE_SPACE + text_to_number(text);
    let hex_name = composite.to_str_radix(HEX_RADIX);

    tracing::trace!(hex_len = hex_name.len(), %location, "located text");
    Ok(BabelAddress {
        hex_name,
        location: *location,
    })
}

/// Read the page stored under `hex_name` at `location`
///
/// Fails with `CoordinateMismatch` when the hex name was issued for a
/// different location.
pub fn page_content(hex_name: &str, location: &Location) -> Result<String> {
    location.validate()?;
    let value = parse_hex(hex_name)?;

    let shelved_at = &value / &*PAGE_SPACE;
    if shelved_at != BigUint::from(location.coordinate()) {
        return Err(Error::CoordinateMismatch(location.to_string()));
    }
    Ok(number_to_text(&(&value % &*PAGE_SPACE)))
}

/// Recover the location a hex name was issued for
pub fn location_of(hex_name: &str) -> Result<Location> {
    let value = parse_hex(hex_name)?;
    let coordinate = (&value / &*PAGE_SPACE)
        .to_u32()
        .ok_or_else(|| Error::InvalidHexName(format!("'{}' is beyond the library", preview(hex_name))))?;
    Location::from_coordinate(coordinate)
}

/// Whether `text` (lowercased, trimmed) appears on the page
pub fn verify_text_on_page(text: &str, hex_name: &str, location: &Location) -> Result<bool> {
    let content = page_content(hex_name, location)?;
    Ok(content.contains(text.to_lowercase().trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_known_address() {
        let address = search(ZERO_MNEMONIC, &Location::default()).unwrap();
        assert_eq!(address.hex_name.len(), 3010);
        assert!(address.hex_name.starts_with("5t5ixkj2hk71m6za"));
        assert!(address.hex_name.ends_with("4y7jhh5oizzkq78p"));

        let blank = search("", &Location::default()).unwrap();
        assert!(blank.hex_name.starts_with("5t67skxz9g39pbf9"));
    }

    #[test]
    fn test_roundtrip_at_locations() {
        let texts = [ZERO_MNEMONIC, "Hello, World.", "", "zzz ... ,,,"];
        let locations = [
            Location::default(),
            Location::new(2, 3, 4, 5).unwrap(),
            Location::new(4, 5, 32, 410).unwrap(),
        ];
        for text in texts {
            for location in &locations {
                let address = search(text, location).unwrap();
                assert_eq!(address.page().unwrap(), normalize(text));
                assert_eq!(location_of(&address.hex_name).unwrap(), *location);
            }
        }
    }

    #[test]
    fn test_roundtrip_random_full_pages() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(29);
        let symbols: Vec<char> = ALPHABET.chars().collect();

        for _ in 0..12 {
            let location = Location::new(
                rng.random_range(1..=4),
                rng.random_range(1..=5),
                rng.random_range(1..=32),
                rng.random_range(1..=410),
            )
            .unwrap();
            let len = rng.random_range(PAGE_LENGTH - 8..PAGE_LENGTH + 40);
            let text: String = (0..len)
                .map(|_| symbols[rng.random_range(0..symbols.len())])
                .collect();

            let address = search(&text, &location).unwrap();
            assert_eq!(address.page().unwrap(), normalize(&text));
            assert_eq!(location_of(&address.hex_name).unwrap(), location);
        }

        let location = Location::new(3, 4, 17, 333).unwrap();
        let text = "   leading, spaces.";
        let page = search(text, &location).unwrap().page().unwrap();
        assert!(page.starts_with(text));
        assert_eq!(page, normalize(text));
    }

    #[test]
    fn test_normalize() {
        let page = normalize("Hello, World! Ça va?");
        assert_eq!(page.len(), PAGE_LENGTH);
        assert!(page.starts_with("hello, world   a va"));
        assert!(page[19..].chars().all(|c| c == ' '));

        let long = "ab".repeat(PAGE_LENGTH);
        assert_eq!(normalize(&long), long[..PAGE_LENGTH]);
        assert_eq!(normalize("x\n\t"), format!("x{}", " ".repeat(PAGE_LENGTH - 1)));
    }

    #[test]
    fn test_numeral_edges() {
        assert!(text_to_number(&"a".repeat(PAGE_LENGTH)).is_zero());
        assert_eq!(number_to_text(&BigUint::zero()), "a".repeat(PAGE_LENGTH));

        let last = number_to_text(&(&*PAGE_SPACE - 1u32));
        assert_eq!(last, ".".repeat(PAGE_LENGTH));
        assert_eq!(text_to_number(&last), &*PAGE_SPACE - 1u32);
    }

    #[test]
    fn test_hex_name_is_case_insensitive() {
        let address = search("case", &Location::default()).unwrap();
        let upper = address.hex_name.to_uppercase();
        assert!(page_content(&upper, &Location::default()).unwrap().starts_with("case "));
    }

    #[test]
    fn test_invalid_hex_name() {
        for bad in ["", "not-base36!", "  "] {
            let err = page_content(bad, &Location::default()).unwrap_err();
            assert!(matches!(err, Error::InvalidHexName(_)), "{:?}", bad);
        }
    }

    #[test]
    fn test_coordinate_mismatch() {
        let here = Location::new(1, 1, 1, 2).unwrap();
        let address = search("misplaced", &here).unwrap();

        let err = page_content(&address.hex_name, &Location::default()).unwrap_err();
        assert!(matches!(err, Error::CoordinateMismatch(_)));

        let err = page_content("0", &Location::default()).unwrap_err();
        assert!(matches!(err, Error::CoordinateMismatch(_)));
    }

    #[test]
    fn test_invalid_location_rejected() {
        let bad = Location {
            wall: 9,
            ..Location::default()
        };
        assert!(matches!(search("x", &bad), Err(Error::InvalidLocation(_))));
    }

    #[test]
    fn test_verify_text_on_page() {
        let location = Location::default();
        let address = search(ZERO_MNEMONIC, &location).unwrap();
        assert!(verify_text_on_page("  ABANDON about ", &address.hex_name, &location).unwrap());
        assert!(!verify_text_on_page("zoo", &address.hex_name, &location).unwrap());
    }
}
