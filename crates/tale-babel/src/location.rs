//! Page coordinates and addresses

use std::fmt;

use serde::{Deserialize, Serialize};
use tale_core::{Error, Result};

/// Public library front end used for links
pub const DEFAULT_BASE_URL: &str = "https://libraryofbabel.info/book.cgi";

const WALLS: u32 = 4;
const SHELVES: u32 = 5;
const VOLUMES: u32 = 32;
const PAGES: u32 = 410;

/// Physical position of a page: hexagon wall, shelf, volume, page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub wall: u32,
    pub shelf: u32,
    pub volume: u32,
    pub page: u32,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            wall: 1,
            shelf: 1,
            volume: 1,
            page: 1,
        }
    }
}

impl Location {
    pub fn new(wall: u32, shelf: u32, volume: u32, page: u32) -> Result<Self> {
        let location = Self {
            wall,
            shelf,
            volume,
            page,
        };
        location.validate()?;
        Ok(location)
    }

    /// Check every field against the library's layout
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("wall", self.wall, WALLS),
            ("shelf", self.shelf, SHELVES),
            ("volume", self.volume, VOLUMES),
            ("page", self.page, PAGES),
        ];
        for (name, value, max) in fields {
            if !(1..=max).contains(&value) {
                return Err(Error::InvalidLocation(format!(
                    "{} {} (expected 1-{})",
                    name, value, max
                )));
            }
        }
        Ok(())
    }

    /// Decimal packing `PPPVVSW`
    pub fn coordinate(&self) -> u32 {
        self.page * 10_000 + self.volume * 100 + self.shelf * 10 + self.wall
    }

    /// Unpack a coordinate, rejecting values outside the layout
    pub fn from_coordinate(coordinate: u32) -> Result<Self> {
        Self::new(
            coordinate % 10,
            coordinate / 10 % 10,
            coordinate / 100 % 100,
            coordinate / 10_000,
        )
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "w{}-s{}-v{:02}:{}",
            self.wall, self.shelf, self.volume, self.page
        )
    }
}

/// A page's hex name together with where it is shelved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BabelAddress {
    pub hex_name: String,
    pub location: Location,
}

impl BabelAddress {
    /// Link to this page on a library front end
    pub fn url(&self, base: &str) -> String {
        format!("{}?{}-{}", base, self.hex_name, self.location)
    }

    /// The 3200 characters stored at this address
    pub fn page(&self) -> Result<String> {
        crate::page_content(&self.hex_name, &self.location)
    }
}
