//! # tale-babel
//!
//! An offline Library of Babel. Every 3200-character page over the 29-symbol
//! alphabet has exactly one address:
//!
//! ```text
//! text ──normalize──► 3200 symbols ──base 29──► n            (n < 29^3200)
//!
//! coordinate = PPPVVSW  (page, volume, shelf, wall as decimal digits)
//! hex name   = base36(coordinate × 29^3200 + n)
//! ```
//!
//! Reading a page reverses the arithmetic. Nothing here touches the network;
//! URLs are only formatted.
//!
//! ## Usage
//!
//! ```ignore
//! use tale_babel::{search, Location};
//!
//! let address = search("abandon ability able", &Location::default())?;
//! let page = address.page()?;
//! println!("{}", address.url(tale_babel::DEFAULT_BASE_URL));
//! ```

pub mod encoder;
pub mod location;
pub mod page;

pub use encoder::{
    location_of, normalize, number_to_text, page_content, search, text_to_number,
    verify_text_on_page, ALPHABET, PAGE_LENGTH,
};
pub use location::{BabelAddress, Location, DEFAULT_BASE_URL};
pub use page::{format_page, CHARS_PER_LINE, LINES_PER_PAGE};

pub use tale_core::{Error, Result};
