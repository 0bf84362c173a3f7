//! # tale-story
//!
//! Encode 16 bytes of entropy as a short story, one byte per word slot.
//!
//! ```text
//! Classic (4 sentences × 4 slots):
//!   "A purple elephant dances in Tokyo."
//!      adj    noun     verb      location
//!
//! Fable (2 sentences × 8 slots):
//!   "The brave red fox quickly danced in a misty cottage near Paris."
//!        qual  col creat adv   verb        padj  place        location
//! ```
//!
//! Each slot has its own 256-word list. Word slots of one scheme are
//! disjoint, so decoding classifies every word by table membership. The
//! location (which may span several words) is read from the text after the
//! template's location marker.

pub mod codec;
pub mod scheme;
pub mod vocabulary;

pub use codec::{decode, encode};
pub use scheme::Scheme;
pub use vocabulary::{tables, SchemeTables, Slot, SLOT_SIZE};

pub use tale_core::{Entropy, Error, Result};
