//! # yaappu
//!
//! Prosodic classification of classical Tamil verse.
//!
//! A verse is segmented into metrical syllables (asai), the syllables are grouped
//! into named feet (cheer) and the feet into lines (adi), producing a labelled
//! [`Paa`](prosody::ast::Paa) tree.
//!
//! ```rust,ignore
//! use yaappu::parse_verse;
//!
//! let paa = parse_verse("அகர முதல எழுத்தெல்லாம் ஆதி\nபகவன் முதற்றே உலகு")?;
//! assert_eq!(paa.lines.len(), 2);
//! ```
//!
//! ## Testing
//!
//! For the fluent tree assertions used throughout the tests, see the
//! [testing module](prosody::testing).

pub mod prosody;

pub use prosody::agaram::normalize;
pub use prosody::alphabet::{classify, CharacterClass};
pub use prosody::ast::{Adi, Asai, AsaiForm, AsaiKind, Cheer, CheerKind, ClassifyError, Paa};
pub use prosody::parser::parse_verse;
