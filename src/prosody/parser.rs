//! Parser module for verse classification
//!
//! Grammar, from the leaves up:
//! - letters: குறில், நெடில், ஒற்று ([`combinators`])
//! - asai: நேர், நிரை and the வல்லின உகரம் ending marker ([`asai`])
//! - cheer: the thirty-two named feet ([`cheer`])
//! - adi and paa: lines and the poem ([`verse`])
//!
//! Parsers run over located letter tokens of agaram-swapped text and rebuild each
//! asai's text from its span, swapped back to original orthography.

pub mod api;
pub mod asai;
pub mod cheer;
pub mod combinators;
pub mod verse;


pub use api::parse_verse;
