//! Tamil alphabet tables
//!
//! Static classification of codepoints into the roles the prosody grammar cares about.
//! A codepoint belongs to exactly one [`CharacterClass`], but classes overlap by role:
//! the virama is both its own class and a short vowel sign, and the voiceless stops are
//! consonants. The role predicates on [`CharacterClass`] answer those overlapping questions.
//!
//! Anything not in the tables (Latin text, digits, punctuation, whitespace) is
//! [`CharacterClass::Other`] and passes through every later stage unchanged.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// உயிர்க்குறில்
pub const SHORT_VOWELS: &str = "அஇஉஎஒ";

/// உயிர்நெடில்
pub const LONG_VOWELS: &str = "ஆஈஊஏஐஓஔ";

/// Combining short vowel signs. The virama is listed first: after the agaram swap it
/// stands for the inherent "a".
pub const SHORT_SIGNS: &str = "்ிுெொ";

/// Combining long vowel signs
pub const LONG_SIGNS: &str = "ாீூேைோௌ";

/// மெய்யெழுத்து, written without the virama
pub const CONSONANTS: &str = "கஙசஞடணதநபமயரலவழளறன";

/// வல்லினம்: the consonants that can carry the terminal "u" ending marker
pub const VOICELESS_STOPS: &str = "கசடதபற";

/// The vowel-absence mark (புள்ளி)
pub const VIRAMA: char = '\u{0BCD}';

/// ஆய்தம்
pub const AYTHAM: char = 'ஃ';

/// The short "u" sign of the ending marker (வல்லின உகரம்)
pub const U_SIGN: char = 'ு';

/// Role of a single codepoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CharacterClass {
    ShortVowel,
    LongVowel,
    ShortSign,
    LongSign,
    Virama,
    Consonant,
    VoicelessStop,
    Aytham,
    Other,
}

static TABLE: Lazy<HashMap<char, CharacterClass>> = Lazy::new(|| {
    let mut table = HashMap::new();
    let groups = [
        (SHORT_VOWELS, CharacterClass::ShortVowel),
        (LONG_VOWELS, CharacterClass::LongVowel),
        (SHORT_SIGNS, CharacterClass::ShortSign),
        (LONG_SIGNS, CharacterClass::LongSign),
        (CONSONANTS, CharacterClass::Consonant),
        (VOICELESS_STOPS, CharacterClass::VoicelessStop),
    ];
    // Later groups refine earlier ones (stops are consonants, the virama is a short sign).
    for (chars, class) in groups {
        for c in chars.chars() {
            table.insert(c, class);
        }
    }
    table.insert(VIRAMA, CharacterClass::Virama);
    table.insert(AYTHAM, CharacterClass::Aytham);
    table
});

/// Classify a codepoint
pub fn classify(c: char) -> CharacterClass {
    TABLE.get(&c).copied().unwrap_or(CharacterClass::Other)
}

impl CharacterClass {
    /// Any of the eighteen consonants, voiceless or not
    pub fn is_consonant(self) -> bool {
        matches!(self, CharacterClass::Consonant | CharacterClass::VoicelessStop)
    }

    pub fn is_voiceless_stop(self) -> bool {
        matches!(self, CharacterClass::VoicelessStop)
    }

    /// Short sign lookahead set, which counts the virama
    pub fn is_short_sign(self) -> bool {
        matches!(self, CharacterClass::ShortSign | CharacterClass::Virama)
    }

    pub fn is_long_sign(self) -> bool {
        matches!(self, CharacterClass::LongSign)
    }

    /// Any combining vowel sign, virama included
    pub fn is_vowel_sign(self) -> bool {
        self.is_short_sign() || self.is_long_sign()
    }
}
