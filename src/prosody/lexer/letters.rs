//! Letter token definitions
//!
//! The lexer runs over agaram-swapped text, so a [`Letter::Consonant`] is always a bare
//! mei and the virama arrives as a [`Letter::ShortSign`] standing for the inherent "a".
//! Tokens carry their codepoint so the grammar can check the voiceless stops and the
//! "u" of the ending marker. The character classes are the tables in
//! [`crate::prosody::alphabet`], written out as logos patterns.

use logos::Logos;
use serde::Serialize;
use std::fmt;

use crate::prosody::alphabet::{classify, AYTHAM, U_SIGN};

/// Punctuation that may trail a foot
pub const TRAILING_PUNCTUATION: &str = ".,!-_?";

fn captured(lex: &mut logos::Lexer<Letter>) -> Option<char> {
    lex.slice().chars().next()
}

/// A single located character of normalized verse text
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Letter {
    #[regex("[அஇஉஎஒ]", captured, priority = 3)]
    ShortVowel(char),
    #[regex("[ஆஈஊஏஐஓஔ]", captured, priority = 3)]
    LongVowel(char),
    // The virama is the first of the short signs
    #[regex("[்ிுெொ]", captured, priority = 3)]
    ShortSign(char),
    #[regex("[ாீூேைோௌ]", captured, priority = 3)]
    LongSign(char),
    #[regex("[கஙசஞடணதநபமயரலவழளறன]", captured, priority = 3)]
    Consonant(char),
    #[token("ஃ")]
    Aytham,
    /// Horizontal whitespace
    #[regex(r"[ \t\r]", captured, priority = 3)]
    Blank(char),
    /// Line feed, or a CRLF pair
    #[token("\n")]
    #[token("\r\n")]
    Newline,
    #[regex(r"[.,!?_\-]", captured, priority = 3)]
    Punctuation(char),
    #[regex(r"[^\n]", captured, priority = 1)]
    Other(char),
}

impl Letter {
    pub fn is_consonant(&self) -> bool {
        matches!(self, Letter::Consonant(_))
    }

    /// Letters that can extend a syllable as a trailing cluster (otru)
    pub fn is_cluster_letter(&self) -> bool {
        matches!(self, Letter::Consonant(_) | Letter::Aytham)
    }

    pub fn is_voiceless_stop(&self) -> bool {
        matches!(self, Letter::Consonant(c) if classify(*c).is_voiceless_stop())
    }

    pub fn is_vowel_sign(&self) -> bool {
        matches!(self, Letter::ShortSign(_) | Letter::LongSign(_))
    }

    /// The short "u" sign
    pub fn is_u_sign(&self) -> bool {
        matches!(self, Letter::ShortSign(c) if *c == U_SIGN)
    }

    /// Whitespace or a line break
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Letter::Blank(_) | Letter::Newline)
    }

    /// Anything that ends a word: whitespace, a line break or trailing punctuation
    pub fn is_separator(&self) -> bool {
        self.is_whitespace() || matches!(self, Letter::Punctuation(_))
    }

    /// The character this token was lexed from (CRLF reports the line feed)
    pub fn as_char(&self) -> char {
        match *self {
            Letter::ShortVowel(c)
            | Letter::LongVowel(c)
            | Letter::ShortSign(c)
            | Letter::LongSign(c)
            | Letter::Consonant(c)
            | Letter::Blank(c)
            | Letter::Punctuation(c)
            | Letter::Other(c) => c,
            Letter::Aytham => AYTHAM,
            Letter::Newline => '\n',
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Letter::ShortVowel(_) => "ShortVowel",
            Letter::LongVowel(_) => "LongVowel",
            Letter::ShortSign(_) => "ShortSign",
            Letter::LongSign(_) => "LongSign",
            Letter::Consonant(_) => "Consonant",
            Letter::Aytham => "Aytham",
            Letter::Blank(_) => "Blank",
            Letter::Newline => "Newline",
            Letter::Punctuation(_) => "Punctuation",
            Letter::Other(_) => "Other",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.as_char();
        // Vowel signs print as themselves; only control characters are escaped
        if c.is_control() {
            write!(f, "{} '{}'", self.kind_name(), c.escape_default())
        } else {
            write!(f, "{} '{}'", self.kind_name(), c)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prosody::alphabet::{
        CONSONANTS, LONG_SIGNS, LONG_VOWELS, SHORT_SIGNS, SHORT_VOWELS,
    };

    fn lex_one(c: char) -> Letter {
        let mut buf = [0u8; 4];
        let mut lexer = Letter::lexer(c.encode_utf8(&mut buf));
        let letter = lexer.next().expect("one token").expect("no lex error");
        assert_eq!(lexer.next(), None);
        letter
    }

    #[test]
    fn test_patterns_follow_alphabet_tables() {
        for c in SHORT_VOWELS.chars() {
            assert_eq!(lex_one(c), Letter::ShortVowel(c));
        }
        for c in LONG_VOWELS.chars() {
            assert_eq!(lex_one(c), Letter::LongVowel(c));
        }
        for c in SHORT_SIGNS.chars() {
            assert_eq!(lex_one(c), Letter::ShortSign(c));
        }
        for c in LONG_SIGNS.chars() {
            assert_eq!(lex_one(c), Letter::LongSign(c));
        }
        for c in CONSONANTS.chars() {
            assert_eq!(lex_one(c), Letter::Consonant(c));
        }
        for c in TRAILING_PUNCTUATION.chars() {
            assert_eq!(lex_one(c), Letter::Punctuation(c));
        }
        assert_eq!(lex_one(AYTHAM), Letter::Aytham);
    }

    #[test]
    fn test_anything_else_is_other() {
        assert_eq!(lex_one('a'), Letter::Other('a'));
        assert_eq!(lex_one(';'), Letter::Other(';'));
        assert_eq!(lex_one('௧'), Letter::Other('௧'));
    }

    #[test]
    fn test_virama_is_short_sign() {
        assert_eq!(lex_one('்'), Letter::ShortSign('்'));
        assert!(lex_one('்').is_vowel_sign());
    }

    #[test]
    fn test_separators() {
        for c in [' ', '\t', '\n', '.', ',', '!', '-', '_', '?'] {
            assert!(lex_one(c).is_separator(), "{:?}", c);
        }
        assert!(!lex_one(';').is_separator());
        assert!(!lex_one('க').is_separator());
    }

    #[test]
    fn test_ending_marker_letters() {
        assert!(lex_one('ட').is_voiceless_stop());
        assert!(!lex_one('ன').is_voiceless_stop());
        assert!(lex_one('ு').is_u_sign());
        assert!(!lex_one('ூ').is_u_sign());
    }

    #[test]
    fn test_cluster_letters() {
        assert!(lex_one('ன').is_cluster_letter());
        assert!(lex_one('ஃ').is_cluster_letter());
        assert!(!lex_one('அ').is_cluster_letter());
    }

    #[test]
    fn test_display() {
        assert_eq!(lex_one('க').to_string(), "Consonant 'க'");
        assert_eq!(Letter::Newline.to_string(), "Newline '\\n'");
        assert_eq!(lex_one('்').to_string(), "ShortSign '்'");
    }
}
