//! Implementation of the letter lexer
//!
//! The actual tokenization is handled entirely by logos: one token per character,
//! except that a CRLF pair becomes a single [`Letter::Newline`]. Spans are byte ranges
//! into the text that was lexed.

use logos::Logos;
use std::ops::Range;

use super::letters::Letter;

/// Tokenize a string and collect tokens with their byte spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Letter, Range<usize>)> {
    let mut lexer = Letter::lexer(source);
    let mut tokens = Vec::with_capacity(source.len() / 2);

    while let Some(result) = lexer.next() {
        if let Ok(letter) = result {
            tokens.push((letter, lexer.span()));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(source: &str) -> Vec<Letter> {
        tokenize_with_spans(source)
            .into_iter()
            .map(|(letter, _)| letter)
            .collect()
    }

    #[test]
    fn test_tokenize_normalized_word() {
        // "கல்வி" after the agaram swap
        assert_eq!(
            letters("க்லவி"),
            vec![
                Letter::Consonant('க'),
                Letter::ShortSign('்'),
                Letter::Consonant('ல'),
                Letter::Consonant('வ'),
                Letter::ShortSign('ி'),
            ]
        );
    }

    #[test]
    fn test_spans_are_byte_ranges() {
        let tokens = tokenize_with_spans("அ ஆ");
        assert_eq!(
            tokens,
            vec![
                (Letter::ShortVowel('அ'), 0..3),
                (Letter::Blank(' '), 3..4),
                (Letter::LongVowel('ஆ'), 4..7),
            ]
        );
    }

    #[test]
    fn test_crlf_is_one_newline() {
        let tokens = tokenize_with_spans("அ\r\nஆ");
        assert_eq!(tokens[1], (Letter::Newline, 3..5));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_lone_carriage_return_is_blank() {
        assert_eq!(letters("\r"), vec![Letter::Blank('\r')]);
        assert_eq!(letters("\r\r\n"), vec![Letter::Blank('\r'), Letter::Newline]);
    }

    #[test]
    fn test_every_character_is_kept() {
        assert_eq!(
            letters("a ஃ\n;"),
            vec![
                Letter::Other('a'),
                Letter::Blank(' '),
                Letter::Aytham,
                Letter::Newline,
                Letter::Other(';'),
            ]
        );
    }

    #[test]
    fn test_empty_source() {
        assert!(tokenize_with_spans("").is_empty());
    }
}
