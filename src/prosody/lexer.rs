//! Lexer module for verse text
//!
//! The lexer turns text into located [`Letter`] tokens for the grammar. It expects
//! agaram-swapped input; [`lex_with_spans`] performs the swap itself, so callers hand it
//! original verse text and get back tokens whose spans index the normalized string.

pub mod letters;
pub mod lexer_impl;

pub use letters::{Letter, TRAILING_PUNCTUATION};
pub use lexer_impl::tokenize_with_spans;

use std::ops::Range;

use crate::prosody::agaram::normalize;

/// Normalized text together with its located tokens
#[derive(Debug, Clone, PartialEq)]
pub struct LexedVerse {
    pub normalized: String,
    pub tokens: Vec<(Letter, Range<usize>)>,
}

/// Normalize `source` and lex the result
pub fn lex_verse(source: &str) -> LexedVerse {
    let normalized = normalize(source);
    let tokens = tokenize_with_spans(&normalized);
    tracing::trace!(
        chars = source.chars().count(),
        tokens = tokens.len(),
        "lexed verse"
    );
    LexedVerse { normalized, tokens }
}

/// Lexing function that preserves source spans for the parser.
/// Spans index the normalized text, not `source`.
pub fn lex_with_spans(source: &str) -> Vec<(Letter, Range<usize>)> {
    lex_verse(source).tokens
}
