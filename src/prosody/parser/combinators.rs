//! Letter-level parser combinators (எழுத்து)
//!
//! Everything here works on located [`Letter`] tokens of agaram-swapped text and
//! returns the matched tokens, so callers can recover the byte range they cover.
//! Lookaheads never consume input; each one also succeeds at end of input.

use chumsky::prelude::*;
use std::ops::Range;

use crate::prosody::agaram::normalize;
use crate::prosody::lexer::Letter;

/// Type alias for token with location
pub(crate) type TokenLocation = (Letter, Range<usize>);

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenLocation>;

/// Matched tokens, in order
pub(crate) type Letters = Vec<TokenLocation>;

/// Match one token whose letter satisfies `pred`
pub(crate) fn letter<F>(pred: F) -> impl Parser<TokenLocation, TokenLocation, Error = ParserError> + Clone
where
    F: Fn(&Letter) -> bool + Clone,
{
    filter(move |(l, _): &TokenLocation| pred(l))
}

/// Concatenate two matched runs
pub(crate) fn concat((mut head, tail): (Letters, Letters)) -> Letters {
    head.extend(tail);
    head
}

/// Succeeds when the next token is not a vowel sign
pub(crate) fn no_vowel_sign_ahead() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone
{
    letter(|l| !l.is_vowel_sign()).rewind().ignored().or(end())
}

/// Succeeds before whitespace, a line break, trailing punctuation or end of input
pub(crate) fn separator_ahead() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    letter(Letter::is_separator).rewind().ignored().or(end())
}

/// Succeeds when only an optional punctuation mark and blanks stand before a line
/// break or the end of input
pub(crate) fn line_end_ahead() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    letter(|l| matches!(l, Letter::Punctuation(_)))
        .or_not()
        .then(letter(|l| matches!(l, Letter::Blank(_))).repeated())
        .then(letter(|l| matches!(l, Letter::Newline)).ignored().or(end()))
        .rewind()
        .ignored()
}

fn uyirmei<F>(sign: F) -> impl Parser<TokenLocation, Letters, Error = ParserError> + Clone
where
    F: Fn(&Letter) -> bool + Clone,
{
    letter(Letter::is_consonant)
        .then(letter(sign))
        .map(|(consonant, sign)| vec![consonant, sign])
}

/// குறில்: consonant + short sign (virama included), or a short vowel
pub(crate) fn kuril() -> impl Parser<TokenLocation, Letters, Error = ParserError> + Clone {
    uyirmei(|l| matches!(l, Letter::ShortSign(_)))
        .or(letter(|l| matches!(l, Letter::ShortVowel(_))).map(|vowel| vec![vowel]))
}

/// நெடில்: consonant + long sign, or a long vowel
pub(crate) fn nedil() -> impl Parser<TokenLocation, Letters, Error = ParserError> + Clone {
    uyirmei(|l| matches!(l, Letter::LongSign(_)))
        .or(letter(|l| matches!(l, Letter::LongVowel(_))).map(|vowel| vec![vowel]))
}

/// ஒற்று: one or more bare consonants (or aytham), none of which starts a syllable
pub(crate) fn otru() -> impl Parser<TokenLocation, Letters, Error = ParserError> + Clone {
    letter(Letter::is_cluster_letter)
        .then_ignore(no_vowel_sign_ahead())
        .repeated()
        .at_least(1)
}

/// Helper: compute the byte range covered by a run of tokens
pub(crate) fn compute_byte_range_bounds(tokens: &[TokenLocation]) -> Range<usize> {
    if tokens.is_empty() {
        0..0
    } else {
        let start = tokens.iter().map(|(_, r)| r.start).min().unwrap_or(0);
        let end = tokens.iter().map(|(_, r)| r.end).max().unwrap_or(0);
        start..end
    }
}

/// Helper: matched tokens back in original orthography
pub(crate) fn original_text(normalized: &str, tokens: &[TokenLocation]) -> String {
    normalized
        .get(compute_byte_range_bounds(tokens))
        .map(normalize)
        .unwrap_or_default()
}
