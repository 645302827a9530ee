//! Adi (line) and Paa (poem) parsers

use chumsky::prelude::*;
use std::sync::Arc;

use super::cheer::cheer;
use super::combinators::{letter, ParserError, TokenLocation};
use crate::prosody::ast::{Adi, Paa};
use crate::prosody::lexer::Letter;

/// One or more feet separated by blanks, then any line breaks. Blank lines collapse
/// into the preceding line's terminator.
pub(crate) fn adi(source: Arc<String>) -> impl Parser<TokenLocation, Adi, Error = ParserError> + Clone {
    let blank = letter(|l| matches!(l, Letter::Blank(_)));
    let newline = letter(|l| matches!(l, Letter::Newline));

    cheer(source)
        .then_ignore(blank.repeated())
        .repeated()
        .at_least(1)
        .then_ignore(newline.repeated())
        .map(Adi::new)
}

/// The whole input: at least one line, nothing left over
pub(crate) fn paa(source: Arc<String>) -> impl Parser<TokenLocation, Paa, Error = ParserError> + Clone {
    adi(source).repeated().at_least(1).then_ignore(end()).map(Paa::new)
}
