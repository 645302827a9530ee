//! Asai (syllable) parsers
//!
//! Alternatives are tried in order and the first success wins, so longer shapes are
//! listed before their prefixes. A bare short syllable only counts as நேர் when a word
//! boundary follows; otherwise it has to pair up into a நிரை.

use chumsky::prelude::*;
use std::sync::Arc;

use super::combinators::{
    concat, kuril, letter, nedil, original_text, otru, separator_ahead, Letters, ParserError,
    TokenLocation,
};
use crate::prosody::ast::{Asai, AsaiForm};
use crate::prosody::lexer::Letter;

/// Build an asai of `form` from its matched tokens
fn build(source: &Arc<String>, form: AsaiForm) -> impl Fn(Letters) -> Asai + Clone {
    let source = Arc::clone(source);
    move |letters| Asai::new(form, original_text(&source, &letters))
}

/// நேரசை
pub(crate) fn ner(source: Arc<String>) -> impl Parser<TokenLocation, Asai, Error = ParserError> + Clone {
    choice((
        nedil()
            .then(otru())
            .map(concat)
            .map(build(&source, AsaiForm::NedilOtru)),
        kuril()
            .then(otru())
            .map(concat)
            .map(build(&source, AsaiForm::KurilOtru)),
        nedil().map(build(&source, AsaiForm::ThaniNedil)),
        kuril()
            .then_ignore(separator_ahead())
            .map(build(&source, AsaiForm::ThaniKuril)),
    ))
}

/// நிரையசை
pub(crate) fn nirai(source: Arc<String>) -> impl Parser<TokenLocation, Asai, Error = ParserError> + Clone {
    choice((
        kuril()
            .then(nedil())
            .map(concat)
            .then(otru())
            .map(concat)
            .map(build(&source, AsaiForm::KurilNedilOtru)),
        kuril()
            .then(kuril())
            .map(concat)
            .then(otru())
            .map(concat)
            .map(build(&source, AsaiForm::KurilInaiOtru)),
        kuril()
            .then(nedil())
            .map(concat)
            .map(build(&source, AsaiForm::KurilNedil)),
        kuril()
            .then(kuril())
            .map(concat)
            .map(build(&source, AsaiForm::KurilInai)),
    ))
}

/// வல்லின உகரம்: a voiceless stop carrying the short "u", closing பிறப்பு and காசு
pub(crate) fn vallina_ugaram(
    source: Arc<String>,
) -> impl Parser<TokenLocation, Asai, Error = ParserError> + Clone {
    letter(Letter::is_voiceless_stop)
        .then(letter(Letter::is_u_sign))
        .map(|(stop, sign)| vec![stop, sign])
        .map(build(&source, AsaiForm::VallinaUgaram))
}
