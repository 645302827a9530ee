//! Public parsing entry point

use chumsky::prelude::*;
use std::sync::Arc;

use super::combinators::{ParserError, TokenLocation};
use super::verse::paa;
use crate::prosody::agaram::normalize;
use crate::prosody::alphabet::classify;
use crate::prosody::ast::{ClassifyError, Paa};
use crate::prosody::lexer::{lex_verse, LexedVerse};

/// Classify a verse into its poem tree.
///
/// The whole input must parse: every word has to be a named foot, feet on a line are
/// separated by blanks and lines by line breaks.
pub fn parse_verse(source: &str) -> Result<Paa, ClassifyError> {
    let LexedVerse { normalized, tokens } = lex_verse(source);
    let normalized = Arc::new(normalized);

    match paa(Arc::clone(&normalized)).parse(tokens.clone()) {
        Ok(paa) => {
            tracing::debug!(
                lines = paa.lines.len(),
                feet = paa.foot_count(),
                "classified verse"
            );
            Ok(paa)
        }
        Err(errors) => {
            let error = locate(&normalized, &tokens, &errors);
            tracing::debug!(
                line = error.line(),
                column = error.column(),
                "verse has no metrical parse"
            );
            Err(error)
        }
    }
}

/// Position of the furthest failure, 1-based, counted in characters of the original text
fn locate(normalized: &str, tokens: &[TokenLocation], errors: &[ParserError]) -> ClassifyError {
    let furthest = errors.iter().map(|e| e.span().start).max().unwrap_or(0);
    let offset = tokens
        .get(furthest)
        .map(|(_, span)| span.start)
        .unwrap_or(normalized.len());
    let prefix = normalized.get(..offset).unwrap_or_default();
    let mut restored = normalize(prefix);
    // A bare consonant just before the failure regains its virama, but the failure sits
    // in the vowel slot that virama fills
    if prefix.chars().next_back().is_some_and(|c| classify(c).is_consonant()) {
        restored.pop();
    }

    let line = restored.matches('\n').count() + 1;
    let column = restored
        .rsplit('\n')
        .next()
        .map(|last| last.trim_end_matches('\r').chars().count())
        .unwrap_or(0)
        + 1;
    ClassifyError::Unparsable { line, column }
}
