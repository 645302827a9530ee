//! Cheer (foot) parser
//!
//! Every named foot becomes one alternative: its asai sequence followed by a lookahead.
//! Terminal feet must close the line; the sized feet need a word boundary. The
//! alternatives are tried terminal first, then four, three and two asai, and the
//! first to match wins.

use chumsky::prelude::*;
use std::sync::Arc;

use super::asai::{ner, nirai, vallina_ugaram};
use super::combinators::{letter, line_end_ahead, separator_ahead, ParserError, TokenLocation};
use crate::prosody::ast::{Asai, AsaiKind, Cheer, CheerKind};
use crate::prosody::lexer::Letter;

type AsaiParser = BoxedParser<'static, TokenLocation, Asai, ParserError>;
type AsaiSequence = BoxedParser<'static, TokenLocation, Vec<Asai>, ParserError>;
type CheerParser = BoxedParser<'static, TokenLocation, Cheer, ParserError>;

/// Shared asai parsers, built once per verse
struct AsaiParsers {
    ner: AsaiParser,
    nirai: AsaiParser,
    marker: AsaiParser,
}

impl AsaiParsers {
    fn new(source: Arc<String>) -> Self {
        Self {
            ner: ner(Arc::clone(&source)).boxed(),
            nirai: nirai(Arc::clone(&source)).boxed(),
            marker: vallina_ugaram(source).boxed(),
        }
    }

    fn of(&self, kind: AsaiKind) -> AsaiParser {
        match kind {
            AsaiKind::Ner => self.ner.clone(),
            AsaiKind::Nirai => self.nirai.clone(),
        }
    }

    /// The asai of `kind` in order, plus the ending marker where the name calls for it
    fn sequence(&self, kind: CheerKind) -> AsaiSequence {
        let start: AsaiSequence = empty().to(Vec::new()).boxed();
        let sequence = kind
            .pattern()
            .iter()
            .fold(start, |sequence, asai| push(sequence, self.of(*asai)));
        if kind.has_ending_marker() {
            push(sequence, self.marker.clone())
        } else {
            sequence
        }
    }
}

fn push(sequence: AsaiSequence, next: AsaiParser) -> AsaiSequence {
    sequence
        .then(next)
        .map(|(mut syllables, asai)| {
            syllables.push(asai);
            syllables
        })
        .boxed()
}

/// Parse a single foot, consuming one trailing punctuation mark if present
pub(crate) fn cheer(source: Arc<String>) -> impl Parser<TokenLocation, Cheer, Error = ParserError> + Clone {
    let asai = AsaiParsers::new(source);

    let alternatives: Vec<CheerParser> = CheerKind::TERMINAL
        .iter()
        .chain(CheerKind::FOUR.iter())
        .chain(CheerKind::THREE.iter())
        .chain(CheerKind::TWO.iter())
        .map(|&kind| -> CheerParser {
            let boundary = if kind.is_terminal() {
                line_end_ahead().boxed()
            } else {
                separator_ahead().boxed()
            };
            asai.sequence(kind)
                .then_ignore(boundary)
                .map(move |syllables| Cheer::new(kind, syllables))
                .boxed()
        })
        .collect();

    choice(alternatives).then_ignore(letter(|l| matches!(l, Letter::Punctuation(_))).or_not())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prosody::lexer::{lex_verse, LexedVerse};

    fn parse_cheer(source: &str) -> Option<Cheer> {
        let LexedVerse { normalized, tokens } = lex_verse(source);
        cheer(Arc::new(normalized))
            .then_ignore(end())
            .parse(tokens)
            .ok()
    }

    fn kind_of(source: &str) -> Option<CheerKind> {
        parse_cheer(source).map(|cheer| cheer.kind)
    }

    fn texts(cheer: &Cheer) -> Vec<&str> {
        cheer.syllables.iter().map(|asai| asai.text.as_str()).collect()
    }

    #[test]
    fn test_two_asai_feet() {
        assert_eq!(kind_of("அகர"), Some(CheerKind::Pulimaa));
        assert_eq!(kind_of("ஆதி"), Some(CheerKind::Themaa));
        assert_eq!(kind_of("தூவெண்"), Some(CheerKind::Themaa));
    }

    #[test]
    fn test_three_asai_feet() {
        let cheer = parse_cheer("எழுத்தெல்லாம்").unwrap();
        assert_eq!(cheer.kind, CheerKind::PulimaangKaai);
        assert_eq!(texts(&cheer), vec!["எழுத்", "தெல்", "லாம்"]);

        let cheer = parse_cheer("தோடுடைய").unwrap();
        assert_eq!(cheer.kind, CheerKind::KoovilangKaai);
        assert_eq!(texts(&cheer), vec!["தோ", "டுடை", "ய"]);
    }

    #[test]
    fn test_terminal_feet() {
        let cheer = parse_cheer("உலகு").unwrap();
        assert_eq!(cheer.kind, CheerKind::Pirappu);
        assert_eq!(texts(&cheer), vec!["உல", "கு"]);
        assert!(cheer.syllables[1].is_ending_marker());

        assert_eq!(kind_of("காசு"), Some(CheerKind::Kaasu));
        assert_eq!(kind_of("கல்"), Some(CheerKind::Naal));
        assert_eq!(kind_of("அஃது"), Some(CheerKind::Kaasu));
    }

    #[test]
    fn test_terminal_needs_line_end() {
        // Followed by another word, உலகு falls back to a sized foot
        let LexedVerse { normalized, tokens } = lex_verse("உலகு அகர");
        let cheer = cheer(Arc::new(normalized)).parse(tokens).unwrap();
        assert_eq!(cheer.kind, CheerKind::Pulimaa);
    }

    #[test]
    fn test_terminal_looks_past_elided_characters() {
        assert_eq!(kind_of("உலகு."), Some(CheerKind::Pirappu));
        assert_eq!(kind_of("கல்!"), Some(CheerKind::Naal));

        let LexedVerse { normalized, tokens } = lex_verse("உலகு \n");
        let cheer = cheer(Arc::new(normalized)).parse(tokens).unwrap();
        assert_eq!(cheer.kind, CheerKind::Pirappu);
        assert_eq!(texts(&cheer), vec!["உல", "கு"]);
    }

    #[test]
    fn test_trailing_punctuation_is_consumed() {
        assert_eq!(kind_of("அகர,"), Some(CheerKind::Pulimaa));
        assert_eq!(kind_of("முதல."), Some(CheerKind::Pulimaa));
    }

    #[test]
    fn test_unmatchable_word() {
        assert_eq!(kind_of("abc"), None);
        assert_eq!(kind_of("ஃ"), None);
    }
}
