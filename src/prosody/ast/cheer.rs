//! Cheer (metrical foot) nodes and the foot name table

use serde::Serialize;

use super::asai::AsaiKind::{Ner, Nirai};
use super::asai::{Asai, AsaiKind};
use super::traits::{AstNode, TextNode};

/// The named foot categories.
///
/// A name is fixed by the ordered tuple of asai kinds plus the length class. The
/// terminal forms only close a line; two of them end in the வல்லின உகரம் marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CheerKind {
    // நாலசைச்சீர்
    #[serde(rename = "கருவிளநறுநிழல்")]
    KaruvilaNaruNizhal,
    #[serde(rename = "கருவிளநறும்பூ")]
    KaruvilaNarumPoo,
    #[serde(rename = "கருவிளந்தண்ணிழல்")]
    KaruvilaThanNizhal,
    #[serde(rename = "கருவிளந்தண்பூ")]
    KaruvilaThanPoo,
    #[serde(rename = "புளிமாநறுநிழல்")]
    PulimaaNaruNizhal,
    #[serde(rename = "புளிமாநறும்பூ")]
    PulimaaNarumPoo,
    #[serde(rename = "புளிமாந்தண்ணிழல்")]
    PulimaaThanNizhal,
    #[serde(rename = "புளிமாந்தண்பூ")]
    PulimaaThanPoo,
    #[serde(rename = "கூவிளநறுநிழல்")]
    KoovilaNaruNizhal,
    #[serde(rename = "கூவிளநறும்பூ")]
    KoovilaNarumPoo,
    #[serde(rename = "கூவிளந்தண்ணிழல்")]
    KoovilaThanNizhal,
    #[serde(rename = "கூவிளந்தண்பூ")]
    KoovilaThanPoo,
    #[serde(rename = "தேமாநறுநிழல்")]
    ThemaaNaruNizhal,
    #[serde(rename = "தேமாநறும்பூ")]
    ThemaaNarumPoo,
    #[serde(rename = "தேமாந்தண்ணிழல்")]
    ThemaaThanNizhal,
    #[serde(rename = "தேமாந்தண்பூ")]
    ThemaaThanPoo,

    // மூவசைச்சீர்
    #[serde(rename = "கருவிளங்கனி")]
    KaruvilangKani,
    #[serde(rename = "கருவிளங்காய்")]
    KaruvilangKaai,
    #[serde(rename = "புளிமாங்கனி")]
    PulimaangKani,
    #[serde(rename = "புளிமாங்காய்")]
    PulimaangKaai,
    #[serde(rename = "கூவிளங்கனி")]
    KoovilangKani,
    #[serde(rename = "கூவிளங்காய்")]
    KoovilangKaai,
    #[serde(rename = "தேமாங்கனி")]
    ThemaangKani,
    #[serde(rename = "தேமாங்காய்")]
    ThemaangKaai,

    // ஈரசைச்சீர்
    #[serde(rename = "கருவிளம்")]
    Karuvilam,
    #[serde(rename = "புளிமா")]
    Pulimaa,
    #[serde(rename = "கூவிளம்")]
    Koovilam,
    #[serde(rename = "தேமா")]
    Themaa,

    // ஈற்றுச்சீர்
    #[serde(rename = "பிறப்பு")]
    Pirappu,
    #[serde(rename = "காசு")]
    Kaasu,
    #[serde(rename = "மலர்")]
    Malar,
    #[serde(rename = "நாள்")]
    Naal,
}

impl CheerKind {
    /// Four-asai feet in match order
    pub const FOUR: [CheerKind; 16] = [
        CheerKind::KaruvilaNaruNizhal,
        CheerKind::KaruvilaNarumPoo,
        CheerKind::KaruvilaThanNizhal,
        CheerKind::KaruvilaThanPoo,
        CheerKind::PulimaaNaruNizhal,
        CheerKind::PulimaaNarumPoo,
        CheerKind::PulimaaThanNizhal,
        CheerKind::PulimaaThanPoo,
        CheerKind::KoovilaNaruNizhal,
        CheerKind::KoovilaNarumPoo,
        CheerKind::KoovilaThanNizhal,
        CheerKind::KoovilaThanPoo,
        CheerKind::ThemaaNaruNizhal,
        CheerKind::ThemaaNarumPoo,
        CheerKind::ThemaaThanNizhal,
        CheerKind::ThemaaThanPoo,
    ];

    /// Three-asai feet in match order
    pub const THREE: [CheerKind; 8] = [
        CheerKind::KaruvilangKani,
        CheerKind::KaruvilangKaai,
        CheerKind::PulimaangKani,
        CheerKind::PulimaangKaai,
        CheerKind::KoovilangKani,
        CheerKind::KoovilangKaai,
        CheerKind::ThemaangKani,
        CheerKind::ThemaangKaai,
    ];

    /// Two-asai feet in match order
    pub const TWO: [CheerKind; 4] = [
        CheerKind::Karuvilam,
        CheerKind::Pulimaa,
        CheerKind::Koovilam,
        CheerKind::Themaa,
    ];

    /// Line-final feet in match order
    pub const TERMINAL: [CheerKind; 4] = [
        CheerKind::Pirappu,
        CheerKind::Kaasu,
        CheerKind::Malar,
        CheerKind::Naal,
    ];

    /// Traditional name
    pub fn name(self) -> &'static str {
        match self {
            CheerKind::KaruvilaNaruNizhal => "கருவிளநறுநிழல்",
            CheerKind::KaruvilaNarumPoo => "கருவிளநறும்பூ",
            CheerKind::KaruvilaThanNizhal => "கருவிளந்தண்ணிழல்",
            CheerKind::KaruvilaThanPoo => "கருவிளந்தண்பூ",
            CheerKind::PulimaaNaruNizhal => "புளிமாநறுநிழல்",
            CheerKind::PulimaaNarumPoo => "புளிமாநறும்பூ",
            CheerKind::PulimaaThanNizhal => "புளிமாந்தண்ணிழல்",
            CheerKind::PulimaaThanPoo => "புளிமாந்தண்பூ",
            CheerKind::KoovilaNaruNizhal => "கூவிளநறுநிழல்",
            CheerKind::KoovilaNarumPoo => "கூவிளநறும்பூ",
            CheerKind::KoovilaThanNizhal => "கூவிளந்தண்ணிழல்",
            CheerKind::KoovilaThanPoo => "கூவிளந்தண்பூ",
            CheerKind::ThemaaNaruNizhal => "தேமாநறுநிழல்",
            CheerKind::ThemaaNarumPoo => "தேமாநறும்பூ",
            CheerKind::ThemaaThanNizhal => "தேமாந்தண்ணிழல்",
            CheerKind::ThemaaThanPoo => "தேமாந்தண்பூ",
            CheerKind::KaruvilangKani => "கருவிளங்கனி",
            CheerKind::KaruvilangKaai => "கருவிளங்காய்",
            CheerKind::PulimaangKani => "புளிமாங்கனி",
            CheerKind::PulimaangKaai => "புளிமாங்காய்",
            CheerKind::KoovilangKani => "கூவிளங்கனி",
            CheerKind::KoovilangKaai => "கூவிளங்காய்",
            CheerKind::ThemaangKani => "தேமாங்கனி",
            CheerKind::ThemaangKaai => "தேமாங்காய்",
            CheerKind::Karuvilam => "கருவிளம்",
            CheerKind::Pulimaa => "புளிமா",
            CheerKind::Koovilam => "கூவிளம்",
            CheerKind::Themaa => "தேமா",
            CheerKind::Pirappu => "பிறப்பு",
            CheerKind::Kaasu => "காசு",
            CheerKind::Malar => "மலர்",
            CheerKind::Naal => "நாள்",
        }
    }

    /// Asai kinds in order, not counting a trailing ending marker
    pub fn pattern(self) -> &'static [AsaiKind] {
        match self {
            CheerKind::KaruvilaNaruNizhal => &[Nirai, Nirai, Nirai, Nirai],
            CheerKind::KaruvilaNarumPoo => &[Nirai, Nirai, Nirai, Ner],
            CheerKind::KaruvilaThanNizhal => &[Nirai, Nirai, Ner, Nirai],
            CheerKind::KaruvilaThanPoo => &[Nirai, Nirai, Ner, Ner],
            CheerKind::PulimaaNaruNizhal => &[Nirai, Ner, Nirai, Nirai],
            CheerKind::PulimaaNarumPoo => &[Nirai, Ner, Nirai, Ner],
            CheerKind::PulimaaThanNizhal => &[Nirai, Ner, Ner, Nirai],
            CheerKind::PulimaaThanPoo => &[Nirai, Ner, Ner, Ner],
            CheerKind::KoovilaNaruNizhal => &[Ner, Nirai, Nirai, Nirai],
            CheerKind::KoovilaNarumPoo => &[Ner, Nirai, Nirai, Ner],
            CheerKind::KoovilaThanNizhal => &[Ner, Nirai, Ner, Nirai],
            CheerKind::KoovilaThanPoo => &[Ner, Nirai, Ner, Ner],
            CheerKind::ThemaaNaruNizhal => &[Ner, Ner, Nirai, Nirai],
            CheerKind::ThemaaNarumPoo => &[Ner, Ner, Nirai, Ner],
            CheerKind::ThemaaThanNizhal => &[Ner, Ner, Ner, Nirai],
            CheerKind::ThemaaThanPoo => &[Ner, Ner, Ner, Ner],
            CheerKind::KaruvilangKani => &[Nirai, Nirai, Nirai],
            CheerKind::KaruvilangKaai => &[Nirai, Nirai, Ner],
            CheerKind::PulimaangKani => &[Nirai, Ner, Nirai],
            CheerKind::PulimaangKaai => &[Nirai, Ner, Ner],
            CheerKind::KoovilangKani => &[Ner, Nirai, Nirai],
            CheerKind::KoovilangKaai => &[Ner, Nirai, Ner],
            CheerKind::ThemaangKani => &[Ner, Ner, Nirai],
            CheerKind::ThemaangKaai => &[Ner, Ner, Ner],
            CheerKind::Karuvilam => &[Nirai, Nirai],
            CheerKind::Pulimaa => &[Nirai, Ner],
            CheerKind::Koovilam => &[Ner, Nirai],
            CheerKind::Themaa => &[Ner, Ner],
            CheerKind::Pirappu => &[Nirai],
            CheerKind::Kaasu => &[Ner],
            CheerKind::Malar => &[Nirai],
            CheerKind::Naal => &[Ner],
        }
    }

    /// Whether the foot ends in a வல்லின உகரம் after its pattern
    pub fn has_ending_marker(self) -> bool {
        matches!(self, CheerKind::Pirappu | CheerKind::Kaasu)
    }

    /// Whether the foot may only close a line
    pub fn is_terminal(self) -> bool {
        Self::TERMINAL.contains(&self)
    }
}

/// A named foot and its asai in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cheer {
    pub kind: CheerKind,
    pub syllables: Vec<Asai>,
}

impl Cheer {
    pub fn new(kind: CheerKind, syllables: Vec<Asai>) -> Self {
        Self { kind, syllables }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.name()
    }

    /// Asai kinds in order, the ending marker included
    pub fn asai_kinds(&self) -> Vec<AsaiKind> {
        self.syllables.iter().map(|asai| asai.kind).collect()
    }
}

impl AstNode for Cheer {
    fn node_type(&self) -> &'static str {
        "சீர்"
    }

    fn display_label(&self) -> String {
        format!("{} {}", self.type_name(), self.text())
    }
}

impl TextNode for Cheer {
    fn text(&self) -> String {
        self.syllables.iter().map(|asai| asai.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prosody::ast::AsaiForm;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_complete() {
        assert_eq!(CheerKind::FOUR.len(), 16);
        assert_eq!(CheerKind::THREE.len(), 8);
        assert_eq!(CheerKind::TWO.len(), 4);
        assert_eq!(CheerKind::TERMINAL.len(), 4);

        let sized: Vec<CheerKind> = CheerKind::FOUR
            .iter()
            .chain(CheerKind::THREE.iter())
            .chain(CheerKind::TWO.iter())
            .copied()
            .collect();
        let patterns: HashSet<&[AsaiKind]> = sized.iter().map(|kind| kind.pattern()).collect();
        assert_eq!(patterns.len(), sized.len(), "every pattern names one foot");
    }

    #[test]
    fn test_names_are_distinct() {
        let all: Vec<CheerKind> = CheerKind::FOUR
            .iter()
            .chain(CheerKind::THREE.iter())
            .chain(CheerKind::TWO.iter())
            .chain(CheerKind::TERMINAL.iter())
            .copied()
            .collect();
        let names: HashSet<&str> = all.iter().map(|kind| kind.name()).collect();
        assert_eq!(names.len(), 32);
    }

    #[test]
    fn test_terminal_kinds() {
        assert!(CheerKind::Kaasu.is_terminal());
        assert!(CheerKind::Naal.is_terminal());
        assert!(!CheerKind::Themaa.is_terminal());
        assert!(CheerKind::Pirappu.has_ending_marker());
        assert!(!CheerKind::Malar.has_ending_marker());
    }

    #[test]
    fn test_cheer_text_and_label() {
        let cheer = Cheer::new(
            CheerKind::Pirappu,
            vec![
                Asai::new(AsaiForm::KurilInai, "உல"),
                Asai::new(AsaiForm::VallinaUgaram, "கு"),
            ],
        );
        assert_eq!(cheer.text(), "உலகு");
        assert_eq!(cheer.display_label(), "பிறப்பு உலகு");
        assert_eq!(cheer.asai_kinds(), vec![Nirai, Ner]);
    }
}
