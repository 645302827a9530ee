//! Fluent assertion API for verse trees

use crate::prosody::ast::{Adi, Asai, AsaiForm, AsaiKind, Cheer, CheerKind, Paa, TextNode};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a poem
pub fn assert_paa(paa: &Paa) -> PaaAssertion<'_> {
    PaaAssertion { paa }
}

fn summarize_feet(feet: &[Cheer]) -> String {
    feet.iter()
        .map(|cheer| cheer.type_name())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Paa Assertions
// ============================================================================

pub struct PaaAssertion<'a> {
    paa: &'a Paa,
}

impl<'a> PaaAssertion<'a> {
    /// Assert the number of lines
    pub fn line_count(self, expected: usize) -> Self {
        let actual = self.paa.lines.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} lines, found {} lines: [{}]",
            expected,
            actual,
            self.paa
                .lines
                .iter()
                .map(|adi| adi.text())
                .collect::<Vec<_>>()
                .join(" / ")
        );
        self
    }

    /// Assert the number of feet across all lines
    pub fn foot_count(self, expected: usize) -> Self {
        assert_eq!(
            self.paa.foot_count(),
            expected,
            "Expected {} feet in the poem",
            expected
        );
        self
    }

    /// Assert on a specific line by index
    pub fn line<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(AdiAssertion<'a>),
    {
        assert!(
            index < self.paa.lines.len(),
            "Line index {} out of bounds (poem has {} lines)",
            index,
            self.paa.lines.len()
        );

        assertion(AdiAssertion {
            adi: &self.paa.lines[index],
            context: format!("lines[{}]", index),
        });
        self
    }
}

// ============================================================================
// Adi Assertions
// ============================================================================

pub struct AdiAssertion<'a> {
    adi: &'a Adi,
    context: String,
}

impl<'a> AdiAssertion<'a> {
    /// Assert the line text, feet joined by single spaces
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.adi.text(),
            expected,
            "{}: Line text mismatch",
            self.context
        );
        self
    }

    pub fn cheer_count(self, expected: usize) -> Self {
        let actual = self.adi.feet.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} feet, found {} feet: [{}]",
            self.context,
            expected,
            actual,
            summarize_feet(&self.adi.feet)
        );
        self
    }

    /// Assert the foot names of the whole line in order
    pub fn kinds(self, expected: &[CheerKind]) -> Self {
        let actual: Vec<CheerKind> = self.adi.feet.iter().map(|cheer| cheer.kind).collect();
        assert_eq!(
            actual,
            expected,
            "{}: Expected feet [{}], found [{}]",
            self.context,
            expected
                .iter()
                .map(|kind| kind.name())
                .collect::<Vec<_>>()
                .join(", "),
            summarize_feet(&self.adi.feet)
        );
        self
    }

    /// Assert on a specific foot by index
    pub fn cheer<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(CheerAssertion<'a>),
    {
        assert!(
            index < self.adi.feet.len(),
            "{}: Foot index {} out of bounds (line has {} feet)",
            self.context,
            index,
            self.adi.feet.len()
        );

        assertion(CheerAssertion {
            cheer: &self.adi.feet[index],
            context: format!("{}:feet[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Cheer Assertions
// ============================================================================

pub struct CheerAssertion<'a> {
    cheer: &'a Cheer,
    context: String,
}

impl<'a> CheerAssertion<'a> {
    pub fn kind(self, expected: CheerKind) -> Self {
        assert_eq!(
            self.cheer.kind,
            expected,
            "{}: Expected foot {}, found {} ({})",
            self.context,
            expected.name(),
            self.cheer.type_name(),
            self.cheer.text()
        );
        self
    }

    /// Assert the traditional name
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.cheer.type_name(),
            expected,
            "{}: Foot name mismatch",
            self.context
        );
        self
    }

    /// Assert the concatenated syllable text
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.cheer.text(),
            expected,
            "{}: Foot text mismatch",
            self.context
        );
        self
    }

    /// Assert the syllable split
    pub fn asai_texts(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .cheer
            .syllables
            .iter()
            .map(|asai| asai.text.as_str())
            .collect();
        assert_eq!(
            actual, expected,
            "{}: Syllable split mismatch",
            self.context
        );
        self
    }

    /// Assert the asai kinds in order, the ending marker included
    pub fn asai_kinds(self, expected: &[AsaiKind]) -> Self {
        assert_eq!(
            self.cheer.asai_kinds(),
            expected,
            "{}: Asai kinds mismatch",
            self.context
        );
        self
    }

    pub fn asai_count(self, expected: usize) -> Self {
        assert_eq!(
            self.cheer.syllables.len(),
            expected,
            "{}: Expected {} syllables, found {:?}",
            self.context,
            expected,
            self.cheer
                .syllables
                .iter()
                .map(|asai| asai.text.as_str())
                .collect::<Vec<_>>()
        );
        self
    }

    /// Assert on a specific syllable by index
    pub fn asai<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(AsaiAssertion<'a>),
    {
        assert!(
            index < self.cheer.syllables.len(),
            "{}: Syllable index {} out of bounds (foot has {} syllables)",
            self.context,
            index,
            self.cheer.syllables.len()
        );

        assertion(AsaiAssertion {
            asai: &self.cheer.syllables[index],
            context: format!("{}:syllables[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Asai Assertions
// ============================================================================

pub struct AsaiAssertion<'a> {
    asai: &'a Asai,
    context: String,
}

impl<'a> AsaiAssertion<'a> {
    pub fn kind(self, expected: AsaiKind) -> Self {
        assert_eq!(
            self.asai.kind, expected,
            "{}: Asai kind mismatch for '{}'",
            self.context, self.asai.text
        );
        self
    }

    pub fn form(self, expected: AsaiForm) -> Self {
        assert_eq!(
            self.asai.form,
            expected,
            "{}: Expected form {}, found {} for '{}'",
            self.context,
            expected.name(),
            self.asai.form.name(),
            self.asai.text
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.asai.text, expected,
            "{}: Asai text mismatch",
            self.context
        );
        self
    }

    /// Assert this is the வல்லின உகரம் ending marker
    pub fn ending_marker(self) -> Self {
        assert!(
            self.asai.is_ending_marker(),
            "{}: Expected ending marker, found {} '{}'",
            self.context,
            self.asai.type_name(),
            self.asai.text
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Paa {
        Paa::new(vec![Adi::new(vec![
            Cheer::new(
                CheerKind::Pulimaa,
                vec![
                    Asai::new(AsaiForm::KurilInai, "அக"),
                    Asai::new(AsaiForm::ThaniKuril, "ர"),
                ],
            ),
            Cheer::new(
                CheerKind::Kaasu,
                vec![
                    Asai::new(AsaiForm::ThaniNedil, "கா"),
                    Asai::new(AsaiForm::VallinaUgaram, "சு"),
                ],
            ),
        ])])
    }

    #[test]
    fn test_fluent_assertions_pass() {
        assert_paa(&sample())
            .line_count(1)
            .foot_count(2)
            .line(0, |adi| {
                adi.text("அகர காசு")
                    .kinds(&[CheerKind::Pulimaa, CheerKind::Kaasu])
                    .cheer(1, |cheer| {
                        cheer
                            .name("காசு")
                            .text("காசு")
                            .asai_count(2)
                            .asai_kinds(&[AsaiKind::Ner, AsaiKind::Ner])
                            .asai(1, |asai| {
                                asai.text("சு").ending_marker();
                            });
                    });
            });
    }

    #[test]
    #[should_panic(expected = "lines[0]:feet[0]: Expected foot தேமா, found புளிமா")]
    fn test_kind_mismatch_reports_path() {
        assert_paa(&sample()).line(0, |adi| {
            adi.cheer(0, |cheer| {
                cheer.kind(CheerKind::Themaa);
            });
        });
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_line_index_out_of_bounds() {
        assert_paa(&sample()).line(3, |_| {});
    }
}
