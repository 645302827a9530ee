//! Asai (metrical syllable) nodes

use serde::Serialize;

use super::traits::{AstNode, TextNode};

/// The two metrical syllable kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AsaiKind {
    /// நேர்: a long syllable, or a short one standing alone before a separator
    #[serde(rename = "நேரசை")]
    Ner,
    /// நிரை: a short syllable followed by another syllable
    #[serde(rename = "நிரையசை")]
    Nirai,
}

impl AsaiKind {
    pub fn type_name(self) -> &'static str {
        match self {
            AsaiKind::Ner => "நேரசை",
            AsaiKind::Nirai => "நிரையசை",
        }
    }
}

/// The traditional shape an asai was matched as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AsaiForm {
    #[serde(rename = "நெடிலொற்று")]
    NedilOtru,
    #[serde(rename = "குறிலொற்று")]
    KurilOtru,
    #[serde(rename = "தனிநெடில்")]
    ThaniNedil,
    #[serde(rename = "தனிக்குறில்")]
    ThaniKuril,
    #[serde(rename = "குறில்நெடிலொற்று")]
    KurilNedilOtru,
    #[serde(rename = "குறிலிணையொற்று")]
    KurilInaiOtru,
    #[serde(rename = "குறில்நெடில்")]
    KurilNedil,
    #[serde(rename = "குறிலிணை")]
    KurilInai,
    /// The terminal ending marker: voiceless stop + short "u"
    #[serde(rename = "வல்லின உகரம்")]
    VallinaUgaram,
}

impl AsaiForm {
    pub fn kind(self) -> AsaiKind {
        match self {
            AsaiForm::NedilOtru
            | AsaiForm::KurilOtru
            | AsaiForm::ThaniNedil
            | AsaiForm::ThaniKuril
            | AsaiForm::VallinaUgaram => AsaiKind::Ner,
            AsaiForm::KurilNedilOtru
            | AsaiForm::KurilInaiOtru
            | AsaiForm::KurilNedil
            | AsaiForm::KurilInai => AsaiKind::Nirai,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AsaiForm::NedilOtru => "நெடிலொற்று",
            AsaiForm::KurilOtru => "குறிலொற்று",
            AsaiForm::ThaniNedil => "தனிநெடில்",
            AsaiForm::ThaniKuril => "தனிக்குறில்",
            AsaiForm::KurilNedilOtru => "குறில்நெடிலொற்று",
            AsaiForm::KurilInaiOtru => "குறிலிணையொற்று",
            AsaiForm::KurilNedil => "குறில்நெடில்",
            AsaiForm::KurilInai => "குறிலிணை",
            AsaiForm::VallinaUgaram => "வல்லின உகரம்",
        }
    }
}

/// A metrical syllable with its matched text in original orthography
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asai {
    pub kind: AsaiKind,
    pub form: AsaiForm,
    pub text: String,
}

impl Asai {
    pub fn new(form: AsaiForm, text: impl Into<String>) -> Self {
        Self {
            kind: form.kind(),
            form,
            text: text.into(),
        }
    }

    pub fn is_ending_marker(&self) -> bool {
        self.form == AsaiForm::VallinaUgaram
    }

    /// Rendered type: the kind name, or வல்லின உகரம் for the ending marker
    pub fn type_name(&self) -> &'static str {
        if self.is_ending_marker() {
            self.form.name()
        } else {
            self.kind.type_name()
        }
    }
}

impl AstNode for Asai {
    fn node_type(&self) -> &'static str {
        "அசை"
    }

    fn display_label(&self) -> String {
        format!("{} {}", self.type_name(), self.text)
    }
}

impl TextNode for Asai {
    fn text(&self) -> String {
        self.text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_form() {
        assert_eq!(Asai::new(AsaiForm::KurilInai, "அக").kind, AsaiKind::Nirai);
        assert_eq!(Asai::new(AsaiForm::ThaniKuril, "ர").kind, AsaiKind::Ner);
        assert_eq!(Asai::new(AsaiForm::VallinaUgaram, "கு").kind, AsaiKind::Ner);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Asai::new(AsaiForm::NedilOtru, "லாம்").type_name(), "நேரசை");
        assert_eq!(Asai::new(AsaiForm::KurilInaiOtru, "கவர்").type_name(), "நிரையசை");
        assert_eq!(Asai::new(AsaiForm::VallinaUgaram, "கு").type_name(), "வல்லின உகரம்");
    }

    #[test]
    fn test_serialize_uses_tamil_names() {
        let json = serde_json::to_string(&Asai::new(AsaiForm::KurilInai, "அக")).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"நிரையசை","form":"குறிலிணை","text":"அக"}"#
        );
    }
}
