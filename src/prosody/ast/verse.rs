//! Adi (line) and Paa (poem) nodes

use serde::Serialize;

use super::asai::Asai;
use super::cheer::Cheer;
use super::traits::{AstNode, TextNode};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// A verse line: feet in order, separators and punctuation elided
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adi {
    pub feet: Vec<Cheer>,
}

impl Adi {
    pub fn new(feet: Vec<Cheer>) -> Self {
        Self { feet }
    }

    /// Every asai of the line in order
    pub fn syllables(&self) -> impl Iterator<Item = &Asai> {
        self.feet.iter().flat_map(|cheer| cheer.syllables.iter())
    }
}

impl AstNode for Adi {
    fn node_type(&self) -> &'static str {
        "அடி"
    }

    fn display_label(&self) -> String {
        truncate(&self.text(), 30)
    }
}

impl TextNode for Adi {
    /// Feet joined by single spaces
    fn text(&self) -> String {
        self.feet
            .iter()
            .map(|cheer| cheer.text())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A classified poem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paa {
    pub lines: Vec<Adi>,
}

impl Paa {
    pub fn new(lines: Vec<Adi>) -> Self {
        Self { lines }
    }

    pub fn foot_count(&self) -> usize {
        self.lines.iter().map(|adi| adi.feet.len()).sum()
    }
}

impl AstNode for Paa {
    fn node_type(&self) -> &'static str {
        "பா"
    }

    fn display_label(&self) -> String {
        format!("{} lines", self.lines.len())
    }
}

impl TextNode for Paa {
    fn text(&self) -> String {
        self.lines
            .iter()
            .map(|adi| adi.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
