//! XML-like tag serialization
//!
//! Serializes a [`Paa`] to nested tags that mirror the tree. Node types become tag
//! names, classifications go in the `வகை` attribute and asai text in `பொருள்`.
//!
//! ## Example
//!
//! ```text
//! <பா>
//!   <அடி>
//!     <சீர் வகை="பிறப்பு">
//!       <அசை வகை="நிரையசை" பொருள்="உல"/>
//!       <அசை வகை="வல்லின உகரம்" பொருள்="கு"/>
//!     </சீர்>
//!   </அடி>
//! </பா>
//! ```

use crate::prosody::ast::{Adi, Asai, AstNode, Cheer, Paa};

/// Serialize a poem to tag format
pub fn serialize_paa_tag(paa: &Paa) -> String {
    let mut result = String::new();
    result.push_str(&format!("<{}>\n", paa.node_type()));
    for adi in &paa.lines {
        serialize_adi(adi, 1, &mut result);
    }
    result.push_str(&format!("</{}>", paa.node_type()));
    result
}

fn serialize_adi(adi: &Adi, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);
    output.push_str(&format!("{}<{}>\n", indent, adi.node_type()));
    for cheer in &adi.feet {
        serialize_cheer(cheer, indent_level + 1, output);
    }
    output.push_str(&format!("{}</{}>\n", indent, adi.node_type()));
}

fn serialize_cheer(cheer: &Cheer, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);
    output.push_str(&format!(
        "{}<{} வகை=\"{}\">\n",
        indent,
        cheer.node_type(),
        escape_xml(cheer.type_name())
    ));
    for asai in &cheer.syllables {
        serialize_asai(asai, indent_level + 1, output);
    }
    output.push_str(&format!("{}</{}>\n", indent, cheer.node_type()));
}

fn serialize_asai(asai: &Asai, indent_level: usize, output: &mut String) {
    // <அசை வகை="kind" பொருள்="text"/>
    output.push_str(&format!(
        "{}<{} வகை=\"{}\" பொருள்=\"{}\"/>\n",
        "  ".repeat(indent_level),
        asai.node_type(),
        escape_xml(asai.type_name()),
        escape_xml(&asai.text)
    ));
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prosody::ast::{AsaiForm, CheerKind};

    fn ulagu() -> Paa {
        Paa::new(vec![Adi::new(vec![Cheer::new(
            CheerKind::Pirappu,
            vec![
                Asai::new(AsaiForm::KurilInai, "உல"),
                Asai::new(AsaiForm::VallinaUgaram, "கு"),
            ],
        )])])
    }

    #[test]
    fn test_serialize_single_foot() {
        let expected = "<பா>\n  <அடி>\n    <சீர் வகை=\"பிறப்பு\">\n      <அசை வகை=\"நிரையசை\" பொருள்=\"உல\"/>\n      <அசை வகை=\"வல்லின உகரம்\" பொருள்=\"கு\"/>\n    </சீர்>\n  </அடி>\n</பா>";
        assert_eq!(serialize_paa_tag(&ulagu()), expected);
    }

    #[test]
    fn test_serialize_empty_line() {
        let result = serialize_paa_tag(&Paa::new(vec![Adi::new(vec![])]));
        assert_eq!(result, "<பா>\n  <அடி>\n  </அடி>\n</பா>");
    }

    #[test]
    fn test_xml_escaping() {
        assert_eq!(escape_xml("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
        assert_eq!(escape_xml("அகர"), "அகர");
    }
}
