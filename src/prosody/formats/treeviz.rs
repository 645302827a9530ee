//! Treeviz formatter for classified verse

use crate::prosody::ast::{Adi, AstNode, Cheer, Paa};

fn append_line(result: &mut String, node: &dyn AstNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        node.display_label()
    ));
}

fn child_prefix(prefix: &str, is_last: bool) -> String {
    format!("{}{}", prefix, if is_last { "  " } else { "│ " })
}

pub fn to_treeviz_str(paa: &Paa) -> String {
    let mut result = String::new();
    for (i, adi) in paa.lines.iter().enumerate() {
        let is_last = i == paa.lines.len() - 1;
        append_adi(&mut result, adi, "", is_last);
    }
    result
}

fn append_adi(result: &mut String, adi: &Adi, prefix: &str, is_last: bool) {
    append_line(result, adi, prefix, is_last);
    let new_prefix = child_prefix(prefix, is_last);
    for (i, cheer) in adi.feet.iter().enumerate() {
        append_cheer(result, cheer, &new_prefix, i == adi.feet.len() - 1);
    }
}

fn append_cheer(result: &mut String, cheer: &Cheer, prefix: &str, is_last: bool) {
    append_line(result, cheer, prefix, is_last);
    let new_prefix = child_prefix(prefix, is_last);
    for (i, asai) in cheer.syllables.iter().enumerate() {
        append_line(result, asai, &new_prefix, i == cheer.syllables.len() - 1);
    }
}
