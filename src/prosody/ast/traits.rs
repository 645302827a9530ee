//! AST traits - Common interfaces for uniform node access

/// Common interface for all tree nodes
pub trait AstNode {
    /// Element name used by the renderings (பா, அடி, சீர், அசை)
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}

/// Nodes that cover a stretch of verse text
pub trait TextNode: AstNode {
    /// Matched text in original orthography, without separators or punctuation
    fn text(&self) -> String;
}
