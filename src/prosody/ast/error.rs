//! Error types for classification

/// Failure to classify a verse.
///
/// There is no partial result: either the whole input has a metrical parse or the
/// classifier reports where the grammar got furthest before giving up. Line and column
/// are 1-based and count characters of the original text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("unparsable verse: no metrical parse at line {line}, column {column}")]
    Unparsable { line: usize, column: usize },
}

impl ClassifyError {
    pub fn line(&self) -> usize {
        match self {
            ClassifyError::Unparsable { line, .. } => *line,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            ClassifyError::Unparsable { column, .. } => *column,
        }
    }
}
