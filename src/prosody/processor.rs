//! File processing API for verse text
//!
//! Runs a verse through a processing stage (letters, paa) and renders the result in
//! one of the stage's formats (simple, json, yaml, tag, treeviz). A processing spec
//! is written `<stage>-<format>`, e.g. `paa-tag` or `letters-json`.
//!
//! # Sample Sources
//!
//! The `verse_sources` module gives access to the verified sample verses under
//! `docs/samples/`. Tests read their input from there instead of inlining verse text.
//!
//! ```rust,ignore
//! use yaappu::prosody::processor::verse_sources::VerseSources;
//!
//! let verse = VerseSources::get_string("agara.txt")?;
//! let rendered = VerseSources::get_processed("agara.txt", "paa-treeviz")?;
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use crate::prosody::ast::{ClassifyError, Paa};
use crate::prosody::formats::{serialize_paa_tag, to_treeviz_str};
use crate::prosody::lexer::{lex_with_spans, Letter};
use crate::prosody::parser::parse_verse;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Letters,
    Paa,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Tag,
    Treeviz,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "paa-tag" or "letters-simple"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "letters" => ProcessingStage::Letters,
            "paa" => ProcessingStage::Paa,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "tag" => OutputFormat::Tag,
            "treeviz" => OutputFormat::Treeviz,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        // Validate stage/format compatibility
        match (stage, format) {
            (ProcessingStage::Letters, OutputFormat::Simple | OutputFormat::Json) => {}
            (ProcessingStage::Paa, OutputFormat::Simple) => {
                return Err(ProcessingError::InvalidFormatType(
                    "Format 'simple' only works with letters stage".to_string(),
                ))
            }
            (ProcessingStage::Paa, _) => {}
            (ProcessingStage::Letters, _) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{:?}' not supported for letters stage (only 'simple' and 'json' are supported)",
                    format
                )))
            }
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        let letters = [OutputFormat::Simple, OutputFormat::Json]
            .into_iter()
            .map(|format| ProcessingSpec {
                stage: ProcessingStage::Letters,
                format,
            });
        let paa = [
            OutputFormat::Tag,
            OutputFormat::Treeviz,
            OutputFormat::Json,
            OutputFormat::Yaml,
        ]
        .into_iter()
        .map(|format| ProcessingSpec {
            stage: ProcessingStage::Paa,
            format,
        });
        letters.chain(paa).collect()
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self.stage {
            ProcessingStage::Letters => "letters",
            ProcessingStage::Paa => "paa",
        };
        let format = match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Tag => "tag",
            OutputFormat::Treeviz => "treeviz",
        };
        write!(f, "{}-{}", stage, format)
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProcessingError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error(transparent)]
    Unparsable(#[from] ClassifyError),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Process verse text according to the given specification
pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    tracing::debug!(spec = %spec, "processing verse");
    match spec.stage {
        ProcessingStage::Letters => format_letters(&lex_with_spans(source), spec.format),
        ProcessingStage::Paa => format_paa(&parse_verse(source)?, spec.format),
    }
}

/// Process a verse file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(ProcessingError::FileNotFound(
            file_path.display().to_string(),
        ));
    }

    let content = fs::read_to_string(file_path)
        .map_err(|e| ProcessingError::Io(format!("Failed to read {}: {}", file_path.display(), e)))?;
    process_source(&content, spec)
}

type LocatedLetter = (Letter, std::ops::Range<usize>);

/// Format letter tokens according to the specified format
fn format_letters(
    letters: &[LocatedLetter],
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(letters
            .iter()
            .map(|(letter, span)| format!("{} {}..{}\n", letter, span.start, span.end))
            .collect()),
        OutputFormat::Json => serde_json::to_string_pretty(letters)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        _ => Err(ProcessingError::InvalidFormatType(format!(
            "Format '{:?}' only works with paa stage",
            format
        ))),
    }
}

/// Format a classified poem according to the specified format
fn format_paa(paa: &Paa, format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Tag => Ok(serialize_paa_tag(paa)),
        OutputFormat::Treeviz => Ok(to_treeviz_str(paa)),
        OutputFormat::Json => serde_json::to_string_pretty(paa)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(paa).map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
        OutputFormat::Simple => Err(ProcessingError::InvalidFormatType(
            "Format 'simple' only works with letters stage".to_string(),
        )),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::to_string)
        .collect()
}

/// Sample sources module for accessing verified verse files
pub mod verse_sources {
    use super::*;

    /// Available sample files (canonical sources)
    pub const AVAILABLE_SAMPLES: &[&str] = &["agara.txt", "thodudaiya.txt"];

    /// Format options for sample content
    #[derive(Debug, Clone, PartialEq)]
    pub enum SampleFormat {
        /// Raw string content
        String,
        /// Processed content using the specified format string
        Processed(String),
    }

    /// Main interface for accessing verse sample files
    pub struct VerseSources;

    impl VerseSources {
        fn sample_path(filename: &str) -> String {
            format!("{}/docs/samples/{}", env!("CARGO_MANIFEST_DIR"), filename)
        }

        fn validate_sample(filename: &str) -> Result<(), ProcessingError> {
            if !AVAILABLE_SAMPLES.contains(&filename) {
                return Err(ProcessingError::FileNotFound(format!(
                    "Sample '{}' is not available. Available samples: {:?}",
                    filename, AVAILABLE_SAMPLES
                )));
            }
            Ok(())
        }

        /// Get sample content in the specified format
        pub fn get_sample(filename: &str, format: SampleFormat) -> Result<String, ProcessingError> {
            Self::validate_sample(filename)?;

            let path = Self::sample_path(filename);
            match format {
                SampleFormat::String => fs::read_to_string(&path)
                    .map_err(|e| ProcessingError::Io(format!("Failed to read {}: {}", path, e))),
                SampleFormat::Processed(format_str) => {
                    let spec = ProcessingSpec::from_string(&format_str)?;
                    process_file(&path, &spec)
                }
            }
        }

        /// Get sample content as raw string
        pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
            Self::get_sample(filename, SampleFormat::String)
        }

        /// Get sample content processed with the specified format
        pub fn get_processed(filename: &str, format: &str) -> Result<String, ProcessingError> {
            Self::get_sample(filename, SampleFormat::Processed(format.to_string()))
        }

        /// List all available sample files
        pub fn list_samples() -> Vec<&'static str> {
            AVAILABLE_SAMPLES.to_vec()
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_spec_parsing() {
        let spec = ProcessingSpec::from_string("letters-simple").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Letters);
        assert_eq!(spec.format, OutputFormat::Simple);

        let spec = ProcessingSpec::from_string("paa-yaml").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Paa);
        assert_eq!(spec.format, OutputFormat::Yaml);
    }

    #[test]
    fn test_processing_spec_errors() {
        assert!(matches!(
            ProcessingSpec::from_string("invalid"),
            Err(ProcessingError::InvalidFormat(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("verse-tag"),
            Err(ProcessingError::InvalidStage(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("paa-xml"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("letters-tag"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("paa-simple"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
    }

    #[test]
    fn test_letter_formatting() {
        let spec = ProcessingSpec::from_string("letters-simple").unwrap();
        let simple = process_source("கல்", &spec).unwrap();
        assert_eq!(
            simple,
            "Consonant 'க' 0..3\nShortSign '்' 3..6\nConsonant 'ல' 6..9\n"
        );

        let spec = ProcessingSpec::from_string("letters-json").unwrap();
        let json = process_source("அ", &spec).unwrap();
        assert!(json.contains("\"ShortVowel\""));
        assert!(json.contains("\"start\""));
    }

    #[test]
    fn test_unparsable_verse() {
        let spec = ProcessingSpec::from_string("paa-tag").unwrap();
        let error = process_source("abc", &spec).unwrap_err();
        assert!(matches!(error, ProcessingError::Unparsable(_)));
        assert!(error.to_string().starts_with("unparsable verse"));
    }

    #[test]
    fn test_missing_file() {
        let spec = ProcessingSpec::from_string("paa-tag").unwrap();
        assert!(matches!(
            process_file("does/not/exist.txt", &spec),
            Err(ProcessingError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert_eq!(
            formats,
            vec![
                "letters-simple",
                "letters-json",
                "paa-tag",
                "paa-treeviz",
                "paa-json",
                "paa-yaml",
            ]
        );
        for format in &formats {
            assert!(ProcessingSpec::from_string(format).is_ok(), "{}", format);
        }
    }
}
