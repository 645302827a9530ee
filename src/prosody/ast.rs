//! Result tree for a classified verse
//!
//! A [`Paa`] (poem) holds [`Adi`] lines, an adi holds [`Cheer`] feet and a cheer holds
//! [`Asai`] syllables. Trees are built once by the parser and never mutated; every asai
//! keeps its text in original orthography.
//!
//! ## Modules
//!
//! - `asai` - syllable kinds, forms and the [`Asai`] node
//! - `cheer` - the foot name table and the [`Cheer`] node
//! - `verse` - [`Adi`] and [`Paa`]
//! - `traits` - uniform node access used by the formatters
//! - `error` - the classification error

pub mod asai;
pub mod cheer;
pub mod error;
pub mod traits;
pub mod verse;

pub use asai::{Asai, AsaiForm, AsaiKind};
pub use cheer::{Cheer, CheerKind};
pub use error::ClassifyError;
pub use traits::{AstNode, TextNode};
pub use verse::{Adi, Paa};
