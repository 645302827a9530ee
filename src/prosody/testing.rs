//! Testing utilities for verse tree assertions
//!
//! Two tools go together when testing the classifier:
//!
//! 1. **[VerseSources](crate::prosody::processor::verse_sources::VerseSources)** for verified
//!    verse text, so that sample verses live in one place (`docs/samples/`)
//! 2. **[assert_paa](fn@assert_paa)** for checking the whole tree shape at once
//!
//! Checking a foot by hand means indexing lines, feet and syllables and comparing each
//! field. The fluent API mirrors the tree instead:
//!
//! ```rust,ignore
//! use yaappu::prosody::testing::assert_paa;
//!
//! assert_paa(&paa)
//!     .line_count(2)
//!     .line(1, |adi| {
//!         adi.cheer_count(3).cheer(2, |cheer| {
//!             cheer
//!                 .kind(CheerKind::Pirappu)
//!                 .asai_texts(&["உல", "கு"])
//!                 .asai(1, |asai| {
//!                     asai.ending_marker();
//!                 });
//!         });
//!     });
//! ```
//!
//! Failures carry the path to the node, e.g.
//!
//! ```text
//! lines[1]:feet[2]: Expected foot பிறப்பு, found புளிமா (உலகு)
//! ```

mod testing_assertions;

pub use testing_assertions::{
    assert_paa, AdiAssertion, AsaiAssertion, CheerAssertion, PaaAssertion,
};
