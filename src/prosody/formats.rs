//! Output formats for classified verse
//!
//! - [`tag`]: XML-like tags, one element per node, in the traditional Tamil vocabulary
//! - [`treeviz`]: box-drawing tree for terminal inspection
//!
//! JSON and YAML come straight from the serde derives on the tree nodes.

pub mod tag;
pub mod treeviz;

pub use tag::serialize_paa_tag;
pub use treeviz::to_treeviz_str;
