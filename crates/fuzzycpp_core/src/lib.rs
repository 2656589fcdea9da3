//! fuzzycpp_core: Core primitives for the fuzzycpp highlighting parser.
//!
//! Provides the text range type used to track where tokens originate in
//! the source, and the node identifiers that link tokens back to the AST
//! nodes that claim them.

pub mod ids;
pub mod text;

// Re-export commonly used types
pub use ids::NodeId;
pub use text::{TextPos, TextRange};
