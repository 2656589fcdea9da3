//! fuzzycpp_ast: AST node model for the fuzzycpp highlighting parser.
//!
//! The tree produced by the parser is deliberately partial: anything the
//! parser could not recognize is boxed into an `UnparsableBlock` so the
//! surrounding constructs stay analyzable. Nodes own their children; the
//! tokens a node committed to are borrowed views into the caller's token
//! buffer, and each of those tokens carries a back-reference to the node
//! that claims it. The highlighter reads those back-references.

pub mod node;
pub mod visitor;

// Re-export commonly used types
pub use node::*;
pub use visitor::{claim_ast_references, AstVisitor};
