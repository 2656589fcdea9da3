//! Identifiers linking tokens to AST nodes.

use std::fmt;

/// Identifies one AST node within a single translation unit.
///
/// Ids are handed out by the parser in creation order. They are only
/// meaningful within the translation unit that produced them; a token's
/// back-reference stores the id of the node that ultimately claimed it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
