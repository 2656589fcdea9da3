//! The annotated token: a lexed token plus its AST back-reference slot.

use std::cell::Cell;

use fuzzycpp_core::{NodeId, TextRange};

use crate::kind::TokenKind;

/// A lexed token annotated with a back-reference to the AST node that
/// claims it.
///
/// Tokens live in a buffer owned by the caller; AST nodes only ever borrow
/// them. The back-reference is the inverse link: after parsing, every token
/// the parser committed to carries the id of its owning node, which is what
/// the highlighter reads to classify the token. The slot is interior-mutable
/// because parsing is single-threaded and tokens are shared views.
#[derive(Debug, Clone)]
pub struct AnnotatedToken {
    /// The lexical classification of this token.
    pub kind: TokenKind,
    /// Where the token sits in the source text.
    pub span: TextRange,
    /// The token's spelling, where the lexer preserves one (identifiers and
    /// literals). The parser itself never reads this.
    pub text: String,
    ast_ref: Cell<Option<NodeId>>,
}

impl AnnotatedToken {
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self {
            kind,
            span,
            text: String::new(),
            ast_ref: Cell::new(None),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// The AST node currently claiming this token, if any.
    pub fn ast_ref(&self) -> Option<NodeId> {
        self.ast_ref.get()
    }

    /// Claim this token for the given node. The final writer wins.
    pub fn set_ast_ref(&self, node: NodeId) {
        self.ast_ref.set(Some(node));
    }

    /// Whether the token cursor hides this token from the parser.
    pub fn is_ignored(&self) -> bool {
        self.kind.is_ignored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_reference_slot() {
        let tok = AnnotatedToken::new(TokenKind::Identifier, TextRange::new(0, 3)).with_text("foo");
        assert_eq!(tok.ast_ref(), None);
        tok.set_ast_ref(NodeId(7));
        assert_eq!(tok.ast_ref(), Some(NodeId(7)));
        // last writer wins
        tok.set_ast_ref(NodeId(9));
        assert_eq!(tok.ast_ref(), Some(NodeId(9)));
    }
}
