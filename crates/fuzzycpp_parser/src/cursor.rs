//! A filtered, rewindable forward cursor over an annotated token buffer.
//!
//! The cursor hides comments and unknown tokens from the parser and treats
//! `Eof` as the exhausted state. Checkpoints capture the cursor position so
//! speculative recognizers can rewind on failure.

use fuzzycpp_token::{AnnotatedToken, TokenKind};

/// An opaque saved cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Forward cursor over `[first, last)` of annotated tokens.
#[derive(Debug)]
pub struct TokenCursor<'a> {
    tokens: &'a [AnnotatedToken],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [AnnotatedToken]) -> Self {
        let mut cursor = Self { tokens, pos: 0 };
        cursor.skip_ignored();
        cursor
    }

    /// The current token, or `None` once the stream is exhausted or at end
    /// of input.
    pub fn peek(&self) -> Option<&'a AnnotatedToken> {
        let token = self.tokens.get(self.pos)?;
        if token.kind == TokenKind::Eof {
            return None;
        }
        // The lexer must have resolved raw identifiers upstream.
        debug_assert!(token.kind != TokenKind::RawIdentifier);
        Some(token)
    }

    /// Consume and return the current token, advancing over any trailing
    /// comment or unknown tokens.
    pub fn next(&mut self) -> Option<&'a AnnotatedToken> {
        let token = self.peek()?;
        self.pos += 1;
        self.skip_ignored();
        Some(token)
    }

    /// Whether the current token has the given kind.
    pub fn at(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    /// Whether the current token satisfies the predicate.
    pub fn at_match(&self, pred: impl Fn(TokenKind) -> bool) -> bool {
        self.peek().is_some_and(|t| pred(t.kind))
    }

    /// Capture the current position.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    /// Restore a previously captured position.
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.0;
    }

    fn skip_ignored(&mut self) {
        while self
            .tokens
            .get(self.pos)
            .is_some_and(|t| t.kind.is_ignored())
        {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzycpp_token::fixture::annotate;

    #[test]
    fn test_skips_comments_and_unknown() {
        let tokens = annotate("/* lead */ a @ b // trail");
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(cursor.next().unwrap().text, "a");
        assert_eq!(cursor.next().unwrap().text, "b");
        assert!(cursor.peek().is_none());
    }

    #[test]
    fn test_eof_is_exhausted() {
        let tokens = annotate("");
        let mut cursor = TokenCursor::new(&tokens);
        assert!(cursor.peek().is_none());
        assert!(cursor.next().is_none());
    }

    #[test]
    fn test_checkpoint_rewind() {
        let tokens = annotate("a b c");
        let mut cursor = TokenCursor::new(&tokens);
        let checkpoint = cursor.checkpoint();
        assert!(cursor.next().is_some());
        assert!(cursor.next().is_some());
        assert_eq!(cursor.peek().unwrap().text, "c");
        cursor.rewind(checkpoint);
        assert_eq!(cursor.peek().unwrap().text, "a");
    }

    #[test]
    fn test_at() {
        let tokens = annotate("int x");
        let cursor = TokenCursor::new(&tokens);
        assert!(cursor.at(TokenKind::KwInt));
        assert!(cursor.at_match(TokenKind::is_builtin_type));
        assert!(!cursor.at(TokenKind::Identifier));
    }
}
