//! fuzzycpp_token: Annotated token model for the fuzzycpp highlighting parser.
//!
//! Defines the closed set of token kinds the parser dispatches on, and the
//! annotated token itself: a lexed token carrying a mutable back-reference
//! slot that the parser fills with the AST node claiming the token.
//!
//! The production lexer is an external collaborator; the [`fixture`] module
//! holds a deliberately small tokenizer so tests and benches can write token
//! streams in source form.

pub mod fixture;
pub mod kind;
pub mod token;

// Re-export commonly used types
pub use kind::TokenKind;
pub use token::AnnotatedToken;
