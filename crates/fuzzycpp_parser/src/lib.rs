//! fuzzycpp_parser: a fuzzy recursive-descent parser for C++-like token
//! streams.
//!
//! This is a best-effort recognizer, not a compiler front end: it never
//! rejects input. Constructs it cannot recognize are boxed into
//! `UnparsableBlock` nodes and parsing resynchronizes at the next statement
//! boundary, so the surrounding code keeps getting analyzed. The output is a
//! partial AST whose nodes claim their tokens through back-references; a
//! semantic highlighter reads those back-references to color each token.
//!
//! ```
//! use bumpalo::Bump;
//! use fuzzycpp_parser::Parser;
//! use fuzzycpp_token::fixture::annotate;
//!
//! let arena = Bump::new();
//! let tokens = annotate("std::vector<int> v;");
//! let tu = Parser::new(&arena, &tokens).parse_translation_unit();
//! assert_eq!(tu.statements.len(), 1);
//! ```

mod cursor;
mod parser;
mod precedence;

pub use cursor::{Checkpoint, TokenCursor};
pub use parser::Parser;
pub use precedence::{binary_operator_precedence, Precedence};
