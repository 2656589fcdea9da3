//! A minimal tokenizer for tests and benchmarks.
//!
//! The real lexer is an external collaborator; this module exists so tests
//! and benches can write token streams in source form instead of spelling
//! out `AnnotatedToken` buffers by hand. It handles exactly the closed set
//! in [`TokenKind`]: keywords, identifiers, numeric/char/string literals,
//! punctuators with longest-match, `//` and `/* */` comments. Anything else
//! becomes an `Unknown` token. It does not handle trigraphs, raw strings,
//! digraphs, universal character names, or `>>` splitting.

use fuzzycpp_core::TextRange;

use crate::kind::TokenKind;
use crate::token::AnnotatedToken;

/// Punctuators ordered longest-first so that prefixes never shadow longer
/// spellings (`<<=` before `<<` before `<`).
const PUNCTUATORS: &[(&str, TokenKind)] = &[
    ("<<=", TokenKind::LessLessEqual),
    (">>=", TokenKind::GreaterGreaterEqual),
    ("->*", TokenKind::ArrowStar),
    ("::", TokenKind::ColonColon),
    ("->", TokenKind::Arrow),
    ("++", TokenKind::PlusPlus),
    ("--", TokenKind::MinusMinus),
    ("<<", TokenKind::LessLess),
    (">>", TokenKind::GreaterGreater),
    ("<=", TokenKind::LessEqual),
    (">=", TokenKind::GreaterEqual),
    ("==", TokenKind::EqualEqual),
    ("!=", TokenKind::ExclaimEqual),
    ("&&", TokenKind::AmpAmp),
    ("||", TokenKind::PipePipe),
    ("+=", TokenKind::PlusEqual),
    ("-=", TokenKind::MinusEqual),
    ("*=", TokenKind::StarEqual),
    ("/=", TokenKind::SlashEqual),
    ("%=", TokenKind::PercentEqual),
    ("&=", TokenKind::AmpEqual),
    ("|=", TokenKind::PipeEqual),
    ("^=", TokenKind::CaretEqual),
    (".*", TokenKind::PeriodStar),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("{", TokenKind::LBrace),
    ("}", TokenKind::RBrace),
    ("[", TokenKind::LSquare),
    ("]", TokenKind::RSquare),
    (",", TokenKind::Comma),
    (";", TokenKind::Semi),
    (":", TokenKind::Colon),
    (".", TokenKind::Period),
    ("?", TokenKind::Question),
    ("~", TokenKind::Tilde),
    ("!", TokenKind::Exclaim),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("%", TokenKind::Percent),
    ("&", TokenKind::Amp),
    ("|", TokenKind::Pipe),
    ("^", TokenKind::Caret),
    ("<", TokenKind::Less),
    (">", TokenKind::Greater),
    ("=", TokenKind::Equal),
];

/// Tokenize `source` into an annotated token buffer, with keywords resolved
/// and a trailing `Eof` token.
pub fn annotate(source: &str) -> Vec<AnnotatedToken> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0usize;

    while pos < bytes.len() {
        let start = pos;
        let b = bytes[pos];

        if b.is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        // Line comment
        if b == b'/' && bytes.get(pos + 1) == Some(&b'/') {
            while pos < bytes.len() && bytes[pos] != b'\n' {
                pos += 1;
            }
            tokens.push(make(TokenKind::Comment, source, start, pos));
            continue;
        }

        // Block comment; an unterminated one swallows the rest of the input
        if b == b'/' && bytes.get(pos + 1) == Some(&b'*') {
            pos += 2;
            while pos < bytes.len() && !(bytes[pos] == b'*' && bytes.get(pos + 1) == Some(&b'/')) {
                pos += 1;
            }
            pos = (pos + 2).min(bytes.len());
            tokens.push(make(TokenKind::Comment, source, start, pos));
            continue;
        }

        // Identifier or keyword
        if b.is_ascii_alphabetic() || b == b'_' {
            while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_') {
                pos += 1;
            }
            let text = &source[start..pos];
            let kind = TokenKind::from_keyword(text).unwrap_or(TokenKind::Identifier);
            tokens.push(make(kind, source, start, pos));
            continue;
        }

        // Numeric literal, including a literal suffix (1u, 2.5f)
        if b.is_ascii_digit() {
            let mut floating = false;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            if bytes.get(pos) == Some(&b'.')
                && bytes.get(pos + 1).is_some_and(|c| c.is_ascii_digit())
            {
                floating = true;
                pos += 1;
                while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                    pos += 1;
                }
            }
            while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
                pos += 1;
            }
            let kind = if floating {
                TokenKind::FloatingLiteral
            } else {
                TokenKind::IntegerLiteral
            };
            tokens.push(make(kind, source, start, pos));
            continue;
        }

        // Character and string literals with backslash escapes
        if b == b'\'' || b == b'"' {
            let quote = b;
            pos += 1;
            while pos < bytes.len() && bytes[pos] != quote {
                if bytes[pos] == b'\\' && pos + 1 < bytes.len() {
                    pos += 1;
                }
                pos += 1;
            }
            pos = (pos + 1).min(bytes.len());
            let kind = if quote == b'\'' {
                TokenKind::CharLiteral
            } else {
                TokenKind::StringLiteral
            };
            tokens.push(make(kind, source, start, pos));
            continue;
        }

        // Punctuators, longest match first
        if let Some(&(text, kind)) = PUNCTUATORS
            .iter()
            .find(|(text, _)| source[pos..].starts_with(text))
        {
            pos += text.len();
            tokens.push(make(kind, source, start, pos));
            continue;
        }

        // Anything else: one Unknown token per character
        let ch_len = source[pos..].chars().next().map_or(1, char::len_utf8);
        pos += ch_len;
        tokens.push(make(TokenKind::Unknown, source, start, pos));
    }

    let end = source.len() as u32;
    tokens.push(AnnotatedToken::new(TokenKind::Eof, TextRange::new(end, end)));
    tokens
}

fn make(kind: TokenKind, source: &str, start: usize, end: usize) -> AnnotatedToken {
    AnnotatedToken::new(kind, TextRange::new(start as u32, end as u32))
        .with_text(&source[start..end])
}
