//! The closed set of token kinds produced by the lexer.
//!
//! The lexer is required to resolve keywords to distinct kinds before the
//! parser runs; the parser never inspects token spellings, only kinds.

use std::fmt;

/// Every kind of token the parser can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuators
    LParen,
    RParen,
    LBrace,
    RBrace,
    LSquare,
    RSquare,
    Comma,
    Semi,
    Colon,
    ColonColon,
    Period,
    Arrow,
    PeriodStar,
    ArrowStar,
    Question,
    Tilde,
    Exclaim,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Amp,
    Pipe,
    Caret,
    PlusPlus,
    MinusMinus,
    Less,
    Greater,
    LessLess,
    GreaterGreater,
    LessEqual,
    GreaterEqual,
    EqualEqual,
    ExclaimEqual,
    AmpAmp,
    PipePipe,
    Equal,
    PlusEqual,
    MinusEqual,
    StarEqual,
    SlashEqual,
    PercentEqual,
    AmpEqual,
    PipeEqual,
    CaretEqual,
    LessLessEqual,
    GreaterGreaterEqual,

    // Literals
    IntegerLiteral,
    FloatingLiteral,
    CharLiteral,
    StringLiteral,

    // Keywords
    KwReturn,
    KwClass,
    KwStruct,
    KwUnion,
    KwEnum,
    KwConst,
    KwVolatile,
    KwRegister,
    KwStatic,
    KwVirtual,
    KwAuto,
    KwPrivate,
    KwProtected,
    KwPublic,
    KwTrue,
    KwFalse,
    KwNullptr,

    // Builtin type keywords
    KwVoid,
    KwChar,
    KwWcharT,
    KwChar16T,
    KwChar32T,
    KwInt,
    KwShort,
    KwLong,
    KwSigned,
    KwUnsigned,
    KwFloat,
    KwDouble,
    KwBool,

    /// A resolved identifier.
    Identifier,
    /// An identifier the lexer has not yet resolved. The parser must never
    /// observe this kind; resolving it is the lexer's responsibility.
    RawIdentifier,
    /// A comment; filtered out by the token cursor.
    Comment,
    /// A character the lexer could not classify; filtered out by the cursor.
    Unknown,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Whether this kind is one of the literal token kinds.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral
                | TokenKind::FloatingLiteral
                | TokenKind::CharLiteral
                | TokenKind::StringLiteral
        )
    }

    /// Whether this kind can form a `LiteralConstant` expression: a literal
    /// or one of the constant keywords.
    pub fn is_literal_or_constant(self) -> bool {
        self.is_literal()
            || matches!(
                self,
                TokenKind::KwTrue | TokenKind::KwFalse | TokenKind::KwNullptr
            )
    }

    /// Whether this kind is a builtin type keyword. Builtin type keywords
    /// chain (`unsigned long long int`).
    pub fn is_builtin_type(self) -> bool {
        matches!(
            self,
            TokenKind::KwVoid
                | TokenKind::KwChar
                | TokenKind::KwWcharT
                | TokenKind::KwChar16T
                | TokenKind::KwChar32T
                | TokenKind::KwInt
                | TokenKind::KwShort
                | TokenKind::KwLong
                | TokenKind::KwSigned
                | TokenKind::KwUnsigned
                | TokenKind::KwFloat
                | TokenKind::KwDouble
                | TokenKind::KwBool
        )
    }

    /// Whether this kind is a cv-qualifier in type position.
    pub fn is_cv_qualifier(self) -> bool {
        matches!(
            self,
            TokenKind::KwConst | TokenKind::KwVolatile | TokenKind::KwRegister
        )
    }

    /// Whether this kind is an access specifier (`private`/`protected`/`public`).
    pub fn is_access_specifier(self) -> bool {
        matches!(
            self,
            TokenKind::KwPrivate | TokenKind::KwProtected | TokenKind::KwPublic
        )
    }

    /// Whether this kind introduces a class declaration.
    pub fn is_class_key(self) -> bool {
        matches!(
            self,
            TokenKind::KwClass | TokenKind::KwStruct | TokenKind::KwUnion | TokenKind::KwEnum
        )
    }

    /// Whether this kind is a unary prefix operator.
    pub fn is_unary_prefix_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Exclaim
                | TokenKind::Tilde
                | TokenKind::Star
                | TokenKind::Amp
                | TokenKind::PlusPlus
                | TokenKind::MinusMinus
        )
    }

    /// Whether the token cursor hides this kind from the parser.
    pub fn is_ignored(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::Unknown)
    }

    /// Resolve a keyword spelling to its kind, if it is one of the keywords
    /// in the closed set.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "return" => TokenKind::KwReturn,
            "class" => TokenKind::KwClass,
            "struct" => TokenKind::KwStruct,
            "union" => TokenKind::KwUnion,
            "enum" => TokenKind::KwEnum,
            "const" => TokenKind::KwConst,
            "volatile" => TokenKind::KwVolatile,
            "register" => TokenKind::KwRegister,
            "static" => TokenKind::KwStatic,
            "virtual" => TokenKind::KwVirtual,
            "auto" => TokenKind::KwAuto,
            "private" => TokenKind::KwPrivate,
            "protected" => TokenKind::KwProtected,
            "public" => TokenKind::KwPublic,
            "true" => TokenKind::KwTrue,
            "false" => TokenKind::KwFalse,
            "nullptr" => TokenKind::KwNullptr,
            "void" => TokenKind::KwVoid,
            "char" => TokenKind::KwChar,
            "wchar_t" => TokenKind::KwWcharT,
            "char16_t" => TokenKind::KwChar16T,
            "char32_t" => TokenKind::KwChar32T,
            "int" => TokenKind::KwInt,
            "short" => TokenKind::KwShort,
            "long" => TokenKind::KwLong,
            "signed" => TokenKind::KwSigned,
            "unsigned" => TokenKind::KwUnsigned,
            "float" => TokenKind::KwFloat,
            "double" => TokenKind::KwDouble,
            "bool" => TokenKind::KwBool,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_resolution() {
        assert_eq!(TokenKind::from_keyword("return"), Some(TokenKind::KwReturn));
        assert_eq!(TokenKind::from_keyword("unsigned"), Some(TokenKind::KwUnsigned));
        assert_eq!(TokenKind::from_keyword("vector"), None);
    }

    #[test]
    fn test_predicates() {
        assert!(TokenKind::KwTrue.is_literal_or_constant());
        assert!(TokenKind::StringLiteral.is_literal());
        assert!(!TokenKind::Identifier.is_literal_or_constant());
        assert!(TokenKind::KwLong.is_builtin_type());
        assert!(TokenKind::KwRegister.is_cv_qualifier());
        assert!(TokenKind::KwUnion.is_class_key());
        assert!(TokenKind::MinusMinus.is_unary_prefix_operator());
        assert!(TokenKind::Comment.is_ignored());
    }
}
