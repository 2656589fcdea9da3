//! Operator precedence for binary operators.
//!
//! Ranks follow the C++ binary-operator ladder from comma up to
//! pointer-to-member. Two synthetic ranks sit above the binary range: one
//! for unary prefix operators and one for `.`/`->` member access, which the
//! expression recognizer substitutes itself — whatever a table says about
//! those two tokens is ignored.

use fuzzycpp_token::TokenKind;

/// A binary-operator precedence rank. Larger binds tighter; `NONE` marks
/// tokens that are not binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(pub u8);

impl Precedence {
    pub const NONE: Precedence = Precedence(0);
    pub const COMMA: Precedence = Precedence(1);
    pub const ASSIGNMENT: Precedence = Precedence(2);
    pub const CONDITIONAL: Precedence = Precedence(3);
    pub const LOGICAL_OR: Precedence = Precedence(4);
    pub const LOGICAL_AND: Precedence = Precedence(5);
    pub const INCLUSIVE_OR: Precedence = Precedence(6);
    pub const EXCLUSIVE_OR: Precedence = Precedence(7);
    pub const AND: Precedence = Precedence(8);
    pub const EQUALITY: Precedence = Precedence(9);
    pub const RELATIONAL: Precedence = Precedence(10);
    pub const SHIFT: Precedence = Precedence(11);
    pub const ADDITIVE: Precedence = Precedence(12);
    pub const MULTIPLICATIVE: Precedence = Precedence(13);
    pub const POINTER_TO_MEMBER: Precedence = Precedence(14);

    /// Synthetic rank for unary prefix operators.
    pub const UNARY: Precedence = Precedence(15);
    /// Synthetic rank for `.` and `->`; binds tighter than everything else.
    pub const MEMBER: Precedence = Precedence(16);

    /// The next tighter rank.
    #[inline]
    pub fn higher(self) -> Precedence {
        Precedence(self.0 + 1)
    }
}

/// Map a token kind to its binary-operator precedence, or `NONE` if the
/// token is not a binary operator.
pub fn binary_operator_precedence(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Comma => Precedence::COMMA,
        TokenKind::Equal
        | TokenKind::PlusEqual
        | TokenKind::MinusEqual
        | TokenKind::StarEqual
        | TokenKind::SlashEqual
        | TokenKind::PercentEqual
        | TokenKind::AmpEqual
        | TokenKind::PipeEqual
        | TokenKind::CaretEqual
        | TokenKind::LessLessEqual
        | TokenKind::GreaterGreaterEqual => Precedence::ASSIGNMENT,
        TokenKind::Question => Precedence::CONDITIONAL,
        TokenKind::PipePipe => Precedence::LOGICAL_OR,
        TokenKind::AmpAmp => Precedence::LOGICAL_AND,
        TokenKind::Pipe => Precedence::INCLUSIVE_OR,
        TokenKind::Caret => Precedence::EXCLUSIVE_OR,
        TokenKind::Amp => Precedence::AND,
        TokenKind::EqualEqual | TokenKind::ExclaimEqual => Precedence::EQUALITY,
        TokenKind::Less
        | TokenKind::Greater
        | TokenKind::LessEqual
        | TokenKind::GreaterEqual => Precedence::RELATIONAL,
        TokenKind::LessLess | TokenKind::GreaterGreater => Precedence::SHIFT,
        TokenKind::Plus | TokenKind::Minus => Precedence::ADDITIVE,
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Precedence::MULTIPLICATIVE,
        TokenKind::PeriodStar | TokenKind::ArrowStar => Precedence::POINTER_TO_MEMBER,
        _ => Precedence::NONE,
    }
}
