//! Token and operator definitions.
//!
//! A [`Token`] is a borrowed view of the exact source text of one lexeme,
//! together with its byte span. Tokens never own text: their lifetime is
//! tied to the buffer they were scanned from, or to a `'static` operator
//! spelling when synthesized from an [`Operator`].

use std::fmt;
use std::str::FromStr;

use cfgs_util::Span;
use serde::Serialize;

/// A lexeme: source text plus the byte range it came from.
///
/// # Example
///
/// ```
/// use cfgs_lex::{Operator, Token};
///
/// let arrow = Operator::Arrow.token();
/// assert_eq!(arrow.text(), "->");
/// assert_eq!(arrow.len(), 2);
/// assert!(arrow.is_synthesized());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    text: &'a str,
    span: Span,
}

impl<'a> Token<'a> {
    /// Creates a token over `text`, which starts at byte `start` of its buffer.
    #[inline]
    pub fn new(text: &'a str, start: usize) -> Self {
        Self {
            text,
            span: Span::new(start, start + text.len()),
        }
    }

    /// Creates a token for text that has no source range behind it.
    #[inline]
    pub const fn synthesized(text: &'static str) -> Token<'static> {
        Token {
            text,
            span: Span::DUMMY,
        }
    }

    /// The exact text of the lexeme.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte range of the lexeme in its buffer.
    ///
    /// Synthesized tokens carry [`Span::DUMMY`].
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Length of the lexeme in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true for a zero-length lexeme.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true if this token does not point into a scanned buffer.
    pub fn is_synthesized(&self) -> bool {
        self.span == Span::DUMMY && !self.text.is_empty()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Classification of a scanned unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Identifier, including `%`-prefixed ones
    Identifier,
    /// Decimal or hexadecimal integer literal
    Integer,
    /// Floating point literal
    Float,
    /// Double-quoted string literal, quotes included
    String,
    /// One of the fixed [`Operator`]s
    Operator(Operator),
    /// Line or block comment, delimiters included
    Comment,
    /// A line break
    Eol,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Short lowercase name used in token dumps
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Operator(_) => "operator",
            TokenKind::Comment => "comment",
            TokenKind::Eol => "eol",
            TokenKind::Eof => "eof",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The closed set of operators.
///
/// Every variant has exactly one canonical spelling of one or two
/// characters. The spelling table is stable and safe to rely on for
/// pretty-printing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `^`
    Circumflex,
    /// `~`
    Tilde,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `?`
    Quest,
    /// `.`
    Dot,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `<<`
    Shl,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `>>`
    Shr,
    /// `&`
    And,
    /// `&&`
    AndAnd,
    /// `|`
    Or,
    /// `||`
    OrOr,
    /// `!`
    Bang,
    /// `%`
    Percent,
    /// `->`
    Arrow,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Operator; 33] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Asterisk,
        Operator::Slash,
        Operator::Circumflex,
        Operator::Tilde,
        Operator::LParen,
        Operator::RParen,
        Operator::LBracket,
        Operator::RBracket,
        Operator::LBrace,
        Operator::RBrace,
        Operator::Quest,
        Operator::Dot,
        Operator::Colon,
        Operator::Comma,
        Operator::Semicolon,
        Operator::Eq,
        Operator::EqEq,
        Operator::NotEq,
        Operator::Lt,
        Operator::LtEq,
        Operator::Shl,
        Operator::Gt,
        Operator::GtEq,
        Operator::Shr,
        Operator::And,
        Operator::AndAnd,
        Operator::Or,
        Operator::OrOr,
        Operator::Bang,
        Operator::Percent,
        Operator::Arrow,
    ];

    /// Canonical spelling.
    ///
    /// # Example
    ///
    /// ```
    /// use cfgs_lex::Operator;
    ///
    /// assert_eq!(Operator::LtEq.as_str(), "<=");
    /// assert_eq!(Operator::Lt.as_str(), "<");
    /// assert_eq!(Operator::Arrow.as_str(), "->");
    /// ```
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Asterisk => "*",
            Operator::Slash => "/",
            Operator::Circumflex => "^",
            Operator::Tilde => "~",
            Operator::LParen => "(",
            Operator::RParen => ")",
            Operator::LBracket => "[",
            Operator::RBracket => "]",
            Operator::LBrace => "{",
            Operator::RBrace => "}",
            Operator::Quest => "?",
            Operator::Dot => ".",
            Operator::Colon => ":",
            Operator::Comma => ",",
            Operator::Semicolon => ";",
            Operator::Eq => "=",
            Operator::EqEq => "==",
            Operator::NotEq => "!=",
            Operator::Lt => "<",
            Operator::LtEq => "<=",
            Operator::Shl => "<<",
            Operator::Gt => ">",
            Operator::GtEq => ">=",
            Operator::Shr => ">>",
            Operator::And => "&",
            Operator::AndAnd => "&&",
            Operator::Or => "|",
            Operator::OrOr => "||",
            Operator::Bang => "!",
            Operator::Percent => "%",
            Operator::Arrow => "->",
        }
    }

    /// Length of the spelling in bytes (1 or 2).
    #[inline]
    pub const fn len(&self) -> usize {
        self.as_str().len()
    }

    /// A token spelling this operator, with no source range behind it.
    #[inline]
    pub const fn token(&self) -> Token<'static> {
        Token::synthesized(self.as_str())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing text that spells no operator
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator: '{0}'")]
pub struct UnknownOperator(pub String);

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

static_assertions::assert_impl_all!(Token<'static>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Operator: Copy, Send, Sync);
static_assertions::const_assert_eq!(Operator::ALL.len(), 33);
