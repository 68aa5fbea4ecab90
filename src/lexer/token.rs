use serde::{Deserialize, Serialize};

/// A single lexical unit from the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Text payload; empty for structural tokens (parens, comma, terminator)
    pub text: String,
}

impl Token {
    /// Creates a token carrying a text payload
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    /// Creates a structural token with no payload
    pub fn bare(kind: TokenKind) -> Self {
        Token {
            kind,
            text: String::new(),
        }
    }
}

/// All token types in the S-expression grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Left parenthesis (
    OpenParen,
    /// Right parenthesis )
    CloseParen,
    /// Comma, introducing an eval form
    Comma,
    /// Keyword such as `:name` (lower-cased, colon retained)
    Keyword,
    /// Symbol identifier (lower-cased)
    Symbol,
    /// String literal with escapes already resolved
    String,
    /// Floating-point literal, text kept verbatim
    Float,
    /// Integer literal, text kept verbatim
    Integer,
    /// End of input; repeats on every call once reached
    Terminator,
    /// Lexical error; payload is a message or the offending character
    Invalid,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            TokenKind::OpenParen => write!(f, "("),
            TokenKind::CloseParen => write!(f, ")"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::String => write!(f, "\"{}\"", self.text),
            TokenKind::Terminator => write!(f, "<end>"),
            TokenKind::Invalid => write!(f, "<invalid: {}>", self.text),
            _ => write!(f, "{}", self.text),
        }
    }
}
