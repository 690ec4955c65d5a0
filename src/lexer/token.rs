use serde::{Deserialize, Serialize};
use std::fmt;

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// Token text (quotes stripped for strings)
    #[serde(rename = "value")]
    pub text: String,
    /// Character offset where the token starts (0-indexed)
    pub position: usize,
    /// Line number where token appears (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, text: String, position: usize, line: usize, column: usize) -> Self {
        Token {
            kind,
            text,
            position,
            line,
            column,
        }
    }

    /// True for the `(` paren token
    pub fn is_open_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.text == "("
    }

    /// True for the `)` paren token
    pub fn is_close_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.text == ")"
    }
}

/// All token classes of the call language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// `(` or `)`, told apart by the token text
    Paren,
    /// Run of decimal digits
    Number,
    /// Double-quoted string literal
    String,
    /// Run of letters naming a function
    Name,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Paren => write!(f, "paren"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::String => write!(f, "string"),
            TokenKind::Name => write!(f, "name"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::Paren => write!(f, "`{}`", self.text),
            TokenKind::String => write!(f, "string \"{}\"", self.text),
            kind => write!(f, "{} `{}`", kind, self.text),
        }
    }
}
