//! Error types for the lexer and parser

use crate::lexer::Token;
use std::fmt;
use thiserror::Error;

/// Errors raised while scanning source text into tokens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Character that matches none of the token classes
    ///
    /// **Triggered by:** anything other than parens, whitespace, digits, `"` or letters
    /// **Example:** `(add 2 @)` fails on `@` at position 7
    #[error("Unexpected character '{character}' at position {position} (line {line}, column {column})")]
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Zero-based character offset in the source
        position: usize,
        /// Line number (1-indexed)
        line: usize,
        /// Column number (1-indexed)
        column: usize,
    },

    /// String literal with no closing quote before the end of input
    ///
    /// **Example:** `(concat "foo`
    #[error("Unterminated string starting at position {position} (line {line}, column {column})")]
    UnterminatedString {
        /// Offset of the opening quote
        position: usize,
        /// Line number of the opening quote (1-indexed)
        line: usize,
        /// Column number of the opening quote (1-indexed)
        column: usize,
    },
}

impl LexError {
    /// Character offset the error is attributed to
    pub fn position(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { position, .. }
            | LexError::UnterminatedString { position, .. } => *position,
        }
    }
}

/// What the parser was looking for when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A number, a string or a `(` opening a call
    Expression,
    /// The name token right after `(`
    CallName,
    /// A parameter expression or the `)` closing a call
    ClosingParen,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expected::Expression => write!(f, "number, string or `(`"),
            Expected::CallName => write!(f, "function name after `(`"),
            Expected::ClosingParen => write!(f, "`)` to close the call expression"),
        }
    }
}

/// Errors raised while building the AST from tokens
///
/// Positions are indices into the token sequence handed to the parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Token under the cursor does not fit the current grammar rule
    #[error("Expected {expected}, found {found} at token {position}")]
    UnexpectedToken {
        /// The token actually encountered
        found: Token,
        /// What the grammar required here
        expected: Expected,
        /// Index of `found` in the token sequence
        position: usize,
    },

    /// Token sequence ended in the middle of an expression
    ///
    /// **Example:** `(add 2` (missing closing parenthesis)
    #[error("Expected {expected}, found end of input at token {position}")]
    UnexpectedEof {
        /// What the grammar required here
        expected: Expected,
        /// Length of the token sequence
        position: usize,
    },

    /// Call expressions nested deeper than the configured limit
    #[error("Call nesting exceeds the limit of {limit} at token {position}")]
    NestingTooDeep {
        /// Configured maximum depth
        limit: usize,
        /// Index of the `(` that crossed the limit
        position: usize,
    },
}

impl ParseError {
    /// Token index the error is attributed to
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::UnexpectedEof { position, .. }
            | ParseError::NestingTooDeep { position, .. } => *position,
        }
    }

    /// The token that was encountered, if any
    pub fn found(&self) -> Option<&Token> {
        match self {
            ParseError::UnexpectedToken { found, .. } => Some(found),
            _ => None,
        }
    }
}

/// Errors from the full source-to-AST pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Lexing failed
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    /// Parsing failed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Character offset for lex errors, token index for parse errors
    pub fn position(&self) -> usize {
        match self {
            Error::Lex(e) => e.position(),
            Error::Parse(e) => e.position(),
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_lex_error_message() {
        let err = LexError::UnexpectedCharacter {
            character: '@',
            position: 7,
            line: 1,
            column: 8,
        };
        assert_eq!(err.position(), 7);
        assert!(err.to_string().contains("'@'"));
        assert!(err.to_string().contains("position 7"));
    }

    #[test]
    fn test_parse_error_found_token() {
        let token = Token::new(TokenKind::Paren, ")".to_string(), 0, 1, 1);
        let err = ParseError::UnexpectedToken {
            found: token.clone(),
            expected: Expected::Expression,
            position: 0,
        };
        assert_eq!(err.found(), Some(&token));
        assert!(err.to_string().contains("found `)`"));
    }

    #[test]
    fn test_umbrella_conversion() {
        let err: Error = ParseError::UnexpectedEof {
            expected: Expected::ClosingParen,
            position: 3,
        }
        .into();
        assert_eq!(err.position(), 3);
        assert!(err.to_string().starts_with("Parse error:"));
    }
}
