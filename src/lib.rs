//! # tiny-lisp-front
//!
//! Front end of a miniature compiler: a lexer and a recursive-descent parser
//! for a minimal S-expression call language.
//!
//! ```text
//! Source Code → Scanner → Tokens → Parser → AST (Program)
//! ```
//!
//! The grammar has four token classes (parens, integer numbers, double-quoted
//! strings and alphabetic names) and three expression forms:
//!
//! - `(name params...)` - a call expression, possibly with no parameters
//! - `42` - a number literal, kept as text
//! - `"text"` - a string literal, no escape sequences
//!
//! ## Basic Usage
//!
//! ```rust
//! use tiny_lisp_front::{parse, tokenize, Node};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tokens = tokenize("(add 2 (subtract 4 2))")?;
//! let program = parse(tokens)?;
//!
//! assert_eq!(
//!     program.body,
//!     vec![Node::call(
//!         "add",
//!         vec![
//!             Node::number("2"),
//!             Node::call("subtract", vec![Node::number("4"), Node::number("2")]),
//!         ],
//!     )]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Lexing and parsing stop at the first problem and report where it happened:
//!
//! ```rust
//! use tiny_lisp_front::{parse_source, Error, LexError};
//!
//! match parse_source("(add 2 @)") {
//!     Err(Error::Lex(LexError::UnexpectedCharacter { character, position, .. })) => {
//!         assert_eq!(character, '@');
//!         assert_eq!(position, 7);
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```
//!
//! ## Nesting Limit
//!
//! The parser recurses once per nested call. [`ParserConfig::max_depth`]
//! (default [`DEFAULT_MAX_DEPTH`]) bounds that recursion and turns deeper
//! input into [`ParseError::NestingTooDeep`].

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{Error, Expected, LexError, ParseError, Result};
pub use lexer::{SExprScanner, Token, TokenKind};
pub use parser::{Node, ParserConfig, Program, SExprParser, DEFAULT_MAX_DEPTH};

/// Type alias for the S-expression scanner (lexer).
pub type Scanner = SExprScanner;

/// Type alias for the S-expression parser.
pub type Parser = SExprParser;

/// Splits source text into tokens in source order
pub fn tokenize(input: &str) -> std::result::Result<Vec<Token>, LexError> {
    SExprScanner::new(input).scan_tokens()
}

/// Builds the program tree from a token sequence with default limits
pub fn parse(tokens: Vec<Token>) -> std::result::Result<Program, ParseError> {
    SExprParser::new(tokens).parse()
}

/// Builds the program tree with caller-supplied limits
pub fn parse_with_config(
    tokens: Vec<Token>,
    config: &ParserConfig,
) -> std::result::Result<Program, ParseError> {
    SExprParser::with_config(tokens, config.clone()).parse()
}

/// Runs both stages over source text
pub fn parse_source(input: &str) -> Result<Program> {
    let tokens = tokenize(input)?;
    Ok(parse(tokens)?)
}
