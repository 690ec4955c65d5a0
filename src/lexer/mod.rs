//! Lexical analysis
//!
//! Converts source text into a flat stream of paren, number, string and name tokens.

mod sexpr_scanner;
mod token;

pub use sexpr_scanner::SExprScanner;
pub use token::{Token, TokenKind};
