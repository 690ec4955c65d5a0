//! Parser module
//!
//! Builds the call-expression AST from the token stream by recursive descent.

mod ast;
mod config;
mod sexpr_parser;

pub use ast::{Node, Program};
pub use config::{ParserConfig, DEFAULT_MAX_DEPTH};
pub use sexpr_parser::SExprParser;
