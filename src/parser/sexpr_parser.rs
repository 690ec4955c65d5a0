use super::ast::{Node, Program};
use super::config::ParserConfig;
use crate::error::{Expected, ParseError};
use crate::lexer::{Token, TokenKind};

/// Recursive-descent parser for the S-expression call syntax
pub struct SExprParser {
    tokens: Vec<Token>,
    current: usize,
    config: ParserConfig,
}

impl SExprParser {
    /// Creates a new S-expression parser with default limits
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    /// Creates a parser with explicit limits
    pub fn with_config(tokens: Vec<Token>, config: ParserConfig) -> Self {
        SExprParser {
            tokens,
            current: 0,
            config,
        }
    }

    /// Parses the tokens into an AST
    pub fn parse(mut self) -> Result<Program, ParseError> {
        tracing::debug!(tokens = self.tokens.len(), "parse start");

        let mut body = Vec::new();
        while !self.is_at_end() {
            body.push(self.walk(0)?);
        }

        tracing::debug!(expressions = body.len(), "parse complete");
        Ok(Program { body })
    }

    /// Parse one expression; `depth` counts the calls enclosing it
    fn walk(&mut self, depth: usize) -> Result<Node, ParseError> {
        let token = self.peek_or_eof(Expected::Expression)?;
        let (kind, opens_call) = (token.kind, token.is_open_paren());

        match kind {
            TokenKind::Number => {
                let value = self.advance().text;
                Ok(Node::NumberLiteral { value })
            }
            TokenKind::String => {
                let value = self.advance().text;
                Ok(Node::StringLiteral { value })
            }
            TokenKind::Paren if opens_call => self.parse_call(depth),
            _ => Err(self.unexpected(Expected::Expression)),
        }
    }

    /// Parse (name params...)
    fn parse_call(&mut self, depth: usize) -> Result<Node, ParseError> {
        if depth >= self.config.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.config.max_depth,
                position: self.current,
            });
        }
        self.advance(); // consume '('

        let next = self.peek_or_eof(Expected::CallName)?.kind;
        let name = match next {
            TokenKind::Name => self.advance().text,
            _ => return Err(self.unexpected(Expected::CallName)),
        };

        let mut params = Vec::new();
        while !self.peek_or_eof(Expected::ClosingParen)?.is_close_paren() {
            params.push(self.walk(depth + 1)?);
        }
        self.advance(); // consume ')'

        tracing::trace!(%name, params = params.len(), depth, "call expression");
        Ok(Node::CallExpression { name, params })
    }

    // Helper methods

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Token under the cursor, or an end-of-input error naming what was expected
    fn peek_or_eof(&self, expected: Expected) -> Result<&Token, ParseError> {
        self.tokens
            .get(self.current)
            .ok_or(ParseError::UnexpectedEof {
                expected,
                position: self.current,
            })
    }

    /// Only called after `peek_or_eof` succeeded at the same cursor
    fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        self.current += 1;
        token
    }

    /// Error for the token under the cursor; only called when one exists
    fn unexpected(&self, expected: Expected) -> ParseError {
        ParseError::UnexpectedToken {
            found: self.tokens[self.current].clone(),
            expected,
            position: self.current,
        }
    }
}
