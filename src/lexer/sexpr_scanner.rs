use super::token::{Token, TokenKind};
use crate::error::LexError;

/// Scanner for the S-expression call syntax
pub struct SExprScanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Line and column where the current token starts
    start_line: usize,
    start_column: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
}

impl SExprScanner {
    /// Creates a new S-expression scanner from source code
    pub fn new(source: &str) -> Self {
        SExprScanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            start_line: 1,
            start_column: 1,
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans all tokens from source code and returns them as a vector
    pub fn scan_tokens(mut self) -> Result<Vec<Token>, LexError> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.start_column = self.column;
            self.scan_token()?;
        }

        tracing::debug!(
            chars = self.source.len(),
            tokens = self.tokens.len(),
            "scan complete"
        );
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<(), LexError> {
        let c = self.advance();

        match c {
            '(' | ')' => self.add_token(TokenKind::Paren, c.to_string()),

            c if c.is_whitespace() => {}

            c if c.is_ascii_digit() => self.scan_number(),

            '"' => self.scan_string()?,

            c if c.is_ascii_alphabetic() => self.scan_name(),

            _ => {
                return Err(LexError::UnexpectedCharacter {
                    character: c,
                    position: self.start,
                    line: self.start_line,
                    column: self.start_column,
                });
            }
        }

        Ok(())
    }

    fn scan_number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        let text = self.lexeme(self.start, self.current);
        self.add_token(TokenKind::Number, text);
    }

    fn scan_string(&mut self) -> Result<(), LexError> {
        // No escape sequences: everything up to the next quote is taken as-is
        while self.peek().is_some_and(|c| c != '"') {
            self.advance();
        }

        if self.is_at_end() {
            return Err(LexError::UnterminatedString {
                position: self.start,
                line: self.start_line,
                column: self.start_column,
            });
        }

        let text = self.lexeme(self.start + 1, self.current);
        self.advance(); // Closing "
        self.add_token(TokenKind::String, text);
        Ok(())
    }

    fn scan_name(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.advance();
        }
        let text = self.lexeme(self.start, self.current);
        self.add_token(TokenKind::Name, text);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn lexeme(&self, from: usize, to: usize) -> String {
        self.source[from..to].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind, text: String) {
        tracing::trace!(%kind, text = %text, position = self.start, "token");
        self.tokens.push(Token::new(
            kind,
            text,
            self.start,
            self.start_line,
            self.start_column,
        ));
    }
}
