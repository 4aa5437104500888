//! Hand-written scanner turning source text into tokens.
//!
//! The scanner makes a single left-to-right pass with one character of
//! lookahead (two when deciding whether a `.` belongs to a number). It never
//! fails: malformed input is recorded as a [`LexError`] and scanning resumes
//! at the next character. Exactly one [`TokenKind::Eof`] token is always
//! appended.

use tracing::{debug, trace};

use crate::scanner::{LexError, LexErrorKind, Literal, Span, Token, TokenKind};

/// Output of a scanning pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Scanned {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl Scanned {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan `source` into tokens, collecting every lexical error.
pub fn scan(source: &str) -> Scanned {
    Scanner::new(source).scan_tokens()
}

pub struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    errors: Vec<LexError>,

    /// Byte offset where the current lexeme starts.
    start: usize,
    /// Byte offset of the next unread character.
    current: usize,
    line: usize,
    /// 1-based column of the next unread character, counted in chars.
    column: usize,

    // Location of the current lexeme's first character.
    start_line: usize,
    start_column: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            errors: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
        }
    }

    pub fn scan_tokens(mut self) -> Scanned {
        while !self.is_at_end() {
            self.begin_lexeme();
            self.scan_token();
        }

        self.begin_lexeme();
        self.add_token(TokenKind::Eof, None);

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "scanned source"
        );

        Scanned {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn begin_lexeme(&mut self) {
        self.start = self.current;
        self.start_line = self.line;
        self.start_column = self.column;
    }

    fn scan_token(&mut self) {
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '(' => self.add_token(TokenKind::LeftParen, None),
            ')' => self.add_token(TokenKind::RightParen, None),
            '{' => self.add_token(TokenKind::LeftBrace, None),
            '}' => self.add_token(TokenKind::RightBrace, None),
            ',' => self.add_token(TokenKind::Comma, None),
            '.' => self.add_token(TokenKind::Dot, None),
            '-' => self.add_token(TokenKind::Minus, None),
            '+' => self.add_token(TokenKind::Plus, None),
            ';' => self.add_token(TokenKind::Semicolon, None),
            '*' => self.add_token(TokenKind::Star, None),
            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => {
                if self.match_char('/') {
                    // Line comment runs until the newline, which is left for
                    // the main loop so the line counter stays right.
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash, None);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.newline(),
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if is_alpha(c) => self.identifier(),
            other => self.error_at_start(LexErrorKind::UnexpectedCharacter(other)),
        }
    }

    fn string(&mut self) {
        loop {
            match self.peek() {
                Some('"') => break,
                Some('\n') => {
                    self.advance();
                    self.newline();
                }
                Some(_) => {
                    self.advance();
                }
                None => {
                    self.errors.push(LexError::new(
                        LexErrorKind::UnterminatedString,
                        self.line,
                        self.column,
                        Span::new(self.start, self.current),
                    ));
                    trace!(line = self.line, "unterminated string");
                    return;
                }
            }
        }

        // The closing quote.
        self.advance();

        let value = &self.source[self.start + 1..self.current - 1];
        self.add_token(TokenKind::String, Some(Literal::Str(value.to_string())));
    }

    fn number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // A fractional part needs at least one digit after the dot.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = &self.source[self.start..self.current];
        // Digit runs always parse; overlong ones round to infinity.
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                self.add_token(TokenKind::Number, Some(Literal::Number(value)))
            }
            _ => self.error_at_start(LexErrorKind::NumberOutOfRange(text.to_string())),
        }
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(is_alphanumeric) {
            self.advance();
        }

        let text = &self.source[self.start..self.current];
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind, None);
    }

    fn add_either(&mut self, next: char, matched: TokenKind, single: TokenKind) {
        let kind = if self.match_char(next) { matched } else { single };
        self.add_token(kind, None);
    }

    fn add_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = &self.source[self.start..self.current];
        self.tokens.push(Token::new(
            kind,
            lexeme,
            literal,
            self.start_line,
            self.start_column,
            Span::new(self.start, self.current),
        ));
    }

    fn error_at_start(&mut self, kind: LexErrorKind) {
        trace!(line = self.start_line, column = self.start_column, %kind, "lexical error");
        self.errors.push(LexError::new(
            kind,
            self.start_line,
            self.start_column,
            Span::new(self.start, self.current),
        ));
    }

    fn newline(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        self.column += 1;
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.source[self.current..].chars().nth(1)
    }
}

fn is_alpha(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}
