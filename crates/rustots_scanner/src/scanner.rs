//! The scanner/lexer.
//!
//! Converts source text into a contiguous stream of tokens, trivia included.
//! Each token start picks one class by its first character and then takes
//! the longest run that class allows.

use crate::char_codes::*;
use crate::token::{Position, Token, TokenKind};
use rustots_core::error::InternalError;
use rustots_core::text::TextPos;
use rustots_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage, Location};
use tracing::debug;

/// The scanner converts source text into tokens.
pub struct Scanner<'d> {
    /// The source text being scanned.
    text: Vec<char>,
    /// Current position in the text.
    pos: usize,
    /// 1-based line of `pos`.
    line: u32,
    /// 1-based column of `pos`.
    column: u32,
    /// Start of the current token.
    token_start: usize,
    token_line: u32,
    token_column: u32,
    /// Accumulated diagnostics, shared with the parser.
    diagnostics: &'d mut DiagnosticCollection,
}

impl<'d> Scanner<'d> {
    /// Create a new scanner for the given source text.
    pub fn new(text: &str, diagnostics: &'d mut DiagnosticCollection) -> Self {
        Self {
            text: text.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            token_start: 0,
            token_line: 1,
            token_column: 1,
            diagnostics,
        }
    }

    /// Get the full source text length in characters.
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    /// Scan the whole input.
    ///
    /// Never fails on malformed source. An `Err` means the produced tokens
    /// do not partition the input, which is a scanner defect.
    #[tracing::instrument(skip_all, fields(source_len = self.text.len()))]
    pub fn tokenize(mut self) -> Result<Vec<Token>, InternalError> {
        let mut tokens = Vec::new();
        while !self.is_eof() {
            tokens.push(self.scan());
        }
        verify_coverage(&tokens, self.text.len() as TextPos)?;
        debug!(
            token_count = tokens.len(),
            malformed = tokens.iter().filter(|t| t.is_malformed()).count(),
            "scanned source"
        );
        Ok(tokens)
    }

    // ========================================================================
    // Character helpers
    // ========================================================================

    /// Look at the character at the current position without advancing.
    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    /// Look at the character at position pos + offset.
    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    /// Whether we've reached the end of the text.
    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Consume one character, keeping line and column in step.
    ///
    /// The `\r` of a `\r\n` pair only moves the column; the `\n` then starts
    /// the new line, so the pair counts as one break.
    fn advance(&mut self) {
        let Some(ch) = self.current_char() else {
            return;
        };
        self.pos += 1;
        let ends_line = ch == '\n' || (ch == '\r' && self.current_char() != Some('\n'));
        if ends_line {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Consume a line break (`\n`, `\r\n` or `\r`) at the current position.
    fn advance_line_break(&mut self) {
        if self.current_char() == Some('\r') && self.char_at(1) == Some('\n') {
            self.advance_by(2);
        } else {
            self.advance();
        }
    }

    fn chars_to_string(&self, start: usize, end: usize) -> String {
        self.text[start..end].iter().collect()
    }

    // ========================================================================
    // Token construction
    // ========================================================================

    fn finish_token(&mut self, kind: TokenKind) -> Token {
        Token {
            kind,
            value: self.chars_to_string(self.token_start, self.pos),
            position: Position {
                start: self.token_start as TextPos,
                end: self.pos as TextPos,
                line: self.token_line,
                column: self.token_column,
            },
            malformed: None,
        }
    }

    /// Finish a token the scanner could not complete and report it.
    fn finish_malformed(&mut self, kind: TokenKind, message: &DiagnosticMessage, args: &[&str]) -> Token {
        let mut token = self.finish_token(kind);
        let diagnostic = Diagnostic::new(
            message,
            args,
            token.position.start,
            Location::new(token.position.line, token.position.column, token.len()),
        );
        token.malformed = Some(diagnostic.message.clone());
        self.diagnostics.add(diagnostic);
        token
    }

    // ========================================================================
    // Scanning
    // ========================================================================

    /// Scan the next token. Must not be called at end of input.
    fn scan(&mut self) -> Token {
        self.token_start = self.pos;
        self.token_line = self.line;
        self.token_column = self.column;

        let ch = self.text[self.pos];
        match ch {
            '\n' | '\r' => {
                self.advance_line_break();
                self.finish_token(TokenKind::Newline)
            }
            c if is_white_space_single_line(c) => self.scan_whitespace(),
            '/' if self.char_at(1) == Some('/') => self.scan_line_comment(),
            '/' if self.char_at(1) == Some('*') => self.scan_block_comment(),
            '"' | '\'' | '`' => self.scan_string_literal(ch),
            c if is_digit(c) => self.scan_number(),
            c if is_identifier_start(c) => self.scan_identifier(),
            _ => match self.match_punctuator() {
                Some((len, kind)) => {
                    self.advance_by(len);
                    self.finish_token(kind)
                }
                None => {
                    self.advance();
                    let text = ch.to_string();
                    self.finish_malformed(TokenKind::Unknown, &messages::UNRECOGNIZED_CHARACTER, &[&text])
                }
            },
        }
    }

    fn scan_whitespace(&mut self) -> Token {
        while self.current_char().map_or(false, is_white_space_single_line) {
            self.advance();
        }
        self.finish_token(TokenKind::Whitespace)
    }

    fn scan_line_comment(&mut self) -> Token {
        self.advance_by(2);
        while self.current_char().map_or(false, |c| !is_line_break(c)) {
            self.advance();
        }
        self.finish_token(TokenKind::Comment)
    }

    fn scan_block_comment(&mut self) -> Token {
        self.advance_by(2);
        loop {
            if self.is_eof() {
                return self.finish_malformed(TokenKind::Comment, &messages::UNTERMINATED_BLOCK_COMMENT, &[]);
            }
            if self.current_char() == Some('*') && self.char_at(1) == Some('/') {
                self.advance_by(2);
                return self.finish_token(TokenKind::Comment);
            }
            self.advance();
        }
    }

    /// Scan a quoted string or template literal.
    ///
    /// A backslash escapes the next character; an escaped line break
    /// continues the literal. An unescaped line break ends it unterminated,
    /// with the break left for the next token.
    fn scan_string_literal(&mut self, quote: char) -> Token {
        self.advance(); // skip opening quote
        loop {
            let Some(ch) = self.current_char() else {
                return self.finish_malformed(TokenKind::Literal, &messages::UNTERMINATED_STRING, &[]);
            };
            if ch == quote {
                self.advance();
                return self.finish_token(TokenKind::Literal);
            }
            if ch == '\\' {
                self.advance();
                match self.current_char() {
                    Some(c) if is_line_break(c) => self.advance_line_break(),
                    Some(_) => self.advance(),
                    None => {}
                }
                continue;
            }
            if is_line_break(ch) {
                return self.finish_malformed(TokenKind::Literal, &messages::UNTERMINATED_STRING, &[]);
            }
            self.advance();
        }
    }

    /// Scan a numeric literal starting at an ASCII digit.
    ///
    /// A decimal run takes digits, `_` and every `.`; more than one `.` marks
    /// it malformed. Radix prefixes, exponents and the BigInt suffix are
    /// accepted on well-formed runs.
    fn scan_number(&mut self) -> Token {
        if self.current_char() == Some('0') {
            let radix = match self.char_at(1) {
                Some('x') | Some('X') => Some(16),
                Some('o') | Some('O') => Some(8),
                Some('b') | Some('B') => Some(2),
                _ => None,
            };
            if let Some(radix) = radix {
                if self.char_at(2).map_or(false, |c| is_radix_digit(c, radix)) {
                    return self.scan_radix_number(radix);
                }
            }
        }

        let mut dot_count = 0usize;
        while let Some(ch) = self.current_char() {
            if ch == '.' {
                dot_count += 1;
            } else if !is_digit(ch) && ch != '_' {
                break;
            }
            self.advance();
        }

        if dot_count > 1 {
            let count = dot_count.to_string();
            return self.finish_malformed(TokenKind::Literal, &messages::MULTIPLE_DECIMAL_POINTS, &[&count]);
        }

        // Exponent
        let mut has_exponent = false;
        if let Some('e') | Some('E') = self.current_char() {
            let digit_offset = match self.char_at(1) {
                Some('+') | Some('-') => 2,
                _ => 1,
            };
            if self.char_at(digit_offset).map_or(false, is_digit) {
                has_exponent = true;
                self.advance_by(digit_offset);
                self.scan_digits(10);
            }
        }

        // BigInt suffix
        if dot_count == 0 && !has_exponent && self.current_char() == Some('n') {
            self.advance();
        }
        self.finish_token(TokenKind::Literal)
    }

    fn scan_radix_number(&mut self, radix: u32) -> Token {
        self.advance_by(2); // skip 0x / 0o / 0b
        self.scan_digits(radix);
        if self.current_char() == Some('n') {
            self.advance();
        }
        self.finish_token(TokenKind::Literal)
    }

    fn scan_digits(&mut self, radix: u32) {
        while self
            .current_char()
            .map_or(false, |c| c == '_' || is_radix_digit(c, radix))
        {
            self.advance();
        }
    }

    fn scan_identifier(&mut self) -> Token {
        self.advance();
        while self.current_char().map_or(false, is_identifier_part) {
            self.advance();
        }
        let text = self.chars_to_string(self.token_start, self.pos);

        // Check if it's a keyword
        if is_keyword(&text) {
            self.finish_token(TokenKind::Keyword)
        } else {
            self.finish_token(TokenKind::Identifier)
        }
    }

    /// Find the longest operator or punctuator at the current position.
    fn match_punctuator(&self) -> Option<(usize, TokenKind)> {
        PUNCTUATORS.iter().find_map(|(text, kind)| {
            let len = text.chars().count();
            let matches = text.chars().enumerate().all(|(i, c)| self.char_at(i) == Some(c));
            if !matches {
                return None;
            }
            // `a?.5:b` is a conditional, not optional chaining.
            if *text == "?." && self.char_at(2).map_or(false, is_digit) {
                return None;
            }
            Some((len, *kind))
        })
    }
}

/// Scan `text` into tokens, appending lexical diagnostics to `diagnostics`.
pub fn tokenize(text: &str, diagnostics: &mut DiagnosticCollection) -> Result<Vec<Token>, InternalError> {
    Scanner::new(text, diagnostics).tokenize()
}

/// Check that `tokens` partition a text of `text_len` characters.
///
/// Every token must start where its predecessor ended, hold exactly as many
/// characters as its span, and the last one must end at `text_len`.
pub fn verify_coverage(tokens: &[Token], text_len: TextPos) -> Result<(), InternalError> {
    let mut expected: TextPos = 0;
    for token in tokens {
        if token.position.start != expected {
            return Err(InternalError::TokenGap {
                expected,
                found: token.position.start,
            });
        }
        let text_chars = token.value.chars().count() as TextPos;
        if text_chars != token.len() {
            return Err(InternalError::TokenTextMismatch {
                offset: token.position.start,
                span_len: token.len(),
                text_len: text_chars,
            });
        }
        expected = token.position.end;
    }
    if expected != text_len {
        return Err(InternalError::CoverageMismatch {
            covered: expected,
            expected: text_len,
        });
    }
    Ok(())
}
