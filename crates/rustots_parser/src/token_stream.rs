//! A cursor over the grammar-significant tokens of a scan.
//!
//! Trivia and `unknown` tokens are stepped over. The scanner has already
//! reported every unknown token, so hiding them lets `100@;` parse as
//! `100;`. The full token slice is kept for line-break detection and for
//! locating the end of input.

use rustots_core::text::{LineAndColumn, TextPos};
use rustots_scanner::{Token, TokenKind};

pub struct TokenStream<'t> {
    /// Every token of the scan, trivia included.
    tokens: &'t [Token],
    /// Indices into `tokens` of the grammar-significant tokens.
    significant: Vec<usize>,
    /// Index into `significant` of the current token.
    cursor: usize,
}

impl<'t> TokenStream<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        let significant = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| is_significant(token))
            .map(|(index, _)| index)
            .collect();
        Self {
            tokens,
            significant,
            cursor: 0,
        }
    }

    /// Number of grammar-significant tokens.
    pub fn len(&self) -> usize {
        self.significant.len()
    }

    pub fn is_empty(&self) -> bool {
        self.significant.is_empty()
    }

    /// How many significant tokens have been consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.cursor >= self.significant.len()
    }

    /// The current token, or `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<&'t Token> {
        self.peek_nth(0)
    }

    /// The token `n` significant tokens ahead of the current one.
    pub fn peek_nth(&self, n: usize) -> Option<&'t Token> {
        let tokens = self.tokens;
        self.significant
            .get(self.cursor + n)
            .map(|&index| &tokens[index])
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Option<&'t Token> {
        let token = self.peek()?;
        self.cursor += 1;
        Some(token)
    }

    /// The most recently consumed token.
    pub fn previous(&self) -> Option<&'t Token> {
        let tokens = self.tokens;
        self.cursor
            .checked_sub(1)
            .and_then(|index| self.significant.get(index))
            .map(|&index| &tokens[index])
    }

    /// Whether a line break separates the previous significant token from
    /// the current one (or from end of input).
    pub fn has_preceding_line_break(&self) -> bool {
        let from = match self.cursor.checked_sub(1) {
            Some(prev) => self.significant[prev] + 1,
            None => 0,
        };
        let to = self
            .significant
            .get(self.cursor)
            .copied()
            .unwrap_or(self.tokens.len());
        self.tokens[from..to].iter().any(|token| match token.kind {
            TokenKind::Newline => true,
            TokenKind::Comment => token.value.contains(['\n', '\r']),
            _ => false,
        })
    }

    /// Character offset just after the last token.
    pub fn end_offset(&self) -> TextPos {
        self.tokens.last().map_or(0, |token| token.position.end)
    }

    /// Line and column just after the last token.
    pub fn end_location(&self) -> LineAndColumn {
        match self.tokens.last() {
            Some(token) => end_of_token(token),
            None => LineAndColumn::default(),
        }
    }
}

fn is_significant(token: &Token) -> bool {
    !token.kind.is_trivia() && token.kind != TokenKind::Unknown
}

/// Line and column of the position right after `token`.
fn end_of_token(token: &Token) -> LineAndColumn {
    let mut line = token.position.line;
    let mut column = token.position.column;
    let mut chars = token.value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\n' || (ch == '\r' && chars.peek() != Some(&'\n')) {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    LineAndColumn::new(line, column)
}
