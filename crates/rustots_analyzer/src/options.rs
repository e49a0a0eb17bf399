//! Analysis options.

use rustots_scanner::{Token, TokenKind, UnknownTokenKind};
use serde::{Deserialize, Serialize};

/// How far the analysis goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Scan and parse.
    #[default]
    Full,
    /// Scan only; no AST is produced.
    Lexical,
}

/// Which tokens end up in the output.
///
/// Applied after parsing, so it only shapes what is reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenFilter {
    /// Keep only these kinds. `None` keeps every kind.
    pub kinds: Option<Vec<TokenKind>>,
    /// Drop whitespace and newline tokens.
    pub exclude_whitespace: bool,
    /// Keep only tokens the scanner could not complete.
    pub only_malformed: bool,
}

impl TokenFilter {
    /// Whether this filter keeps every token.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_none() && !self.exclude_whitespace && !self.only_malformed
    }

    pub fn accepts(&self, token: &Token) -> bool {
        if self.exclude_whitespace
            && matches!(token.kind, TokenKind::Whitespace | TokenKind::Newline)
        {
            return false;
        }
        if self.only_malformed && !token.is_malformed() {
            return false;
        }
        match self.kinds {
            Some(ref kinds) => kinds.contains(&token.kind),
            None => true,
        }
    }

    pub fn apply(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        if !self.is_empty() {
            tokens.retain(|token| self.accepts(token));
        }
        tokens
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub mode: AnalysisMode,
    pub filter: TokenFilter,
}

/// Parse a comma-separated list of token kind names, e.g. `keyword,identifier`.
///
/// Empty entries are ignored.
pub fn parse_token_kinds(list: &str) -> Result<Vec<TokenKind>, UnknownTokenKind> {
    let mut kinds = Vec::new();
    for name in list.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        let kind: TokenKind = name.parse()?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    Ok(kinds)
}
