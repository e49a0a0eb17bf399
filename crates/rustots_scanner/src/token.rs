//! Tokens produced by the scanner.

use rustots_core::text::{TextPos, TextRange};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Literal,
    Operator,
    Punctuation,
    Comment,
    Whitespace,
    Newline,
    Unknown,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 9] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Literal,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Comment,
        TokenKind::Whitespace,
        TokenKind::Newline,
        TokenKind::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Literal => "literal",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Comment => "comment",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "newline",
            TokenKind::Unknown => "unknown",
        }
    }

    /// Trivia never takes part in the grammar.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Newline | TokenKind::Comment
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown token kind '{0}'")]
pub struct UnknownTokenKind(pub String);

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| UnknownTokenKind(s.to_string()))
    }
}

/// Where a token sits in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    /// Character offset of the first character (inclusive).
    pub start: TextPos,
    /// Character offset after the last character (exclusive).
    pub end: TextPos,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
}

/// A scanned token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub value: String,
    pub position: Position,
    /// Why the scanner could not complete this token, if it could not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub malformed: Option<String>,
}

impl Token {
    pub fn range(&self) -> TextRange {
        TextRange::new(self.position.start, self.position.end)
    }

    /// The length of this token in characters.
    pub fn len(&self) -> TextPos {
        self.position.end - self.position.start
    }

    pub fn is_empty(&self) -> bool {
        self.position.start == self.position.end
    }

    pub fn is_malformed(&self) -> bool {
        self.malformed.is_some()
    }

    /// Whether this token is the given punctuation or operator text.
    #[inline]
    pub fn is(&self, text: &str) -> bool {
        matches!(self.kind, TokenKind::Punctuation | TokenKind::Operator) && self.value == text
    }

    /// Whether this token is the given keyword.
    #[inline]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.value == keyword
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("keyword".parse::<TokenKind>(), Ok(TokenKind::Keyword));
        assert_eq!(" Newline ".parse::<TokenKind>(), Ok(TokenKind::Newline));
        assert_eq!(
            "regex".parse::<TokenKind>(),
            Err(UnknownTokenKind("regex".to_string()))
        );
    }

    #[test]
    fn test_kind_round_trips_through_display() {
        for kind in TokenKind::ALL {
            assert_eq!(kind.to_string().parse::<TokenKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_token_serialization_shape() {
        let token = Token {
            kind: TokenKind::Unknown,
            value: "@".to_string(),
            position: Position {
                start: 11,
                end: 12,
                line: 1,
                column: 12,
            },
            malformed: Some("unrecognized character: '@'".to_string()),
        };
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["type"], "unknown");
        assert_eq!(json["value"], "@");
        assert_eq!(json["position"]["start"], 11);
        assert_eq!(json["position"]["column"], 12);
        assert_eq!(json["malformed"], "unrecognized character: '@'");
    }

    #[test]
    fn test_well_formed_token_omits_malformed() {
        let token = Token {
            kind: TokenKind::Punctuation,
            value: ";".to_string(),
            position: Position {
                start: 0,
                end: 1,
                line: 1,
                column: 1,
            },
            malformed: None,
        };
        let json = serde_json::to_value(&token).unwrap();
        assert!(json.get("malformed").is_none());
        assert!(token.is(";"));
        assert!(!token.is_keyword(";"));
        assert_eq!(token.len(), 1);
    }
}
