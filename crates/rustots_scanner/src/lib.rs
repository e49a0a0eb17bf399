//! rustots_scanner: Lexer/tokenizer for TypeScript-like source code.
//!
//! The scanner is total: every input, however broken, becomes a contiguous
//! token sequence whose raw texts concatenate back to the source. Trivia
//! (whitespace, newlines, comments) is kept as tokens. Tokens the scanner
//! could not complete carry a malformation reason and produce a diagnostic.

mod char_codes;
mod scanner;
mod token;

pub use char_codes::{is_keyword, KEYWORDS};
pub use scanner::{tokenize, verify_coverage, Scanner};
pub use token::{Position, Token, TokenKind, UnknownTokenKind};
