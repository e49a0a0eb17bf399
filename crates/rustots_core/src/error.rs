//! Internal invariant violations.
//!
//! These signal a defect in the analyzer itself. They are never folded into
//! user-facing diagnostics, which describe problems in the analyzed source.

use crate::text::TextPos;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternalError {
    /// A token does not start where the previous one ended.
    #[error("token stream is not contiguous: expected a token at offset {expected}, found one at {found}")]
    TokenGap { expected: TextPos, found: TextPos },

    /// The token spans do not add up to the source length.
    #[error("tokens cover {covered} characters but the source has {expected}")]
    CoverageMismatch { covered: TextPos, expected: TextPos },

    /// A token's raw text disagrees with its span.
    #[error("token at offset {offset} has a span of {span_len} characters but {text_len} characters of text")]
    TokenTextMismatch {
        offset: TextPos,
        span_len: TextPos,
        text_len: TextPos,
    },

    /// A statement-level parse step consumed no token.
    #[error("parser made no progress at offset {offset}")]
    NoProgress { offset: TextPos },

    /// The token cursor was read past its end outside any grammar rule.
    #[error("token stream exhausted unexpectedly while {context}")]
    StreamExhausted { context: &'static str },
}
