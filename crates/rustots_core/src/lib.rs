//! rustots_core: Core utilities shared by the rustots analysis pipeline.
//!
//! Provides text positions measured in logical characters, line/column
//! pairs, and the error type for broken internal invariants.

pub mod error;
pub mod text;

// Re-export commonly used types
pub use error::InternalError;
pub use text::{LineAndColumn, TextPos, TextRange};
