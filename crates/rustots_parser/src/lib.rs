//! rustots_parser: Recursive descent parser for TypeScript-like source.
//!
//! Parses the scanner's token sequence into an owned AST. Syntax errors
//! become diagnostics and the parser resynchronizes, so a `Program` is
//! always produced; only internal invariant violations are returned as
//! errors.

mod parser;
mod precedence;
mod token_stream;
mod utilities;

pub use parser::{parse, Parser, MAX_RECURSION_DEPTH};
pub use token_stream::TokenStream;
pub use utilities::{cook_number_literal, cook_string_literal};
