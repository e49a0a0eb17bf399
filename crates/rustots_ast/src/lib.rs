//! rustots_ast: Abstract Syntax Tree definitions for the analyzer.
//!
//! The tree is a closed set of owned nodes. Every node records the character
//! range it was parsed from and serializes with a `"type"` tag naming its kind.

pub mod node;
pub mod visitor;

// Re-export key types
pub use node::*;
pub use visitor::AstVisitor;
