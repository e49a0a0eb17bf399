//! rustots_diagnostics: Diagnostic messages and collection.
//!
//! Diagnostics carry structured, positioned information about lexical and
//! syntactic irregularities found in the analyzed source. Both the scanner
//! and the parser append to one `DiagnosticCollection` per analysis call.

use rustots_core::text::{LineAndColumn, TextPos};
use serde::Serialize;
use std::fmt;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message template with a code and severity.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g. `L001`, `P001`).
    pub code: &'static str,
    /// The severity of this diagnostic.
    pub severity: Severity,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

impl DiagnosticMessage {
    /// Render the template with the given arguments.
    pub fn format(&self, args: &[&str]) -> String {
        format_message(self.message, args)
    }
}

/// Where a diagnostic points in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    /// 1-based line.
    pub line: u32,
    /// 1-based column in characters.
    pub column: u32,
    /// Length of the offending region in characters.
    pub length: u32,
}

impl Location {
    pub fn new(line: u32, column: u32, length: u32) -> Self {
        Self {
            line,
            column,
            length,
        }
    }

    /// Build a location from a line/column pair.
    pub fn at(position: LineAndColumn, length: u32) -> Self {
        Self::new(position.line, position.column, length)
    }
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    #[serde(rename = "level")]
    pub severity: Severity,
    pub message: String,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Character offset of the start of the offending region.
    #[serde(skip)]
    pub offset: TextPos,
}

impl Diagnostic {
    /// Create a diagnostic from a message template.
    pub fn new(message: &DiagnosticMessage, args: &[&str], offset: TextPos, location: Location) -> Self {
        Self {
            severity: message.severity,
            message: message.format(args),
            location,
            code: Some(message.code.to_string()),
            offset,
        }
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.location.line, self.location.column, self.severity)?;
        if let Some(ref code) = self.code {
            write!(f, " {}", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// The ordered, append-only diagnostic sink for one analysis call.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.count_of(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count_of(Severity::Warning)
    }

    fn count_of(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Stable sort by line, then column.
    ///
    /// Scanner and parser diagnostics are emitted in separate passes; ties
    /// keep their emission order.
    pub fn sort(&mut self) {
        self.diagnostics
            .sort_by_key(|d| (d.location.line, d.location.column));
    }
}

impl<'a> IntoIterator for &'a DiagnosticCollection {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, severity: Severity::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, severity: Severity::Warning, message: $msg }
        };
        ($code:expr, Info, $msg:expr) => {
            DiagnosticMessage { code: $code, severity: Severity::Info, message: $msg }
        };
    }

    // ========================================================================
    // Scanner (L)
    // The rendered message doubles as the token's malformed reason.
    // ========================================================================
    pub const UNTERMINATED_STRING: DiagnosticMessage = diag!("L001", Error, "unterminated string");
    pub const MULTIPLE_DECIMAL_POINTS: DiagnosticMessage = diag!("L002", Error, "number with multiple decimal points ({0})");
    pub const UNTERMINATED_BLOCK_COMMENT: DiagnosticMessage = diag!("L003", Error, "unterminated block comment");
    pub const UNRECOGNIZED_CHARACTER: DiagnosticMessage = diag!("L004", Error, "unrecognized character: '{0}'");

    // ========================================================================
    // Parser (P)
    // ========================================================================
    pub const EXPECTED_0_FOUND_1: DiagnosticMessage = diag!("P001", Error, "expected {0}, found {1}");
    pub const NESTING_TOO_DEEP: DiagnosticMessage = diag!("P002", Error, "nesting exceeds the maximum depth of {0}");
    pub const INVALID_ASSIGNMENT_TARGET: DiagnosticMessage = diag!("P003", Error, "invalid assignment target");
    pub const UNSUPPORTED_STATEMENT: DiagnosticMessage = diag!("P100", Warning, "'{0}' statements are not supported yet");
    pub const EMPTY_STATEMENT: DiagnosticMessage = diag!("P200", Info, "empty statement has no effect");
}
