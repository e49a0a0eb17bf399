//! Rendering analysis diagnostics with source context.
//!
//! Diagnostics locate problems in characters; miette wants byte spans, so
//! the offsets are converted against the analyzed text.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode, SourceSpan};
use rustots_core::text::char_to_byte_offset;
use rustots_diagnostics::{Diagnostic as AnalysisDiagnostic, Severity};

/// A diagnostic ready to be rendered by miette.
#[derive(Debug)]
pub struct SourceDiagnostic {
    pub severity: Severity,
    pub code: Option<String>,
    pub message: String,
    pub src: NamedSource<String>,
    /// Byte span of the offending region.
    pub span: SourceSpan,
}

impl SourceDiagnostic {
    pub fn from_analysis_diagnostic(
        diagnostic: &AnalysisDiagnostic,
        source_name: &str,
        source: &str,
    ) -> Self {
        let start = char_to_byte_offset(source, diagnostic.offset);
        let end = char_to_byte_offset(source, diagnostic.offset + diagnostic.location.length);
        Self {
            severity: diagnostic.severity,
            code: diagnostic.code.clone(),
            message: diagnostic.message.clone(),
            src: NamedSource::new(source_name, source.to_string()),
            span: (start, end - start).into(),
        }
    }

    fn label(&self) -> &'static str {
        match self.severity {
            Severity::Error => "error here",
            Severity::Warning => "warning here",
            Severity::Info => "note",
        }
    }
}

impl fmt::Display for SourceDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SourceDiagnostic {}

impl Diagnostic for SourceDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.code
            .as_ref()
            .map(|code| Box::new(format!("rustots::{}", code)) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
            Severity::Info => miette::Severity::Advice,
        })
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.label().to_string()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Render every diagnostic to stderr.
pub fn report_diagnostics(diagnostics: &[AnalysisDiagnostic], source_name: &str, source: &str) {
    for diagnostic in diagnostics {
        let rendered = SourceDiagnostic::from_analysis_diagnostic(diagnostic, source_name, source);
        eprintln!("{:?}", miette::Report::new(rendered));
    }
}
