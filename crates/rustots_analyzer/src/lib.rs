//! rustots_analyzer: Analysis orchestration.
//!
//! Runs the scanner and the parser over one source text and packages the
//! tokens, the AST and the sorted diagnostics into a single result. Also
//! owns everything around that call: options, input acquisition, config
//! files, statistics and multi-file analysis.

pub mod config;
pub mod error;
pub mod options;
pub mod source;
pub mod stats;

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rustots_ast::Program;
use rustots_core::InternalError;
use rustots_diagnostics::{Diagnostic, DiagnosticCollection};
use rustots_parser::parse;
use rustots_scanner::{tokenize, Token};
use serde::Serialize;
use tracing::{debug, warn};

pub use config::{load_config, parse_config, AnalyzerConfig};
pub use error::{AnalyzeError, ConfigError, SourceError};
pub use options::{parse_token_kinds, AnalysisMode, AnalysisOptions, TokenFilter};
pub use source::{load_source, SourceInput};
pub use stats::{AstStatistics, TokenStatistics};

/// The result of analyzing one source text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    /// Absent in lexical mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ast: Option<Program>,
    /// Scanner and parser diagnostics in source order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn token_statistics(&self) -> TokenStatistics {
        TokenStatistics::collect(&self.tokens)
    }

    pub fn ast_statistics(&self) -> Option<AstStatistics> {
        self.ast.as_ref().map(AstStatistics::collect)
    }
}

/// Analyze `source` with the default options: full analysis, every token.
pub fn analyze(source: &str) -> Result<Analysis, InternalError> {
    analyze_with(source, &AnalysisOptions::default())
}

/// Analyze `source`.
///
/// Never fails on account of the source text: lexical and syntax problems
/// come back as diagnostics. `Err` means the analyzer broke one of its own
/// invariants.
#[tracing::instrument(skip_all, fields(source_len = source.len(), mode = ?options.mode))]
pub fn analyze_with(source: &str, options: &AnalysisOptions) -> Result<Analysis, InternalError> {
    let mut diagnostics = DiagnosticCollection::new();

    let tokens = tokenize(source, &mut diagnostics)?;
    let ast = match options.mode {
        AnalysisMode::Full => Some(parse(&tokens, &mut diagnostics)?),
        AnalysisMode::Lexical => None,
    };
    diagnostics.sort();

    // Filtering happens last so it can never change what the parser saw.
    let scanned = tokens.len();
    let tokens = options.filter.apply(tokens);
    debug!(
        scanned,
        emitted = tokens.len(),
        diagnostics = diagnostics.len(),
        "analysis complete"
    );

    Ok(Analysis {
        tokens,
        ast,
        diagnostics: diagnostics.into_vec(),
    })
}

/// The analysis of one file, as emitted for multi-file runs.
#[derive(Debug, Clone, Serialize)]
pub struct FileAnalysis {
    pub file: String,
    #[serde(flatten)]
    pub analysis: Analysis,
    /// The analyzed text, kept for rendering diagnostics.
    #[serde(skip)]
    pub source: String,
}

/// Load and analyze a single file.
pub fn analyze_file(path: &Path, options: &AnalysisOptions) -> Result<FileAnalysis, AnalyzeError> {
    let source = load_source(&SourceInput::File(path.to_path_buf()))?;
    let analysis = analyze_with(&source, options)?;
    Ok(FileAnalysis {
        file: path.display().to_string(),
        analysis,
        source,
    })
}

/// Stack size for analysis workers; the parser may recurse up to
/// `MAX_RECURSION_DEPTH` levels.
const WORKER_STACK_SIZE: usize = 16 * 1024 * 1024;

/// Analyze several files in parallel.
///
/// Each file gets its own pipeline; results come back in input order and a
/// failure on one file does not affect the others.
pub fn analyze_files(
    paths: &[PathBuf],
    options: &AnalysisOptions,
) -> Vec<Result<FileAnalysis, AnalyzeError>> {
    let run = || -> Vec<Result<FileAnalysis, AnalyzeError>> {
        paths
            .par_iter()
            .map(|path| analyze_file(path, options))
            .collect()
    };
    match rayon::ThreadPoolBuilder::new()
        .stack_size(WORKER_STACK_SIZE)
        .build()
    {
        Ok(pool) => pool.install(run),
        Err(err) => {
            warn!(error = %err, "could not build the analysis thread pool, using the global one");
            run()
        }
    }
}
