//! Errors that stop an analysis before or outside the pipeline.
//!
//! Problems in the analyzed text are diagnostics, never one of these.

use std::io;
use std::path::PathBuf;

use rustots_core::InternalError;
use rustots_scanner::UnknownTokenKind;
use thiserror::Error;

/// The source text could not be obtained.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("'{}' is not valid UTF-8 text", path.display())]
    InvalidUtf8 { path: PathBuf },
}

/// A configuration file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    UnknownTokenKind(#[from] UnknownTokenKind),
}

/// Failure to analyze one file.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("internal analyzer error: {0}")]
    Internal(#[from] InternalError),
}

impl AnalyzeError {
    /// Whether this is a defect in the analyzer rather than a problem with its input.
    pub fn is_internal(&self) -> bool {
        matches!(self, AnalyzeError::Internal(_))
    }
}
