//! JSON configuration files.
//!
//! ```json
//! {
//!   "mode": "lexical",
//!   "tokenKinds": ["keyword", "identifier"],
//!   "excludeWhitespace": true,
//!   "onlyMalformed": false,
//!   "stats": true
//! }
//! ```
//!
//! Every key is optional. Command-line flags take precedence over the file.

use std::fs;
use std::path::Path;

use rustots_scanner::TokenKind;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::options::{AnalysisMode, AnalysisOptions, TokenFilter};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalyzerConfig {
    pub mode: Option<AnalysisMode>,
    pub token_kinds: Option<Vec<String>>,
    pub exclude_whitespace: Option<bool>,
    pub only_malformed: Option<bool>,
    /// Print statistics alongside the result.
    pub stats: Option<bool>,
}

impl AnalyzerConfig {
    /// Resolve into analysis options, validating the token kind names.
    pub fn to_options(&self) -> Result<AnalysisOptions, ConfigError> {
        let kinds = match self.token_kinds {
            Some(ref names) => Some(
                names
                    .iter()
                    .map(|name| name.parse::<TokenKind>())
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            None => None,
        };
        Ok(AnalysisOptions {
            mode: self.mode.unwrap_or_default(),
            filter: TokenFilter {
                kinds,
                exclude_whitespace: self.exclude_whitespace.unwrap_or(false),
                only_malformed: self.only_malformed.unwrap_or(false),
            },
        })
    }
}

/// Parse a configuration from JSON text. `path` only labels errors.
pub fn parse_config(content: &str, path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    serde_json::from_str(content).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a configuration file.
pub fn load_config(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, path)
}
