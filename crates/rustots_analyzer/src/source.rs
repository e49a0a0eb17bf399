//! Input acquisition.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use tracing::debug;

use crate::error::SourceError;

/// Where the source text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    File(PathBuf),
    Stdin,
}

impl SourceInput {
    /// Display name used in output and rendered diagnostics.
    pub fn name(&self) -> String {
        match self {
            SourceInput::File(path) => path.display().to_string(),
            SourceInput::Stdin => "<stdin>".to_string(),
        }
    }
}

/// Read the whole input as text.
pub fn load_source(input: &SourceInput) -> Result<String, SourceError> {
    let text = match input {
        SourceInput::File(path) => {
            let bytes = fs::read(path).map_err(|source| SourceError::Io {
                path: path.clone(),
                source,
            })?;
            String::from_utf8(bytes)
                .map_err(|_| SourceError::InvalidUtf8 { path: path.clone() })?
        }
        SourceInput::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(SourceError::Stdin)?;
            buffer
        }
    };
    debug!(input = %input.name(), chars = text.chars().count(), "loaded source");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("rustots-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_file() {
        let path = temp_file("load.ts", "let x = 1;".as_bytes());
        let text = load_source(&SourceInput::File(path.clone())).unwrap();
        assert_eq!(text, "let x = 1;");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let path = PathBuf::from("/definitely/not/here.ts");
        let err = load_source(&SourceInput::File(path.clone())).unwrap_err();
        assert!(matches!(err, SourceError::Io { path: p, .. } if p == path));
    }

    #[test]
    fn test_invalid_utf8_file() {
        let path = temp_file("binary.ts", &[0x66, 0xff, 0xfe, 0x00]);
        let err = load_source(&SourceInput::File(path.clone())).unwrap_err();
        assert!(matches!(err, SourceError::InvalidUtf8 { .. }));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_input_names() {
        assert_eq!(SourceInput::Stdin.name(), "<stdin>");
        assert_eq!(SourceInput::File(PathBuf::from("a/b.ts")).name(), "a/b.ts");
    }
}
