use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading, querying, mutating or saving a document
#[derive(Error, Debug)]
pub enum IniError {
    #[error("Document not found: {}", path.display())]
    DocumentNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed document at line {line}: {reason}")]
    MalformedDocument { line: usize, reason: String },

    #[error("Cannot read [{section}] {key}={value:?} as {target}")]
    ConversionError {
        section: String,
        key: String,
        value: String,
        target: &'static str,
    },

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("I/O error on {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IniError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        IniError::MalformedDocument {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IniError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message() {
        let err = IniError::malformed(3, "entry outside of any section");
        assert_eq!(
            err.to_string(),
            "Malformed document at line 3: entry outside of any section"
        );
    }

    #[test]
    fn test_not_found_keeps_source() {
        use std::error::Error as _;

        let err = IniError::DocumentNotFound {
            path: PathBuf::from("missing.ini"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "Document not found: missing.ini");
        assert!(err.source().is_some());
    }
}
