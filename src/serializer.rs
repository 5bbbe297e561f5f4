//! Rendering a document back to INI text
//!
//! Every section is written as a `[name]` header followed by its `key=value`
//! lines and a blank separator line, the last section included.

use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;

use crate::document::IniDocument;
use crate::error::{IniError, Result};

impl fmt::Display for IniDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (section, keys) in self.iter() {
            writeln!(f, "[{}]", section)?;
            for (key, value) in keys.iter() {
                writeln!(f, "{}={}", key, value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl IniDocument {
    /// Export the document as INI text
    pub fn to_ini_string(&self) -> String {
        self.to_string()
    }

    /// Write the document to `path`, replacing any existing file.
    ///
    /// A failure leaves the in-memory document untouched.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_ini_string();
        fs::write(path, &content).map_err(|source| IniError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("saved {} sections to {}", self.section_count(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_layout() {
        let mut doc = IniDocument::new();
        doc.set("general", "windowWidth", "1080").unwrap();
        doc.set("player", "name", "John Doe").unwrap();
        doc.write("newSection", "value", 137i32).unwrap();

        assert_eq!(
            doc.to_ini_string(),
            "[general]\nwindowWidth=1080\n\n[player]\nname=John Doe\n\n[newSection]\nvalue=137\n\n"
        );
    }

    #[test]
    fn test_render_empty_section() {
        let mut doc = IniDocument::new();
        doc.add_section("empty").unwrap();
        assert_eq!(doc.to_ini_string(), "[empty]\n\n");
    }

    #[test]
    fn test_render_empty_document() {
        assert_eq!(IniDocument::new().to_ini_string(), "");
    }

    #[test]
    fn test_crlf_input_renders_lf() {
        let doc = IniDocument::parse("[s]\r\nk=v\r\n").unwrap();
        assert_eq!(doc.to_ini_string(), "[s]\nk=v\n\n");
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let doc = IniDocument::parse("[s]\nk=v\n").unwrap();
        let err = doc.save("/definitely/not/here/out.ini").unwrap_err();
        assert!(matches!(err, IniError::IoError { .. }));
        assert_eq!(doc.get("s", "k"), Some("v"));
    }
}
