//! INI text parser
//!
//! The dialect is deliberately small:
//!
//! * lines that are empty after trimming are skipped
//! * `[name]` opens a section, the name being everything between the first
//!   `[` and the last `]`; reopening a section appends to it
//! * any other line is `key=value`, split at the first `=`
//! * a trailing `\r` is stripped, so CRLF files load the same as LF ones
//!
//! There are no comments, escapes or multi-line values.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};

use crate::document::IniDocument;
use crate::error::{IniError, Result};

/// A single classified input line
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Section(&'a str),
    Entry { key: &'a str, value: &'a str },
}

fn classify(line_no: usize, line: &str) -> Result<Line<'_>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Ok(Line::Blank);
    }

    if let Some(rest) = line.strip_prefix('[') {
        let end = rest
            .rfind(']')
            .ok_or_else(|| IniError::malformed(line_no, "section header has no closing ']'"))?;
        let name = &rest[..end];
        if name.is_empty() {
            return Err(IniError::malformed(line_no, "section name is empty"));
        }
        return Ok(Line::Section(name));
    }

    match line.split_once('=') {
        Some((key, value)) => Ok(Line::Entry { key, value }),
        None => Err(IniError::malformed(
            line_no,
            format!("expected key=value, found {line:?}"),
        )),
    }
}

/// Parse INI text into a document
pub fn parse_str(content: &str) -> Result<IniDocument> {
    let mut doc = IniDocument::new();
    let mut current: Option<&str> = None;

    for (idx, raw) in content.split('\n').enumerate() {
        let line_no = idx + 1;
        match classify(line_no, raw)? {
            Line::Blank => {}
            Line::Section(name) => {
                debug!("line {}: section [{}]", line_no, name);
                doc.section_entry(name);
                current = Some(name);
            }
            Line::Entry { key, value } => {
                let section = current.ok_or_else(|| {
                    IniError::malformed(line_no, format!("key {key:?} appears before any section"))
                })?;
                debug!("line {}: [{}] {}={}", line_no, section, key, value);

                let keys = doc.section_entry(section);
                if keys.contains_key(key) {
                    warn!(
                        "line {}: duplicate key {:?} in [{}] ignored",
                        line_no, key, section
                    );
                } else {
                    keys.insert(key.to_string(), value.to_string());
                }
            }
        }
    }

    Ok(doc)
}

/// Open and parse the file at `path`
pub fn parse_file(path: &Path) -> Result<IniDocument> {
    let mut file = File::open(path).map_err(|source| IniError::DocumentNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|source| IniError::IoError {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("loading {} ({} bytes)", path.display(), content.len());
    parse_str(&content)
}
