//! In-memory INI document
//!
//! An [`IniDocument`] is an ordered table of sections, each holding ordered
//! `key=value` pairs. Values are kept as raw text and only converted by the
//! typed `read`/`write` accessors, using the conversions in [`value`].

mod accessors;
pub mod value;

use std::path::Path;
use std::str::FromStr;

use linked_hash_map::LinkedHashMap;
use serde::Serialize;

use crate::error::{IniError, Result};
use crate::parser;

/// Keys of a single section mapped to their raw values, in insertion order
pub type Section = LinkedHashMap<String, String>;

/// Section/key/value table loaded from INI text
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IniDocument {
    sections: LinkedHashMap<String, Section>,
}

impl IniDocument {
    /// Create an empty document
    pub fn new() -> Self {
        IniDocument {
            sections: LinkedHashMap::new(),
        }
    }

    /// Load and parse the document stored at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        parser::parse_file(path.as_ref())
    }

    /// Parse a document from INI text
    pub fn parse(content: &str) -> Result<Self> {
        parser::parse_str(content)
    }

    /// Check if a section exists
    pub fn section_exists(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Check if a key exists in the given section. False when the section is absent.
    pub fn key_exists(&self, section: &str, key: &str) -> bool {
        self.sections
            .get(section)
            .map(|keys| keys.contains_key(key))
            .unwrap_or(false)
    }

    /// Section names in creation order
    pub fn sections(&self) -> Vec<String> {
        self.sections.keys().cloned().collect()
    }

    /// Key names of a section in insertion order, empty if the section is absent
    pub fn keys(&self, section: &str) -> Vec<String> {
        self.sections
            .get(section)
            .map(|keys| keys.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Key/value pairs of a section in insertion order
    pub fn items(&self, section: &str) -> Vec<(&str, &str)> {
        self.sections
            .get(section)
            .map(|keys| {
                keys.iter()
                    .map(|(key, value)| (key.as_str(), value.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Raw stored text of a key
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|keys| keys.get(key))
            .map(String::as_str)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Create an empty section if it does not exist yet
    pub fn add_section(&mut self, section: &str) -> Result<()> {
        validate_section(section)?;
        self.section_entry(section);
        Ok(())
    }

    /// Store a raw value, creating the section and key as needed.
    ///
    /// Overwriting an existing key keeps its position. Names or values that
    /// would not survive a save and reload are rejected without touching the
    /// document.
    pub fn set(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        validate_section(section)?;
        validate_key(key)?;
        validate_value(value)?;

        let keys = self.section_entry(section);
        match keys.get_mut(key) {
            Some(existing) => *existing = value.to_string(),
            None => {
                keys.insert(key.to_string(), value.to_string());
            }
        }
        Ok(())
    }

    /// Remove a section and all of its keys
    pub fn remove_section(&mut self, section: &str) -> bool {
        self.sections.remove(section).is_some()
    }

    /// Remove a single key, leaving its section in place even if it becomes empty
    pub fn remove_key(&mut self, section: &str, key: &str) -> bool {
        self.sections
            .get_mut(section)
            .map(|keys| keys.remove(key).is_some())
            .unwrap_or(false)
    }

    /// Iterate over sections and their keys in enumeration order
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&String, &Section)> {
        self.sections.iter()
    }

    /// Get or create a section without validating its name.
    /// Re-opening an existing section keeps its original position.
    pub(crate) fn section_entry(&mut self, section: &str) -> &mut Section {
        self.sections
            .entry(section.to_string())
            .or_insert_with(Section::new)
    }
}

impl FromStr for IniDocument {
    type Err = IniError;

    fn from_str(s: &str) -> Result<Self> {
        IniDocument::parse(s)
    }
}

fn has_line_break(s: &str) -> bool {
    s.contains(['\n', '\r'])
}

fn validate_section(section: &str) -> Result<()> {
    if section.is_empty() {
        return Err(IniError::InvalidName("section name is empty".to_string()));
    }
    if has_line_break(section) {
        return Err(IniError::InvalidName(format!(
            "section {section:?} contains a line break"
        )));
    }
    Ok(())
}

fn validate_key(key: &str) -> Result<()> {
    if key.contains('=') {
        return Err(IniError::InvalidName(format!("key {key:?} contains '='")));
    }
    if key.starts_with('[') {
        return Err(IniError::InvalidName(format!("key {key:?} starts with '['")));
    }
    if has_line_break(key) {
        return Err(IniError::InvalidName(format!(
            "key {key:?} contains a line break"
        )));
    }
    Ok(())
}

fn validate_value(value: &str) -> Result<()> {
    if has_line_break(value) {
        return Err(IniError::InvalidName(format!(
            "value {value:?} contains a line break"
        )));
    }
    Ok(())
}
