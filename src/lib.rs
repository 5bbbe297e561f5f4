pub mod document;
pub mod error;
pub mod parser;
pub mod serializer;

// Re-export the document types for easier access
pub use document::value::{IniValue, TRUE_LITERALS};
pub use document::{IniDocument, Section};

// Re-export error types
pub use error::{IniError, Result};
