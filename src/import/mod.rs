//! Import functionality
//!
//! Provides parsers for turning schema sources into an [`ElementTree`]:
//! - XSD (XML Schema) element declarations
//!
//! [`ElementTree`]: crate::models::ElementTree

pub mod xsd;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("IO error: {0}")]
    IoError(String),
}

// Re-export for convenience
pub use xsd::XsdImporter;
