//! Export functionality
//!
//! Provides exporters for the artifacts derived from an element tree:
//! - Mustache XML template
//! - Workato field schema (JSON)

pub mod field_schema;
pub mod template;
pub mod type_mapper;

/// Result of an export operation
#[derive(Debug)]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// Re-export for convenience
pub use field_schema::FieldSchemaExporter;
pub use template::TemplateExporter;
pub use type_mapper::map_xsd_type;
