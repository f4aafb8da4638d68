//! XSD Template SDK - generate integration artifacts from XML Schemas
//!
//! Provides:
//! - XSD ingestion into an element tree
//! - Mustache XML template rendering
//! - Workato field schema projection
//! - File conversion with configurable output naming
//! - The `xsd-template` command-line interface (feature `cli`)

pub mod cli;
pub mod config;
pub mod convert;
pub mod export;
pub mod import;
pub mod models;

// Re-export commonly used types
pub use config::{ConfigError, GeneratorConfig, GeneratorConfigBuilder};
pub use convert::{Artifacts, ConversionOutput, ConvertError, Converter, OutputPaths};
pub use export::{
    ExportError, ExportResult, FieldSchemaExporter, TemplateExporter, map_xsd_type,
};
pub use import::{ImportError, XsdImporter};

// Re-export models
pub use models::{ContainerKind, Element, ElementTree, FieldKind, FieldSchemaNode};
