//! Models module for the SDK
//!
//! Defines the element tree produced by XSD ingestion and the field schema
//! produced by projection.

pub mod element;
pub mod field;

pub use element::{Element, ElementTree};
pub use field::{ContainerKind, FieldKind, FieldSchemaNode};
