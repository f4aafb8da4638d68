//! Workato field schema exporter
//!
//! Projects an element tree onto a list of field descriptors. Complex
//! elements become arrays of objects whose properties are keyed as
//! `<enclosing>_<child>`, where `<enclosing>` is the name of the immediately
//! enclosing element only.

use crate::export::type_mapper::map_xsd_type;
use crate::export::{ExportError, ExportResult};
use crate::models::{Element, ElementTree, FieldSchemaNode};

/// Exporter for Workato field schema JSON.
#[derive(Debug, Clone)]
pub struct FieldSchemaExporter {
    /// Pretty-print the JSON output (two-space indent)
    pub pretty: bool,
}

impl Default for FieldSchemaExporter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl FieldSchemaExporter {
    /// Create a new FieldSchemaExporter with pretty-printed output
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter with explicit JSON formatting
    pub fn with_pretty(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Project the tree to one field per top-level element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xsd_template_sdk::export::field_schema::FieldSchemaExporter;
    /// use xsd_template_sdk::models::{Element, ElementTree, FieldKind};
    ///
    /// let tree = ElementTree::new(vec![Element::complex(
    ///     "Customer",
    ///     vec![Element::leaf("Email", Some("xs:string"))],
    /// )]);
    ///
    /// let fields = FieldSchemaExporter::new().project(&tree);
    /// assert_eq!(fields[0].kind, FieldKind::ObjectArray);
    /// assert_eq!(fields[0].properties[0].name, "Customer_Email");
    /// ```
    pub fn project(&self, tree: &ElementTree) -> Vec<FieldSchemaNode> {
        let fields: Vec<FieldSchemaNode> = tree
            .elements
            .iter()
            .map(|element| Self::project_element(element, element.name.clone()))
            .collect();

        tracing::debug!(
            top_level = fields.len(),
            fields = fields.iter().map(FieldSchemaNode::field_count).sum::<usize>(),
            "Projected field schema"
        );
        fields
    }

    /// Project the tree and serialize it as a JSON array (SDK interface).
    pub fn export(&self, tree: &ElementTree) -> Result<ExportResult, ExportError> {
        let fields = self.project(tree);
        Ok(ExportResult {
            content: self.to_json(&fields)?,
            format: "json".to_string(),
        })
    }

    /// Serialize projected fields as a JSON array
    pub fn to_json(&self, fields: &[FieldSchemaNode]) -> Result<String, ExportError> {
        if self.pretty {
            serde_json::to_string_pretty(fields)
        } else {
            serde_json::to_string(fields)
        }
        .map_err(|e| {
            ExportError::SerializationError(format!("Failed to serialize field schema: {}", e))
        })
    }

    fn project_element(element: &Element, key: String) -> FieldSchemaNode {
        if element.is_complex() {
            FieldSchemaNode::object_array(
                key,
                Self::project_children(&element.children, &element.name),
            )
        } else {
            FieldSchemaNode::scalar(key, map_xsd_type(element.element_type.as_deref()))
        }
    }

    fn project_children(children: &[Element], enclosing: &str) -> Vec<FieldSchemaNode> {
        children
            .iter()
            .map(|child| {
                let key = if enclosing.is_empty() {
                    child.name.clone()
                } else {
                    format!("{}_{}", enclosing, child.name)
                };
                // Grandchildren are keyed by `child.name`, not by `key`.
                Self::project_element(child, key)
            })
            .collect()
    }
}
