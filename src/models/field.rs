//! Field schema model (Workato-style field descriptors)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a field in the generated schema
///
/// `ObjectArray` is written as `"array"` on the wire; the element kind is
/// carried separately in [`FieldSchemaNode::of`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    String,
    DateTime,
    Boolean,
    Integer,
    Number,
    #[serde(rename = "array")]
    ObjectArray,
}

impl FieldKind {
    /// Value written to the `type` key
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::DateTime => "date_time",
            FieldKind::Boolean => "boolean",
            FieldKind::Integer => "integer",
            FieldKind::Number => "number",
            FieldKind::ObjectArray => "array",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element kind of an array field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    Object,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Object => f.write_str("object"),
        }
    }
}

/// One field of the generated schema
///
/// `of` is set exactly when `kind` is [`FieldKind::ObjectArray`], and
/// `properties` is only populated for such fields. Use [`FieldSchemaNode::scalar`]
/// and [`FieldSchemaNode::object_array`] to keep that pairing intact.
///
/// # Example
///
/// ```rust
/// use xsd_template_sdk::models::{FieldKind, FieldSchemaNode};
///
/// let email = FieldSchemaNode::scalar("Customer_Email", FieldKind::String);
/// let customer = FieldSchemaNode::object_array("Customer", vec![email]);
/// assert_eq!(customer.label, "Customer");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldSchemaNode {
    /// Externally visible key
    pub name: String,
    /// Display label, mirrors `name`
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub of: Option<ContainerKind>,
    /// Always true; required-ness is not derived from the source schema
    #[serde(default = "default_true")]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<FieldSchemaNode>,
}

fn default_true() -> bool {
    true
}

impl FieldSchemaNode {
    /// Create a field holding a single scalar value
    pub fn scalar(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            kind,
            of: None,
            optional: true,
            properties: Vec::new(),
        }
    }

    /// Create an array-of-objects field with nested properties
    pub fn object_array(name: impl Into<String>, properties: Vec<FieldSchemaNode>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            kind: FieldKind::ObjectArray,
            of: Some(ContainerKind::Object),
            optional: true,
            properties,
        }
    }

    /// Look up a direct property by key
    pub fn property(&self, name: &str) -> Option<&FieldSchemaNode> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Number of fields in this subtree, including `self`
    pub fn field_count(&self) -> usize {
        1 + self
            .properties
            .iter()
            .map(FieldSchemaNode::field_count)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_serialization_omits_container_keys() {
        let node = FieldSchemaNode::scalar("Customer_Email", FieldKind::String);
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Customer_Email",
                "label": "Customer_Email",
                "type": "string",
                "optional": true
            })
        );
    }

    #[test]
    fn test_object_array_serialization() {
        let node = FieldSchemaNode::object_array(
            "Customer",
            vec![FieldSchemaNode::scalar("Customer_Since", FieldKind::DateTime)],
        );
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], "array");
        assert_eq!(value["of"], "object");
        assert_eq!(value["properties"][0]["type"], "date_time");
    }

    #[test]
    fn test_kind_wire_names() {
        for kind in [
            FieldKind::String,
            FieldKind::DateTime,
            FieldKind::Boolean,
            FieldKind::Integer,
            FieldKind::Number,
            FieldKind::ObjectArray,
        ] {
            let value = serde_json::to_value(kind).unwrap();
            assert_eq!(value, json!(kind.as_str()));
        }
    }

    #[test]
    fn test_field_count() {
        let node = FieldSchemaNode::object_array(
            "Order",
            vec![FieldSchemaNode::object_array(
                "Order_Items",
                vec![FieldSchemaNode::scalar("Items_Sku", FieldKind::String)],
            )],
        );
        assert_eq!(node.field_count(), 3);
        assert!(node.property("Order_Items").is_some());
        assert!(node.property("Items_Sku").is_none());
    }
}
