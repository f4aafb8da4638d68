//! Element tree model for ingested XSD schemas

use serde::{Deserialize, Serialize};

/// A node of the source schema tree
///
/// Leaf elements carry an optional scalar type tag (e.g. `xs:string`) and no
/// children. Complex elements carry their nested elements in source order.
///
/// # Example
///
/// ```rust
/// use xsd_template_sdk::models::Element;
///
/// let customer = Element::complex(
///     "Customer",
///     vec![Element::leaf("Email", Some("xs:string"))],
/// );
/// assert!(customer.is_complex());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Element {
    /// Element name, unique among its siblings
    pub name: String,
    /// Scalar type tag as written in the source, absent for container types
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,
    /// Nested elements in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element without children
    pub fn leaf(name: impl Into<String>, element_type: Option<&str>) -> Self {
        Self {
            name: name.into(),
            element_type: element_type.map(str::to_string),
            children: Vec::new(),
        }
    }

    /// Create a container element with the given children
    pub fn complex(name: impl Into<String>, children: Vec<Element>) -> Self {
        Self {
            name: name.into(),
            element_type: None,
            children,
        }
    }

    /// Whether the element has nested elements
    pub fn is_complex(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of elements in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Element::node_count).sum::<usize>()
    }
}

/// The parsed top-level elements of a schema, in source order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElementTree {
    pub elements: Vec<Element>,
}

impl ElementTree {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// First top-level element, which anchors the generated template
    pub fn root(&self) -> Option<&Element> {
        self.elements.first()
    }

    /// Total number of elements across all top-level subtrees
    pub fn node_count(&self) -> usize {
        self.elements.iter().map(Element::node_count).sum()
    }
}
