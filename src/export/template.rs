//! Mustache template exporter
//!
//! Renders an element tree as an XML document template. Complex elements
//! become `{{#section}}` blocks and leaf elements become `{{placeholder}}`
//! tokens keyed by the name of their immediately enclosing element.

use crate::export::{ExportError, ExportResult};
use crate::models::{Element, ElementTree};

/// First line of every generated template
pub const TEMPLATE_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Exporter for Mustache XML templates.
#[derive(Debug, Default)]
pub struct TemplateExporter;

impl TemplateExporter {
    /// Create a new TemplateExporter
    pub fn new() -> Self {
        Self
    }

    /// Render the template for an element tree.
    ///
    /// The first top-level element anchors the document: every top-level
    /// element is rendered inside its tag pair, and the whole body is wrapped
    /// in a section named after it when it has children.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xsd_template_sdk::export::template::TemplateExporter;
    /// use xsd_template_sdk::models::{Element, ElementTree};
    ///
    /// let tree = ElementTree::new(vec![Element::complex(
    ///     "Customer",
    ///     vec![Element::leaf("Email", Some("xs:string"))],
    /// )]);
    ///
    /// let template = TemplateExporter::new().render(&tree);
    /// assert!(template.contains("<Email>{{Customer_Email}}</Email>\n"));
    /// ```
    pub fn render(&self, tree: &ElementTree) -> String {
        let mut template = String::from(TEMPLATE_HEADER);

        let Some(root) = tree.root() else {
            return template;
        };

        if tree.elements.len() > 1 {
            tracing::warn!(
                root = %root.name,
                top_level = tree.elements.len(),
                "Multiple top-level elements are rendered inside the first element"
            );
        }

        if root.is_complex() {
            template.push_str(&format!("{{{{#{}}}}}\n", root.name));
        }
        template.push_str(&format!("<{}>\n", root.name));

        for element in &tree.elements {
            Self::render_element(&mut template, element, "");
        }

        template.push_str(&format!("</{}>\n", root.name));
        if root.is_complex() {
            template.push_str(&format!("{{{{/{}}}}}\n", root.name));
        }

        template
    }

    /// Render a tree to an `ExportResult` (SDK interface).
    pub fn export(&self, tree: &ElementTree) -> Result<ExportResult, ExportError> {
        Ok(ExportResult {
            content: self.render(tree),
            format: "template".to_string(),
        })
    }

    /// Render the children of `element`, wrapped in its own section when it
    /// sits inside `enclosing`.
    fn render_element(template: &mut String, element: &Element, enclosing: &str) {
        let section = (!enclosing.is_empty()).then(|| format!("{}_{}", enclosing, element.name));

        if let Some(section) = &section {
            template.push_str(&format!("{{{{#{}}}}}\n", section));
            template.push_str(&format!("<{}>\n", element.name));
        }

        for child in &element.children {
            if child.is_complex() {
                Self::render_element(template, child, &element.name);
            } else {
                template.push_str(&format!(
                    "<{child}>{{{{{parent}_{child}}}}}</{child}>\n",
                    child = child.name,
                    parent = element.name
                ));
            }
        }

        if let Some(section) = &section {
            template.push_str(&format!("</{}>\n", element.name));
            template.push_str(&format!("{{{{/{}}}}}\n", section));
        }
    }
}
