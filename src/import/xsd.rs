//! XSD importer
//!
//! Reads XML Schema documents into an [`ElementTree`]. Only element
//! declarations are collected: top-level `element`s directly under the
//! document root, and nested `element`s reached through
//! `complexType > sequence | all | choice`. Type references, includes and
//! attributes are not followed.

use std::fmt;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::ImportError;
use crate::models::{Element, ElementTree};

const ELEMENT_TAG: &str = "element";
const COMPLEX_TYPE_TAG: &str = "complexType";
const COMPOSITOR_TAGS: [&str; 3] = ["sequence", "all", "choice"];

/// A tag currently open in the reader, with the element it declares (if any)
struct OpenTag {
    local_name: String,
    element: Option<Element>,
}

/// Where a declared element is attached once it is complete
enum Slot {
    TopLevel,
    ChildOf(usize),
}

/// XSD Importer
///
/// Imports XSD content into an [`ElementTree`].
///
/// # Example
///
/// ```rust
/// use xsd_template_sdk::import::XsdImporter;
///
/// let xsd = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
///   <xs:element name="Customer">
///     <xs:complexType>
///       <xs:sequence>
///         <xs:element name="Email" type="xs:string"/>
///       </xs:sequence>
///     </xs:complexType>
///   </xs:element>
/// </xs:schema>"#;
///
/// let tree = XsdImporter::new().import(xsd).unwrap();
/// assert_eq!(tree.elements[0].children[0].name, "Email");
/// ```
#[derive(Debug, Default)]
pub struct XsdImporter;

impl XsdImporter {
    /// Create a new XsdImporter
    pub fn new() -> Self {
        Self
    }

    /// Parse XSD content into an element tree
    ///
    /// # Arguments
    ///
    /// * `xsd_content` - The XSD document as a string.
    ///
    /// # Returns
    ///
    /// The top-level element declarations with their nested children, or an
    /// `ImportError` if the document is not well-formed or declares an
    /// element with neither `name` nor `ref`.
    pub fn import(&self, xsd_content: &str) -> Result<ElementTree, ImportError> {
        let mut reader = Reader::from_str(xsd_content);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<OpenTag> = Vec::new();
        let mut top_level: Vec<Element> = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    let local_name = local_name_of(e);
                    let element = if local_name == ELEMENT_TAG && parent_slot(&stack).is_some() {
                        Some(element_from_tag(e, reader.buffer_position())?)
                    } else {
                        None
                    };
                    stack.push(OpenTag {
                        local_name,
                        element,
                    });
                }
                Ok(Event::Empty(ref e)) => {
                    if local_name_of(e) == ELEMENT_TAG && parent_slot(&stack).is_some() {
                        let element = element_from_tag(e, reader.buffer_position())?;
                        attach(&mut stack, &mut top_level, element);
                    }
                }
                Ok(Event::End(_)) => {
                    if let Some(OpenTag {
                        element: Some(element),
                        ..
                    }) = stack.pop()
                    {
                        attach(&mut stack, &mut top_level, element);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ImportError::ParseError(format!(
                        "XSD parsing error at position {}: {}",
                        reader.error_position(),
                        e
                    )));
                }
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(ImportError::ParseError(format!(
                "Unexpected end of document: <{}> is not closed",
                open.local_name
            )));
        }

        let tree = ElementTree::new(top_level);
        if tree.is_empty() {
            tracing::warn!("XSD document does not declare any top-level elements");
        } else {
            tracing::debug!(
                top_level = tree.elements.len(),
                elements = tree.node_count(),
                "Parsed XSD element tree"
            );
        }
        Ok(tree)
    }

    /// Read and parse an XSD file
    pub fn import_file(&self, path: &Path) -> Result<ElementTree, ImportError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ImportError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        self.import(&content)
    }
}

fn local_name_of(tag: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(tag.local_name().as_ref()).to_string()
}

/// Slot for an `element` opened at the current stack position, or `None`
/// when the position is not one that declares data elements.
fn parent_slot(stack: &[OpenTag]) -> Option<Slot> {
    match stack {
        [_root] => Some(Slot::TopLevel),
        [.., owner, complex_type, compositor]
            if owner.element.is_some()
                && complex_type.local_name == COMPLEX_TYPE_TAG
                && COMPOSITOR_TAGS.contains(&compositor.local_name.as_str()) =>
        {
            Some(Slot::ChildOf(stack.len() - 3))
        }
        _ => None,
    }
}

fn attach(stack: &mut [OpenTag], top_level: &mut Vec<Element>, element: Element) {
    match parent_slot(stack) {
        Some(Slot::TopLevel) => top_level.push(element),
        Some(Slot::ChildOf(index)) => {
            if let Some(owner) = stack[index].element.as_mut() {
                owner.children.push(element);
            }
        }
        None => {}
    }
}

fn element_from_tag(
    tag: &BytesStart<'_>,
    position: impl fmt::Display,
) -> Result<Element, ImportError> {
    let mut name = None;
    let mut reference = None;
    let mut element_type = None;

    for attr in tag.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| {
                ImportError::ParseError(format!(
                    "Invalid value for attribute '{}' at position {}: {}",
                    key, position, e
                ))
            })?
            .into_owned();
        match key.as_str() {
            "name" => name = Some(value),
            "ref" => reference = Some(value),
            "type" => element_type = Some(value),
            _ => {}
        }
    }

    // A ref contributes only its local name; the referenced declaration is not resolved.
    let name = name
        .or_else(|| reference.map(|r| strip_prefix(&r).to_string()))
        .filter(|n| !n.is_empty())
        .ok_or_else(|| {
            ImportError::ValidationError(format!(
                "Element declaration at position {} has neither a name nor a ref attribute",
                position
            ))
        })?;

    Ok(Element {
        name,
        element_type,
        children: Vec::new(),
    })
}

fn strip_prefix(qualified: &str) -> &str {
    qualified
        .rsplit_once(':')
        .map_or(qualified, |(_, local)| local)
}
