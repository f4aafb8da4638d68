//! XSD scalar type to field kind mapping

use crate::models::FieldKind;

/// Prefixes conventionally bound to the XML Schema namespace
const XSD_PREFIXES: [&str; 2] = ["xs", "xsd"];

/// Map an XSD scalar type tag to a field kind
///
/// Built-in types are recognised when unprefixed or prefixed with `xs:` or
/// `xsd:`. Any other prefix names a user-defined type, which maps to
/// [`FieldKind::String`] like unknown or absent types. This function never
/// fails and never yields [`FieldKind::ObjectArray`].
///
/// # Example
///
/// ```rust
/// use xsd_template_sdk::export::type_mapper::map_xsd_type;
/// use xsd_template_sdk::models::FieldKind;
///
/// assert_eq!(map_xsd_type(Some("xs:dateTime")), FieldKind::DateTime);
/// assert_eq!(map_xsd_type(Some("tns:date")), FieldKind::String);
/// assert_eq!(map_xsd_type(None), FieldKind::String);
/// ```
pub fn map_xsd_type(xsd_type: Option<&str>) -> FieldKind {
    let Some(xsd_type) = xsd_type else {
        return FieldKind::String;
    };

    let local_name = match xsd_type.trim().split_once(':') {
        None => xsd_type.trim(),
        Some((prefix, local)) if XSD_PREFIXES.contains(&prefix) => local,
        Some(_) => return FieldKind::String,
    };

    match local_name {
        "dateTime" | "date" | "time" => FieldKind::DateTime,
        "boolean" => FieldKind::Boolean,
        "integer" | "int" | "long" | "short" | "byte" | "nonNegativeInteger"
        | "positiveInteger" | "nonPositiveInteger" | "negativeInteger" | "unsignedLong"
        | "unsignedInt" | "unsignedShort" | "unsignedByte" => FieldKind::Integer,
        "float" | "double" | "decimal" => FieldKind::Number,
        // string, normalizedString, token, anyURI and user-defined types
        _ => FieldKind::String,
    }
}
