//! Import module tests

use xsd_template_sdk::import::{ImportError, XsdImporter};
use xsd_template_sdk::models::Element;

const PURCHASE_ORDER_XSD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- Purchase order schema -->
<xsd:schema xmlns:xsd="http://www.w3.org/2001/XMLSchema"
            targetNamespace="urn:example:po"
            elementFormDefault="qualified">
  <xsd:annotation>
    <xsd:documentation>Purchase orders</xsd:documentation>
  </xsd:annotation>
  <xsd:element name="PurchaseOrder">
    <xsd:complexType>
      <xsd:sequence>
        <xsd:element name="OrderDate" type="xsd:dateTime"/>
        <xsd:element name="ShipTo">
          <xsd:complexType>
            <xsd:sequence>
              <xsd:element name="Name" type="xsd:string"/>
              <xsd:element name="Street" type="xsd:string"/>
            </xsd:sequence>
            <xsd:attribute name="country" type="xsd:NMTOKEN"/>
          </xsd:complexType>
        </xsd:element>
        <xsd:element name="Lines">
          <xsd:complexType>
            <xsd:sequence>
              <xsd:element name="Line" maxOccurs="unbounded">
                <xsd:complexType>
                  <xsd:sequence>
                    <xsd:element name="Sku" type="xsd:string"/>
                    <xsd:element name="Quantity" type="xsd:positiveInteger"/>
                    <xsd:element name="Price" type="xsd:decimal"/>
                  </xsd:sequence>
                </xsd:complexType>
              </xsd:element>
            </xsd:sequence>
          </xsd:complexType>
        </xsd:element>
      </xsd:sequence>
    </xsd:complexType>
  </xsd:element>
  <xsd:element name="Comment" type="xsd:string"/>
</xsd:schema>
"#;

mod xsd_import_tests {
    use super::*;

    #[test]
    fn test_parse_purchase_order() {
        let tree = XsdImporter::new().import(PURCHASE_ORDER_XSD).unwrap();

        let names: Vec<&str> = tree.elements.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["PurchaseOrder", "Comment"]);
        assert_eq!(tree.node_count(), 11);

        let order = &tree.elements[0];
        let children: Vec<&str> = order.children.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(children, vec!["OrderDate", "ShipTo", "Lines"]);

        let line = &order.children[2].children[0];
        assert_eq!(line.name, "Line");
        assert_eq!(line.children.len(), 3);
        assert_eq!(
            line.children[1],
            Element::leaf("Quantity", Some("xsd:positiveInteger"))
        );
    }

    #[test]
    fn test_attributes_are_not_elements() {
        let tree = XsdImporter::new().import(PURCHASE_ORDER_XSD).unwrap();
        let ship_to = &tree.elements[0].children[1];
        assert_eq!(ship_to.children.len(), 2);
        assert!(ship_to.children.iter().all(|c| c.name != "country"));
    }

    #[test]
    fn test_named_complex_types_are_not_resolved() {
        let xsd = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
          <xs:complexType name="AddressType">
            <xs:sequence>
              <xs:element name="City" type="xs:string"/>
            </xs:sequence>
          </xs:complexType>
          <xs:element name="Address" type="AddressType"/>
        </xs:schema>"#;
        let tree = XsdImporter::new().import(xsd).unwrap();
        assert_eq!(tree.elements, vec![Element::leaf("Address", Some("AddressType"))]);
    }

    #[test]
    fn test_invalid_xml_returns_error() {
        let result = XsdImporter::new().import("<xs:schema><xs:element name=\"A\"></xs:sequence>");
        assert!(matches!(result, Err(ImportError::ParseError(_))));
    }

    #[test]
    fn test_import_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("po.xsd");
        std::fs::write(&path, PURCHASE_ORDER_XSD).unwrap();

        let tree = XsdImporter::new().import_file(&path).unwrap();
        assert_eq!(tree.elements.len(), 2);
    }
}
