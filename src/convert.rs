//! XSD to template/field schema conversion
//!
//! Ties ingestion and both exporters together, and derives the output file
//! names for an input schema.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::GeneratorConfig;
use crate::export::{ExportError, FieldSchemaExporter, TemplateExporter};
use crate::import::{ImportError, XsdImporter};
use crate::models::{ElementTree, FieldSchemaNode};

const XSD_EXTENSION: &str = ".xsd";

/// Errors that can occur during conversion
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] ExportError),

    /// Failed to create the output directory or write an artifact
    #[error("Failed to write {path}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input path: {0}")]
    InvalidPath(String),
}

/// Both generated artifacts for one schema, plus summary counts
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub template: String,
    pub field_schema: String,
    /// Number of top-level elements in the schema
    pub top_level: usize,
    /// Number of elements across the whole tree
    pub elements: usize,
    /// Top-level fields of the projected schema
    pub fields: Vec<FieldSchemaNode>,
}

/// Output locations for one input schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub template: PathBuf,
    pub field_schema: PathBuf,
}

/// Result of converting a schema file
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    pub artifacts: Artifacts,
    pub paths: OutputPaths,
}

/// Converts XSD documents into a Mustache template and a Workato field schema
#[derive(Debug, Default)]
pub struct Converter {
    config: GeneratorConfig,
    importer: XsdImporter,
    template_exporter: TemplateExporter,
    schema_exporter: FieldSchemaExporter,
}

impl Converter {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            schema_exporter: FieldSchemaExporter::with_pretty(config.pretty_json),
            config,
            importer: XsdImporter::new(),
            template_exporter: TemplateExporter::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Convert XSD content in memory
    pub fn convert_str(&self, xsd_content: &str) -> Result<Artifacts, ConvertError> {
        let tree = self.importer.import(xsd_content)?;
        self.generate(&tree)
    }

    /// Convert an XSD file in memory, without writing anything
    pub fn convert_path(&self, input: &Path) -> Result<Artifacts, ConvertError> {
        let tree = self.importer.import_file(input)?;
        self.generate(&tree)
    }

    /// Convert an XSD file and write both artifacts
    ///
    /// The template is written to `<base>.<template_extension>` and the field
    /// schema to `<base><schema_suffix>`; see [`Converter::output_paths`].
    pub fn convert_file(&self, input: &Path) -> Result<ConversionOutput, ConvertError> {
        let paths = self.output_paths(input)?;
        let artifacts = self.convert_path(input)?;

        self.write_artifacts(&artifacts, &paths)?;
        Ok(ConversionOutput { artifacts, paths })
    }

    fn generate(&self, tree: &ElementTree) -> Result<Artifacts, ConvertError> {
        let template = self.template_exporter.render(tree);
        let fields = self.schema_exporter.project(tree);
        let field_schema = self.schema_exporter.to_json(&fields)?;

        Ok(Artifacts {
            template,
            field_schema,
            top_level: tree.elements.len(),
            elements: tree.node_count(),
            fields,
        })
    }

    /// Write generated artifacts to the given paths, creating parent
    /// directories as needed
    pub fn write_artifacts(
        &self,
        artifacts: &Artifacts,
        paths: &OutputPaths,
    ) -> Result<(), ConvertError> {
        write_file(&paths.template, &artifacts.template)?;
        tracing::info!(path = %paths.template.display(), "Template generated");

        write_file(&paths.field_schema, &artifacts.field_schema)?;
        tracing::info!(path = %paths.field_schema.display(), "Field schema generated");

        Ok(())
    }

    /// Derive output paths for an input schema
    ///
    /// The base name is the input file name with a trailing `.xsd` removed
    /// (case-insensitive), lowercased when `lowercase_names` is set. Files go
    /// to `output_dir` when configured, otherwise next to the input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::path::Path;
    /// use xsd_template_sdk::convert::Converter;
    ///
    /// let paths = Converter::default()
    ///     .output_paths(Path::new("schemas/PurchaseOrder.xsd"))
    ///     .unwrap();
    /// assert_eq!(paths.template, Path::new("schemas/purchaseorder.template"));
    /// assert_eq!(paths.field_schema, Path::new("schemas/purchaseorder-schema.json"));
    /// ```
    pub fn output_paths(&self, input: &Path) -> Result<OutputPaths, ConvertError> {
        let file_name = input
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ConvertError::InvalidPath(input.display().to_string()))?;

        let mut base = if self.config.lowercase_names {
            file_name.to_lowercase()
        } else {
            file_name.to_string()
        };
        if let Some(stem_len) = base.len().checked_sub(XSD_EXTENSION.len()) {
            if base.is_char_boundary(stem_len)
                && base[stem_len..].eq_ignore_ascii_case(XSD_EXTENSION)
            {
                base.truncate(stem_len);
            }
        }
        if base.is_empty() {
            return Err(ConvertError::InvalidPath(input.display().to_string()));
        }

        let dir = match &self.config.output_dir {
            Some(dir) => dir.clone(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        };

        Ok(OutputPaths {
            template: dir.join(format!("{}.{}", base, self.config.template_extension)),
            field_schema: dir.join(format!("{}{}", base, self.config.schema_suffix)),
        })
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ConvertError::WriteError {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, content).map_err(|source| ConvertError::WriteError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths_default() {
        let converter = Converter::default();
        let paths = converter.output_paths(Path::new("/data/Orders.XSD")).unwrap();
        assert_eq!(paths.template, PathBuf::from("/data/orders.template"));
        assert_eq!(paths.field_schema, PathBuf::from("/data/orders-schema.json"));
    }

    #[test]
    fn test_output_paths_keep_case_and_custom_dir() {
        let config = GeneratorConfig::builder()
            .lowercase_names(false)
            .output_dir("/out")
            .template_extension("mustache")
            .build();
        let paths = Converter::new(config)
            .output_paths(Path::new("in/Orders.xsd"))
            .unwrap();
        assert_eq!(paths.template, PathBuf::from("/out/Orders.mustache"));
        assert_eq!(paths.field_schema, PathBuf::from("/out/Orders-schema.json"));
    }

    #[test]
    fn test_output_paths_without_xsd_extension() {
        let paths = Converter::default()
            .output_paths(Path::new("schema.xml"))
            .unwrap();
        assert_eq!(paths.template, PathBuf::from("schema.xml.template"));
    }

    #[test]
    fn test_output_paths_invalid() {
        let converter = Converter::default();
        assert!(matches!(
            converter.output_paths(Path::new("/")),
            Err(ConvertError::InvalidPath(_))
        ));
        assert!(matches!(
            converter.output_paths(Path::new("dir/.xsd")),
            Err(ConvertError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_convert_str_counts() {
        let xsd = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
          <xs:element name="Customer">
            <xs:complexType>
              <xs:sequence>
                <xs:element name="Email" type="xs:string"/>
                <xs:element name="Since" type="xs:date"/>
              </xs:sequence>
            </xs:complexType>
          </xs:element>
        </xs:schema>"#;
        let artifacts = Converter::default().convert_str(xsd).unwrap();
        assert_eq!(artifacts.top_level, 1);
        assert_eq!(artifacts.elements, 3);
        assert_eq!(artifacts.fields[0].properties.len(), 2);
        assert!(artifacts.template.contains("{{Customer_Since}}"));
        assert!(artifacts.field_schema.contains("\"Customer_Since\""));
    }

    #[test]
    fn test_output_paths_from_toml_extension() {
        let config = GeneratorConfig::from_toml_str("template-extension = \".mustache\"").unwrap();
        let paths = Converter::new(config)
            .output_paths(Path::new("Orders.xsd"))
            .unwrap();
        assert_eq!(paths.template, PathBuf::from("orders.mustache"));
    }

    #[test]
    fn test_convert_path_reads_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("flag.xsd");
        std::fs::write(
            &input,
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
              <xs:element name="Flag" type="xs:boolean"/>
            </xs:schema>"#,
        )
        .unwrap();

        let artifacts = Converter::default().convert_path(&input).unwrap();
        assert_eq!(artifacts.top_level, 1);
        assert!(!dir.path().join("flag.template").exists());

        let err = Converter::default()
            .convert_path(&dir.path().join("missing.xsd"))
            .unwrap_err();
        assert!(matches!(err, ConvertError::Import(ImportError::IoError(_))));
    }

    #[test]
    fn test_convert_str_propagates_import_errors() {
        let err = Converter::default().convert_str("<xs:schema>").unwrap_err();
        assert!(matches!(err, ConvertError::Import(ImportError::ParseError(_))));
    }
}
