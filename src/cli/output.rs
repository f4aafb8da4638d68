//! Output formatting for CLI

use crate::convert::{Artifacts, OutputPaths};
use crate::models::FieldSchemaNode;

/// Format a conversion summary in compact mode
pub fn format_compact_output(artifacts: &Artifacts, paths: Option<&OutputPaths>) -> String {
    let mut output = String::new();

    if artifacts.top_level == 0 {
        output.push_str("\n⚠️  No top-level elements found\n");
    }

    output.push_str(&format!(
        "\n✅ Parsed {} element(s), {} top-level:\n",
        artifacts.elements, artifacts.top_level
    ));
    let names: Vec<String> = artifacts
        .fields
        .iter()
        .map(|f| format!("{}:{}", f.name, f.kind))
        .collect();
    if !names.is_empty() {
        output.push_str(&format!("  Fields: {}\n", names.join(", ")));
    }

    if let Some(paths) = paths {
        push_paths(&mut output, paths);
    }

    output
}

/// Format a conversion summary in pretty mode, listing every field
pub fn format_pretty_output(artifacts: &Artifacts, paths: Option<&OutputPaths>) -> String {
    let mut output = String::new();

    if artifacts.top_level == 0 {
        output.push_str("\n⚠️  No top-level elements found\n");
    }

    output.push_str(&format!(
        "\n✅ Parsed {} element(s), {} top-level\n",
        artifacts.elements, artifacts.top_level
    ));

    if !artifacts.fields.is_empty() {
        output.push_str("\nField Schema:\n");
        for field in &artifacts.fields {
            push_field(&mut output, field, 1);
        }
    }

    if let Some(paths) = paths {
        push_paths(&mut output, paths);
    }

    output
}

fn push_field(output: &mut String, field: &FieldSchemaNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match field.of {
        Some(of) => output.push_str(&format!(
            "{}- {} ({} of {})\n",
            indent, field.name, field.kind, of
        )),
        None => output.push_str(&format!("{}- {} ({})\n", indent, field.name, field.kind)),
    }
    for property in &field.properties {
        push_field(output, property, depth + 1);
    }
}

fn push_paths(output: &mut String, paths: &OutputPaths) {
    output.push_str("\nGenerated:\n");
    output.push_str(&format!("  Template: {}\n", paths.template.display()));
    output.push_str(&format!("  Schema:   {}\n", paths.field_schema.display()));
}
