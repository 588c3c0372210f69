use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::UmlSchema;

/// Parse a UML class diagram from its JSON form
pub fn parse_schema(content: &str, path: &Path) -> Result<UmlSchema> {
    serde_json::from_str(content)
        .with_context(|| format!("Failed to parse UML schema: {}", path.display()))
}

/// Read and parse a UML schema file
pub fn load_schema(path: &Path) -> Result<UmlSchema> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read UML schema: {}", path.display()))?;

    parse_schema(&content, path)
}
