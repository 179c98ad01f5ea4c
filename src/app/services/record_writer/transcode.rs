//! YAML to JSON document transcoding
//!
//! The viewer consumes JSON, while the pipeline's canonical output is YAML.
//! This module reads a YAML document and writes it back out as
//! pretty-printed JSON with two-space indentation, preserving key order.

use crate::{Error, Result};

use std::path::Path;
use tracing::{debug, info};

/// Convert a YAML document string to a pretty-printed JSON string
///
/// Key order is preserved end-to-end. Map keys that JSON cannot represent
/// (sequences or maps used as keys) produce a serialization error rather
/// than silently dropping data.
pub fn yaml_to_json_string(yaml: &str) -> Result<String> {
    let document: serde_yaml::Value = serde_yaml::from_str(yaml)
        .map_err(|e| Error::yaml_serialization("Failed to parse YAML document", e))?;

    let mut json = serde_json::to_string_pretty(&document)
        .map_err(|e| Error::json_serialization("Failed to render JSON document", e))?;
    json.push('\n');

    Ok(json)
}

/// Transcode a YAML file on disk into a pretty-printed JSON file
///
/// The output file's parent directory is created on demand. A missing input
/// file is reported explicitly instead of surfacing as a bare I/O error.
/// Returns the number of bytes written.
pub async fn transcode_yaml_to_json(input_path: &Path, output_path: &Path) -> Result<usize> {
    info!(
        "Transcoding {} -> {}",
        input_path.display(),
        output_path.display()
    );

    if !input_path.exists() {
        return Err(Error::file_not_found(input_path.display().to_string()));
    }

    let yaml = tokio::fs::read_to_string(input_path)
        .await
        .map_err(|e| Error::io(format!("Failed to read {}", input_path.display()), e))?;

    let json = yaml_to_json_string(&yaml)?;

    if let Some(parent) = output_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io("Failed to create output directory", e))?;
    }

    tokio::fs::write(output_path, json.as_bytes())
        .await
        .map_err(|e| Error::io(format!("Failed to write {}", output_path.display()), e))?;

    debug!("JSON output complete: {} bytes", json.len());

    Ok(json.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_documents() {
        assert_eq!(yaml_to_json_string("42").unwrap(), "42\n");
        assert_eq!(yaml_to_json_string("hello").unwrap(), "\"hello\"\n");
        assert_eq!(yaml_to_json_string("true").unwrap(), "true\n");
    }

    #[test]
    fn test_mapping_key_order_preserved() {
        let json = yaml_to_json_string("zebra: 1\nalpha: 2\nmiddle: 3\n").unwrap();

        let zebra = json.find("zebra").unwrap();
        let alpha = json.find("alpha").unwrap();
        let middle = json.find("middle").unwrap();
        assert!(zebra < alpha);
        assert!(alpha < middle);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let result = yaml_to_json_string("key: [unclosed");
        assert!(matches!(result, Err(Error::YamlSerialization { .. })));
    }
}
