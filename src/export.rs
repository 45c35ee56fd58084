// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use crate::JuteError;
use crate::ast::Value;
use crate::parser;

/// Render a decoded value tree as pretty-printed JSON.
///
/// `Value` serializes untagged, so the output mirrors the tree directly:
/// objects keep their insertion order, numbers render as 64-bit floats.
/// String contents are re-escaped by the renderer; since the decoder never
/// unescapes them, a document containing escape sequences will not
/// round-trip byte-identically.
///
/// # Examples
/// ```
/// use jute::{decode, export};
///
/// let value = decode(r#"{"a": [1, 2]}"#)?;
/// let json = export::export_value_to_json(&value)?;
/// assert!(json.contains("\"a\""));
/// # Ok::<(), jute::JuteError>(())
/// ```
pub fn export_value_to_json(value: &Value) -> Result<String, JuteError> {
    serde_json::to_string_pretty(value).map_err(|e| JuteError::TypeError {
        message: format!("Failed to render JSON: {}", e),
        hint: None,
        code: Some(500),
    })
}

/// Decode a JSON file and re-render it as pretty-printed JSON.
///
/// Convenience function that reads, decodes, and exports in one call.
///
/// # Errors
/// Returns an error if the file can't be read or doesn't decode.
pub fn export_json_file<P: AsRef<Path>>(path: P) -> Result<String, JuteError> {
    let input = fs::read_to_string(&path).map_err(|e| JuteError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.as_ref().to_string_lossy().to_string(),
        hint: Some("Check that the file exists and is readable".into()),
        code: Some(301),
    })?;

    let value = parser::decode(&input)?;
    export_value_to_json(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::decode;

    #[test]
    fn test_export_nested_document() {
        let value = decode(r#"{"name":"jute","tags":["json","parser"],"meta":{"stars":3}}"#)
            .expect("Failed to decode document");

        let json_output = export_value_to_json(&value).expect("Failed to export value");

        let deserialized: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(deserialized["name"], "jute");
        assert_eq!(deserialized["tags"][1], "parser");
        assert_eq!(deserialized["meta"]["stars"], 3.0);
    }

    #[test]
    fn test_export_preserves_member_order() {
        let value = decode(r#"{"zeta":1,"alpha":2}"#).unwrap();
        let json_output = export_value_to_json(&value).unwrap();

        let zeta = json_output.find("zeta").unwrap();
        let alpha = json_output.find("alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_export_scalars() {
        assert_eq!(export_value_to_json(&Value::Null).unwrap(), "null");
        assert_eq!(export_value_to_json(&Value::Bool(true)).unwrap(), "true");

        let exported = export_value_to_json(&Value::String("hi".into())).unwrap();
        assert_eq!(exported, "\"hi\"");
    }

    #[test]
    fn test_export_missing_file() {
        let result = export_json_file("definitely/not/here.json");
        assert!(matches!(result, Err(JuteError::FileError { .. })));
    }
}
