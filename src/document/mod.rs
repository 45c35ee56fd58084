// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use crate::JuteError;
use crate::ast::Value;
use crate::parser;

mod access;
mod conversion;

/// A decoded JSON document and the entry point for path-based access.
pub struct JuteDocument {
    root: Value,
}

impl JuteDocument {
    /// Load and decode a JSON file.
    ///
    /// # Example
    /// ```ignore
    /// let doc = JuteDocument::from_file("data.json")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, JuteError> {
        let content = fs::read_to_string(&path).map_err(|e| JuteError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.as_ref().to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        Self::from_str(&content)
    }

    /// Decode a JSON document from a string (no file I/O).
    pub fn from_str(content: &str) -> Result<Self, JuteError> {
        Ok(Self {
            root: parser::decode(content)?,
        })
    }

    /// The root of the decoded value tree.
    pub fn root(&self) -> &Value {
        &self.root
    }
}

#[cfg(test)]
mod tests;
