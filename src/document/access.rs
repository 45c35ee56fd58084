use super::*;

impl JuteDocument {
    /// Get a typed value from the document using dot notation.
    ///
    /// Numeric segments index into arrays.
    ///
    /// # Examples
    /// ```no_run
    /// # use jute::JuteDocument;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let doc = JuteDocument::from_file("data.json")?;
    /// let host: String = doc.get("server.host")?;
    /// let port: u16 = doc.get("server.port")?;
    /// let first_tag: String = doc.get("tags.0")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns an error if the path doesn't exist or the value can't be
    /// converted to type `T`.
    pub fn get<T>(&self, path: &str) -> Result<T, JuteError>
    where
        T: TryFrom<Value, Error = JuteError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value)
    }

    /// Get an optional typed value - returns `None` if the path doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, JuteError>
    where
        T: TryFrom<Value, Error = JuteError>,
    {
        match self.get_value(path) {
            Ok(value) => Ok(Some(T::try_from(value)?)),
            Err(JuteError::KeyNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use jute::JuteDocument;
    /// # let doc = JuteDocument::from_file("data.json").unwrap();
    /// let timeout = doc.get_or("server.timeout", 30u64);
    /// let debug = doc.get_or("debug", false);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = JuteError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw `Value` from the document.
    ///
    /// An empty path returns the root value.
    pub fn get_value(&self, path: &str) -> Result<Value, JuteError> {
        if path.trim().is_empty() {
            return Ok(self.root.clone());
        }

        let mut current = &self.root;

        for segment in path.split('.') {
            current = match current {
                Value::Object(members) => members
                    .get(segment)
                    .ok_or_else(|| key_not_found(path))?,
                Value::Array(elements) => segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| elements.get(index))
                    .ok_or_else(|| key_not_found(path))?,
                other => {
                    return Err(JuteError::TypeError {
                        message: format!("Cannot descend into {} at '{}'", other.kind(), segment),
                        hint: Some("Only objects and arrays have children".into()),
                        code: Some(410),
                    });
                }
            };
        }

        Ok(current.clone())
    }

    /// Get all keys at a given path level.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, JuteError> {
        let value = self.get_value(path)?;
        match value {
            Value::Object(members) => Ok(members.keys().cloned().collect()),
            other => Err(JuteError::TypeError {
                message: format!("Path '{}' is not an object (found {})", path, other.kind()),
                hint: Some("Only objects have keys".into()),
                code: Some(410),
            }),
        }
    }

    /// Check if a path exists in the document.
    pub fn has(&self, path: &str) -> bool {
        self.get_value(path).is_ok()
    }
}

fn key_not_found(path: &str) -> JuteError {
    JuteError::KeyNotFound {
        path: path.to_string(),
        hint: Some("Check that the path exists in the document".into()),
        code: Some(304),
    }
}
