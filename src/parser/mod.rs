use crate::JuteError;
use crate::ast::Value;

mod splitter;
mod value;

/// Decode a whole JSON document into a [`Value`] tree.
///
/// The input is trimmed, classified by its first and last character, and
/// decoded recursively; composite bodies are cut into top-level segments by
/// the depth-tracking splitter before recursing. Any failure in a nested
/// span aborts the whole decode.
///
/// # Example
/// ```
/// use jute::parser::decode;
///
/// let value = decode(r#"{"port": 8080}"#)?;
/// assert_eq!(value.as_object().unwrap()["port"].as_f64(), Some(8080.0));
/// # Ok::<(), jute::JuteError>(())
/// ```
pub fn decode(text: &str) -> Result<Value, JuteError> {
    value::decode_value(text)
}
