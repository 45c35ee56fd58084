use indexmap::IndexMap;

use super::splitter::split_top_level;
use super::*;

/// Decode one trimmed span of JSON text.
///
/// Branches are tried in order: object, array, string, boolean literal,
/// null literal, number. A quoted `"true"` is matched by the string branch
/// before the literal branch is reached. Spans shorter than two characters
/// cannot carry a matched delimiter pair and fall through to the literal
/// and number branches.
pub(super) fn decode_value(text: &str) -> Result<Value, JuteError> {
    let text = text.trim();

    if text.is_empty() {
        return Err(JuteError::EmptyInput {
            hint: Some("Provide a JSON value to decode".into()),
            code: Some(201),
        });
    }

    let first = text.chars().next();
    let last = text.chars().last();
    let delimited = text.len() >= 2;

    if delimited && first == Some('{') && last == Some('}') {
        decode_object(text)
    } else if delimited && first == Some('[') && last == Some(']') {
        decode_array(text)
    } else if delimited && first == Some('"') && last == Some('"') {
        // Raw passthrough: the characters between the quotes, escape
        // sequences included.
        Ok(Value::String(interior(text).to_string()))
    } else if text == "true" {
        Ok(Value::Bool(true))
    } else if text == "false" {
        Ok(Value::Bool(false))
    } else if text == "null" {
        Ok(Value::Null)
    } else {
        match text.parse::<f64>() {
            Ok(number) => Ok(Value::Number(number)),
            Err(_) => Err(JuteError::InvalidNumber {
                text: text.to_string(),
                hint: Some("Expected an object, array, string, literal, or number".into()),
                code: Some(204),
            }),
        }
    }
}

fn decode_object(text: &str) -> Result<Value, JuteError> {
    if text.len() == 2 {
        return Ok(Value::Object(IndexMap::new()));
    }

    let mut members = IndexMap::new();

    for pair in split_top_level(interior(text), ',')? {
        let segments = match split_top_level(pair, ':') {
            Ok(segments) if segments.len() == 2 => segments,
            _ => {
                return Err(JuteError::InvalidKeyValuePair {
                    pair: pair.trim().to_string(),
                    hint: Some("Object members take the form key: value".into()),
                    code: Some(203),
                });
            }
        };

        let key = decode_value(segments[0].trim())?;
        let value = decode_value(segments[1].trim())?;

        // Last write wins on duplicate keys.
        members.insert(key_text(key), value);
    }

    Ok(Value::Object(members))
}

fn decode_array(text: &str) -> Result<Value, JuteError> {
    if text.len() == 2 {
        return Ok(Value::Array(Vec::new()));
    }

    let mut elements = Vec::new();

    for element in split_top_level(interior(text), ',')? {
        elements.push(decode_value(element.trim())?);
    }

    Ok(Value::Array(elements))
}

/// The span with its enclosing delimiter pair removed.
///
/// Callers have already checked that the first and last characters are
/// one-byte delimiters, so byte slicing is safe here.
fn interior(text: &str) -> &str {
    &text[1..text.len() - 1]
}

/// Coerce a decoded key to the textual form used in the member map.
///
/// Keys are conventionally strings, but any decoded kind is accepted and
/// keyed on its rendering.
fn key_text(key: Value) -> String {
    match key {
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        composite => format!("{composite:?}"),
    }
}
