// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashMap;

use crate::{JuteError, Value};

impl TryFrom<Value> for String {
    type Error = JuteError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(JuteError::TypeError {
                message: format!("Expected string, got {}", value.kind()),
                hint: Some("Use a string value in your document".into()),
                code: Some(401),
            }),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = JuteError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n),
            _ => Err(JuteError::TypeError {
                message: format!("Expected number, got {}", value.kind()),
                hint: Some("Use a number value in your document".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = JuteError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n as f32),
            _ => Err(JuteError::TypeError {
                message: format!("Expected number, got {}", value.kind()),
                hint: Some("Use a number value in your document".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = JuteError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n as i32),
            _ => Err(JuteError::TypeError {
                message: format!("Expected number, got {}", value.kind()),
                hint: Some("Use a number value in your document".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = JuteError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n as i64),
            _ => Err(JuteError::TypeError {
                message: format!("Expected number, got {}", value.kind()),
                hint: Some("Use a number value in your document".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u8 {
    type Error = JuteError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u8::MAX as f64 {
                    Ok(n as u8)
                } else {
                    Err(JuteError::TypeError {
                        message: format!("Number {} out of range for u8", n),
                        hint: Some("Use a number between 0 and 255".into()),
                        code: Some(407),
                    })
                }
            }
            _ => Err(JuteError::TypeError {
                message: format!("Expected number, got {}", value.kind()),
                hint: Some("Use a number value in your document".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u16 {
    type Error = JuteError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u16::MAX as f64 {
                    Ok(n as u16)
                } else {
                    Err(JuteError::TypeError {
                        message: format!("Number {} out of range for u16", n),
                        hint: Some("Use a number between 0 and 65535".into()),
                        code: Some(403),
                    })
                }
            }
            _ => Err(JuteError::TypeError {
                message: format!("Expected number, got {}", value.kind()),
                hint: Some("Use a number value in your document".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u32 {
    type Error = JuteError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u32::MAX as f64 {
                    Ok(n as u32)
                } else {
                    Err(JuteError::TypeError {
                        message: format!("Number {} out of range for u32", n),
                        hint: Some("Use a number between 0 and 4294967295".into()),
                        code: Some(408),
                    })
                }
            }
            _ => Err(JuteError::TypeError {
                message: format!("Expected number, got {}", value.kind()),
                hint: Some("Use a number value in your document".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u64 {
    type Error = JuteError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u64::MAX as f64 {
                    Ok(n as u64)
                } else {
                    Err(JuteError::TypeError {
                        message: format!("Number {} out of range for u64", n),
                        hint: Some("Use a positive number within u64 range".into()),
                        code: Some(406),
                    })
                }
            }
            _ => Err(JuteError::TypeError {
                message: format!("Expected number, got {}", value.kind()),
                hint: Some("Use a number value in your document".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for usize {
    type Error = JuteError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n.is_finite() {
                    Ok(n as usize)
                } else {
                    Err(JuteError::TypeError {
                        message: format!("Number {} out of range for usize", n),
                        hint: Some("Use a positive integer".into()),
                        code: Some(409),
                    })
                }
            }
            _ => Err(JuteError::TypeError {
                message: format!("Expected number, got {}", value.kind()),
                hint: Some("Use a number value in your document".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = JuteError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(JuteError::TypeError {
                message: format!("Expected boolean, got {}", value.kind()),
                hint: None,
                code: Some(404),
            }),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = JuteError>,
{
    type Error = JuteError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(elements) => {
                let mut result = Vec::new();
                for element in elements {
                    result.push(T::try_from(element)?);
                }
                Ok(result)
            }
            _ => Err(JuteError::TypeError {
                message: format!("Expected array, got {}", value.kind()),
                hint: Some("Use an array [...] in your document".into()),
                code: Some(405),
            }),
        }
    }
}

impl<T> TryFrom<Value> for Option<T>
where
    T: TryFrom<Value, Error = JuteError>,
{
    type Error = JuteError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(None),
            v => Ok(Some(T::try_from(v)?)),
        }
    }
}

impl TryFrom<Value> for HashMap<String, Value> {
    type Error = JuteError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(members) => Ok(members.into_iter().collect()),
            _ => Err(JuteError::TypeError {
                message: format!("Expected object, got {}", value.kind()),
                hint: Some("Use an object {...} in your document".into()),
                code: Some(410),
            }),
        }
    }
}

impl TryFrom<Value> for HashMap<String, String> {
    type Error = JuteError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(members) => {
                let mut map = HashMap::new();
                for (key, val) in members {
                    let string_val = String::try_from(val)?;
                    map.insert(key, string_val);
                }
                Ok(map)
            }
            _ => Err(JuteError::TypeError {
                message: format!("Expected object with string values, got {}", value.kind()),
                hint: Some("Use an object with string values".into()),
                code: Some(410),
            }),
        }
    }
}
