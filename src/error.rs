use std::fmt;

/// The main error type for JUTE decoding and document access.
#[derive(Debug, Clone, PartialEq)]
pub enum JuteError {
    /// Raised when the trimmed input has zero length.
    EmptyInput {
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when bracket nesting never returns to zero within a span.
    MismatchedBrackets {
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when an object member does not split into exactly two
    /// colon-separated segments.
    InvalidKeyValuePair {
        pair: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when text matches no other rule and fails the numeric parse.
    InvalidNumber {
        text: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    KeyNotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl fmt::Display for JuteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JuteError::EmptyInput { hint, code } =>
                write!(f, "[JUTE] Empty input{}{}",
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JuteError::MismatchedBrackets { hint, code } =>
                write!(f, "[JUTE] Mismatched brackets in JSON{}{}",
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JuteError::InvalidKeyValuePair { pair, hint, code } =>
                write!(f, "[JUTE] Invalid key-value pair '{}'{}{}",
                    pair,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JuteError::InvalidNumber { text, hint, code } =>
                write!(f, "[JUTE] Invalid number '{}'{}{}",
                    text,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JuteError::TypeError { message, hint, code } =>
                write!(f, "[JUTE] Type Error: {}{}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JuteError::KeyNotFound { path, hint, code } =>
                write!(f, "[JUTE] Path '{}' not found in document{}{}",
                    path,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JuteError::FileError { message, path, hint, code } =>
                write!(f, "[JUTE] File Error '{}': {}{}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for JuteError {}
