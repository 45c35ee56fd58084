use super::*;

/// Split `body` into its top-level segments separated by `delimiter`.
///
/// `{` and `[` push a nesting level, `}` and `]` pop one, and the delimiter
/// only cuts at level zero. The final segment is always appended, so an
/// empty `body` yields a single empty segment. Quote characters are not
/// tracked; a delimiter or bracket inside a string literal is treated as
/// structure.
pub(super) fn split_top_level(body: &str, delimiter: char) -> Result<Vec<&str>, JuteError> {
    let mut segments = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;

    for (index, ch) in body.char_indices() {
        if ch == '{' || ch == '[' {
            depth += 1;
        } else if ch == '}' || ch == ']' {
            depth -= 1;
        } else if ch == delimiter && depth == 0 {
            segments.push(&body[start..index]);
            start = index + ch.len_utf8();
        }
    }

    if depth != 0 {
        return Err(JuteError::MismatchedBrackets {
            hint: Some("Check that every '{' and '[' has a matching closer".into()),
            code: Some(202),
        });
    }

    segments.push(&body[start..]);
    Ok(segments)
}
