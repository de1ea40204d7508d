use super::ModelError;

/// Returns the first balanced `{...}` region of `text`.
///
/// Braces inside JSON string literals (including escaped quotes) do not count towards the
/// nesting depth, so prose or code fences around the object are ignored.
pub fn extract_json_object(text: &str) -> Result<&str, ModelError> {
    let start = text
        .find('{')
        .ok_or_else(|| ModelError::Format("no JSON object in response".to_string()))?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    Err(ModelError::Format(
        "unterminated JSON object in response".to_string(),
    ))
}
