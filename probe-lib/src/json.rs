use serde_json::Value;

pub const CONTENT_TYPE: &str = "application/json";

pub fn is_json_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains(CONTENT_TYPE)
}

/// Parses `body` as JSON when the content type says so. Anything else,
/// including a JSON-labelled body that fails to parse, stays raw text.
pub fn decode_body(content_type: Option<&str>, body: String) -> Value {
    match content_type {
        Some(ct) if is_json_content_type(ct) => {
            serde_json::from_str(&body).unwrap_or(Value::String(body))
        }
        _ => Value::String(body),
    }
}
