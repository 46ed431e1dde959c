use axum::http::{header, HeaderMap};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("request body could not be parsed: {0}")]
pub struct MalformedRequestError(pub String);

/// Decode a lead submission body into a flat field map. The content type
/// picks the decoder: form posts come from plain HTML forms (the demo modal),
/// everything else is treated as JSON.
pub fn parse(headers: &HeaderMap, body: &[u8]) -> Result<HashMap<String, Value>, MalformedRequestError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if content_type.starts_with("application/x-www-form-urlencoded") {
        let fields = url::form_urlencoded::parse(body)
            .into_owned()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();
        return Ok(fields);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| MalformedRequestError(e.to_string()))?;
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        other => Err(MalformedRequestError(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_object() {
        let headers = HeaderMap::new();
        let fields = parse(&headers, br#"{"name": "Ada", "optIn": true}"#).unwrap();
        assert_eq!(fields["name"], Value::String("Ada".into()));
        assert_eq!(fields["optIn"], Value::Bool(true));
    }

    #[test]
    fn parses_form_encoded() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded".parse().unwrap(),
        );
        let fields = parse(&headers, b"name=Ada+Lovelace&email=ada%40example.com").unwrap();
        assert_eq!(fields["name"], Value::String("Ada Lovelace".into()));
        assert_eq!(fields["email"], Value::String("ada@example.com".into()));
    }

    #[test]
    fn rejects_invalid_json() {
        let headers = HeaderMap::new();
        assert!(parse(&headers, b"not json").is_err());
    }

    #[test]
    fn rejects_non_object_json() {
        let headers = HeaderMap::new();
        assert!(parse(&headers, b"[1, 2, 3]").is_err());
    }
}
