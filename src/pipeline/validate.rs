use serde_json::Value;
use std::collections::HashMap;

/// Presence-only gate: a field passes when it exists and its string form is
/// non-empty. No format or length checks happen here; the CRM validates
/// content downstream.
pub fn check(fields: &HashMap<String, Value>, required: &[&str]) -> Result<(), Vec<String>> {
    let missing: Vec<String> = required
        .iter()
        .filter(|key| field_str(fields, key).is_empty())
        .map(|key| key.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing)
    }
}

/// Coerce a raw field to the string the rest of the pipeline works with.
/// Missing or unusable values become the empty string rather than an error.
pub fn field_str(fields: &HashMap<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// `["name", "email", "message"]` -> `"name, email, and message are required"`.
pub fn missing_fields_message(required: &[&str]) -> String {
    let list = match required {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{} and {}", first, second),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    };
    format!("Missing required fields: {} are required", list)
}
