use serde_json::Value;
use std::collections::HashMap;

use crate::models::lead_models::UtmParams;
use crate::pipeline::validate::field_str;

const UTM_SOURCE: &str = "utm_source";
const UTM_MEDIUM: &str = "utm_medium";
const UTM_CAMPAIGN: &str = "utm_campaign";

/// Capture campaign attribution for a submission. The client carries the UTM
/// parameters it saw at render time in the request body; query parameters on
/// the endpoint itself are the fallback. Absent or empty values stay absent.
pub fn capture(fields: &HashMap<String, Value>, query: &HashMap<String, String>) -> UtmParams {
    UtmParams {
        utm_source: pick(fields, query, UTM_SOURCE),
        utm_medium: pick(fields, query, UTM_MEDIUM),
        utm_campaign: pick(fields, query, UTM_CAMPAIGN),
    }
}

fn pick(
    fields: &HashMap<String, Value>,
    query: &HashMap<String, String>,
    key: &str,
) -> Option<String> {
    let from_body = field_str(fields, key);
    if !from_body.is_empty() {
        return Some(from_body);
    }
    query.get(key).filter(|v| !v.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> HashMap<String, Value> {
        value
            .as_object()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    #[test]
    fn body_wins_over_query() {
        let fields = body(json!({"utm_source": "newsletter"}));
        let mut query = HashMap::new();
        query.insert("utm_source".to_string(), "google".to_string());
        let utm = capture(&fields, &query);
        assert_eq!(utm.utm_source.as_deref(), Some("newsletter"));
    }

    #[test]
    fn query_fallback() {
        let fields = body(json!({}));
        let mut query = HashMap::new();
        query.insert("utm_campaign".to_string(), "spring-launch".to_string());
        let utm = capture(&fields, &query);
        assert_eq!(utm.utm_campaign.as_deref(), Some("spring-launch"));
        assert!(utm.utm_source.is_none());
    }

    #[test]
    fn empty_strings_are_omitted() {
        let fields = body(json!({"utm_source": "", "utm_medium": ""}));
        let utm = capture(&fields, &HashMap::new());
        assert!(utm.is_empty());
    }
}
