use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

use crate::config::flows::{FlowDescriptor, NameStyle, SuccessShape};
use crate::models::lead_models::ContactRecord;
use crate::pipeline::validate::field_str;

/// Split a free-text name on the first whitespace. No whitespace means the
/// whole string is the first name and the last name is empty.
pub fn split_name(name: &str) -> (String, String) {
    match name.split_once(char::is_whitespace) {
        Some((first, last)) => (first.to_string(), last.trim_start().to_string()),
        None => (name.to_string(), String::new()),
    }
}

/// CRM custom fields carry opt-in as the literals "yes"/"no".
pub fn opt_in_flag(fields: &HashMap<String, Value>) -> &'static str {
    let raw = fields.get("optIn").or_else(|| fields.get("opt_in"));
    match raw {
        Some(Value::Bool(true)) => "yes",
        Some(Value::String(s)) => match s.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => "yes",
            _ => "no",
        },
        _ => "no",
    }
}

/// Build the canonical contact from validated raw fields. Pure; malformed
/// values degrade to empty strings instead of failing.
pub fn contact_record(flow: &FlowDescriptor, fields: &HashMap<String, Value>) -> ContactRecord {
    let (first_name, last_name) = match flow.name_style {
        NameStyle::Split => split_name(&field_str(fields, "name")),
        NameStyle::Direct => (field_str(fields, "firstName"), field_str(fields, "lastName")),
    };

    let company = non_empty(field_str(fields, "company"))
        .or_else(|| non_empty(field_str(fields, "firm")));
    let region = non_empty(field_str(fields, "region"));

    let mut custom_fields = BTreeMap::new();
    custom_fields.insert("lead_source".to_string(), flow.lead_source.to_string());
    custom_fields.insert("lead_type".to_string(), flow.lead_type.to_string());
    custom_fields.insert("opt_in".to_string(), opt_in_flag(fields).to_string());

    for (raw_key, crm_key) in flow.passthrough {
        if let Some(value) = non_empty(field_str(fields, raw_key)) {
            custom_fields.insert((*crm_key).to_string(), value);
        }
    }

    // Fixed-artifact flows stamp their resource metadata themselves; the
    // generic download flow gets it from the passthrough list above.
    if let SuccessShape::Download {
        url,
        title,
        resource_type,
    } = flow.success
    {
        custom_fields.insert("resource_title".to_string(), title.to_string());
        custom_fields.insert("resource_type".to_string(), resource_type.to_string());
        custom_fields.insert("download_url".to_string(), url.to_string());
    }

    ContactRecord {
        first_name,
        last_name,
        email: field_str(fields, "email"),
        company,
        region,
        custom_fields,
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::flows::{descriptor, FlowKind};
    use serde_json::json;

    fn fields(value: Value) -> HashMap<String, Value> {
        value
            .as_object()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    #[test]
    fn splits_on_first_whitespace() {
        assert_eq!(split_name("Jane Doe"), ("Jane".into(), "Doe".into()));
        assert_eq!(split_name("Cher"), ("Cher".into(), String::new()));
        assert_eq!(
            split_name("Mary Jane Watson"),
            ("Mary".into(), "Jane Watson".into())
        );
    }

    #[test]
    fn opt_in_conversion() {
        assert_eq!(opt_in_flag(&fields(json!({"optIn": true}))), "yes");
        assert_eq!(opt_in_flag(&fields(json!({"optIn": "on"}))), "yes");
        assert_eq!(opt_in_flag(&fields(json!({"optIn": false}))), "no");
        assert_eq!(opt_in_flag(&fields(json!({"optIn": "nope"}))), "no");
        assert_eq!(opt_in_flag(&fields(json!({}))), "no");
    }

    #[test]
    fn contact_flow_record() {
        let flow = descriptor(FlowKind::Contact);
        let record = contact_record(
            flow,
            &fields(json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "message": "Pricing for a 40-attorney firm?",
                "optIn": true
            })),
        );
        assert_eq!(record.first_name, "Ada");
        assert_eq!(record.last_name, "Lovelace");
        assert_eq!(record.email, "ada@example.com");
        assert_eq!(record.company, None);
        assert_eq!(record.custom_fields["lead_source"], "contact_form");
        assert_eq!(record.custom_fields["opt_in"], "yes");
        assert_eq!(
            record.custom_fields["message"],
            "Pricing for a 40-attorney firm?"
        );
    }

    #[test]
    fn demo_info_uses_direct_names_and_firm() {
        let flow = descriptor(FlowKind::DemoInfo);
        let record = contact_record(
            flow,
            &fields(json!({
                "firstName": "Grace",
                "lastName": "Hopper",
                "email": "grace@example.com",
                "firm": "Hopper & Partners"
            })),
        );
        assert_eq!(record.first_name, "Grace");
        assert_eq!(record.last_name, "Hopper");
        assert_eq!(record.company.as_deref(), Some("Hopper & Partners"));
    }

    #[test]
    fn download_flow_stamps_resource_fields() {
        let flow = descriptor(FlowKind::FeatureGuide);
        let record = contact_record(
            flow,
            &fields(json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "company": "Acme Law"
            })),
        );
        assert_eq!(
            record.custom_fields["download_url"],
            "/docs/sapphire_legalai_features.pdf"
        );
        assert_eq!(record.custom_fields["resource_title"], "Feature Guide");
        assert_eq!(record.custom_fields["resource_type"], "guide");
    }

    #[test]
    fn malformed_values_degrade_to_empty() {
        let flow = descriptor(FlowKind::Contact);
        let record = contact_record(flow, &fields(json!({"name": {"nested": true}})));
        assert_eq!(record.first_name, "");
        assert_eq!(record.last_name, "");
        assert_eq!(record.email, "");
    }
}
