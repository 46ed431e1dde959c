use serde::Serialize;
use std::collections::BTreeMap;

/// CRM form templates. Each lead-capture flow submits to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrmFormId {
    Contact,
    Demo,
    Support,
    Newsletter,
    FeatureGuide,
    SecurityWhitepaper,
    PublicAiWhitepaper,
    Siglite,
}

impl CrmFormId {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrmFormId::Contact => "contact",
            CrmFormId::Demo => "demo",
            CrmFormId::Support => "support",
            CrmFormId::Newsletter => "newsletter",
            CrmFormId::FeatureGuide => "feature_guide",
            CrmFormId::SecurityWhitepaper => "security_whitepaper",
            CrmFormId::PublicAiWhitepaper => "public_ai_whitepaper",
            CrmFormId::Siglite => "siglite",
        }
    }
}

/// Canonical contact shape sent to the CRM. Built once per request and never
/// mutated after construction.
#[derive(Debug, Clone, Serialize)]
pub struct ContactRecord {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "customFields")]
    pub custom_fields: BTreeMap<String, String>,
}

/// Campaign attribution captured on the originating page and passed through
/// unmodified. Absent parameters are omitted from the wire payload, never
/// sent as empty strings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UtmParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
}

impl UtmParams {
    pub fn is_empty(&self) -> bool {
        self.utm_source.is_none() && self.utm_medium.is_none() && self.utm_campaign.is_none()
    }
}

/// One CRM form submission: contact, segmentation tags, attribution.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionEnvelope {
    #[serde(rename = "formId")]
    pub form_id: CrmFormId,
    pub contact: ContactRecord,
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub utm: UtmParams,
}
