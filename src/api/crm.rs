use reqwest::Client;
use serde_json::Value;
use std::env;
use thiserror::Error;

use crate::models::lead_models::SubmissionEnvelope;

#[derive(Debug, Error)]
pub enum CrmError {
    #[error("CRM request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("CRM returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Thin wrapper over the marketing-automation CRM's form-submission endpoint.
/// One client lives for the whole process and is shared read-only across
/// requests. No retries and no idempotency key; the CRM applies its own
/// dedup if any.
pub struct CrmClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl CrmClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key,
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            env::var("CRM_API_URL").expect("CRM_API_URL must be set"),
            env::var("CRM_API_KEY").expect("CRM_API_KEY must be set"),
        )
    }

    /// Submit one envelope. At most one outbound call per invocation; a
    /// non-2xx answer or transport failure surfaces as `CrmError` and is
    /// never retried here.
    pub async fn submit(&self, envelope: &SubmissionEnvelope) -> Result<Value, CrmError> {
        let url = format!(
            "{}/forms/{}/submissions",
            self.base_url,
            envelope.form_id.as_str()
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(envelope)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CrmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
