use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::env;
use thiserror::Error;

/// Zone used when the caller does not name one.
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// Window queried when the caller gives no range.
pub const DEFAULT_RANGE_DAYS: i64 = 14;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("calendar request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("calendar API returned {status}: {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct SlotsResponse {
    #[serde(default)]
    slots: Vec<Value>,
}

/// Pass-through adapter for the external scheduling API. Slot descriptors
/// come back exactly as the upstream sent them.
pub struct CalendarClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl CalendarClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key,
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            env::var("CALENDAR_API_URL").expect("CALENDAR_API_URL must be set"),
            env::var("CALENDAR_API_KEY").expect("CALENDAR_API_KEY must be set"),
        )
    }

    pub async fn get_slots(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        time_zone: Tz,
    ) -> Result<Vec<Value>, CalendarError> {
        let url = format!("{}/slots", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(&[
                ("start", start.to_rfc3339()),
                ("end", end.to_rfc3339()),
                ("timeZone", time_zone.name().to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CalendarError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SlotsResponse = response.json().await?;
        Ok(body.slots)
    }
}
