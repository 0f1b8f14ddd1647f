//! Blocking HTTP client for the metadata service.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;

use dq_model::{Acknowledgement, FeedbackAction};

use crate::delivery::FeedbackReporter;
use crate::endpoints::ApiEndpoints;
use crate::error::{ApiError, Result};

/// User agent string for service requests.
const USER_AGENT_VALUE: &str = concat!("dq/", env!("CARGO_PKG_VERSION"));

/// API credentials, passed in explicitly by the caller.
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
}

impl ApiCredentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

// Keys must not leak through debug formatting of surrounding structs.
impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// PATCH body understood by the governance field endpoint.
#[derive(Debug, Serialize)]
struct FieldFlagBody<'a> {
    dataset_field_flag: &'static str,
    dataset_field_flag_note: &'a str,
}

impl<'a> FieldFlagBody<'a> {
    fn flagged(note: &'a str) -> Self {
        Self {
            dataset_field_flag: "Yes",
            dataset_field_flag_note: note,
        }
    }
}

/// Client for the metadata service.
///
/// All requests carry the `X-Api-Key` header; the service uses it for both
/// reads and writes.
#[derive(Debug, Clone)]
pub struct GovernanceClient {
    client: reqwest::blocking::Client,
    endpoints: ApiEndpoints,
}

impl GovernanceClient {
    pub fn new(endpoints: ApiEndpoints, credentials: &ApiCredentials) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let mut api_key = HeaderValue::from_str(&credentials.api_key).map_err(|_| {
            ApiError::Network("API key contains characters not allowed in a header".to_string())
        })?;
        api_key.set_sensitive(true);
        headers.insert("X-Api-Key", api_key);

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, endpoints })
    }

    /// Fetches the raw extra-metadata listing.
    ///
    /// The body comes back untouched; parsing it into rules is the catalog
    /// layer's job.
    pub fn fetch_extra_metadata(&self) -> Result<String> {
        let url = self.endpoints.extra_metadata();
        tracing::debug!(%url, "fetching extra metadata");

        let response = self.client.get(url).send()?;
        let response = self.handle_response(response)?;
        Ok(response.text()?)
    }

    /// Checks the response status, mapping auth failures and other
    /// non-success statuses to their error variants.
    fn handle_response(
        &self,
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(ApiError::Unauthorized {
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Service {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

impl FeedbackReporter for GovernanceClient {
    fn report(&self, action: &FeedbackAction) -> Result<Acknowledgement> {
        let url = self.endpoints.update_field(action.target_field_id);
        tracing::debug!(field = %action.target_field_id, %url, "delivering feedback flag");

        let response = self
            .client
            .patch(&url)
            .json(&FieldFlagBody::flagged(&action.note))
            .send()?;
        let response = self.handle_response(response)?;

        Ok(Acknowledgement {
            status: response.status().as_u16(),
        })
    }
}
