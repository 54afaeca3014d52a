// src/backend.rs
//
// The scraping backend as seen from the client: one POST with `{url}`,
// answered by `{result}` on success or `{detail}` on failure.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;
use crate::model::{ScrapeRequest, ScrapeResult};

/// Anything that can turn a request into a result. The HTTP client is the
/// production impl; tests script their own.
pub trait Backend: Send + Sync {
    fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeResult, ClientError>;
}

pub struct HttpBackend {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self { client, endpoint: endpoint.into() })
    }
}

impl Backend for HttpBackend {
    fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeResult, ClientError> {
        logd!("Backend: POST {} url={}", self.endpoint, request.url);

        let resp = self.client.post(&self.endpoint).json(request).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;

        logd!("Backend: HTTP {} ({} bytes)", status, body.len());
        decode_response(status, &body)
    }
}

#[derive(Deserialize)]
struct SuccessBody {
    #[serde(default)]
    result: Option<ScrapeResult>,
}

#[derive(Deserialize)]
struct FailureBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Map a raw HTTP status + body onto the client's outcome.
///
/// - 2xx with a decodable `result` → `Ok`.
/// - 2xx otherwise → `Malformed`.
/// - anything else → `Status`, carrying `detail` only when it is a string
///   (validation errors can send a list; those fall back to the generic message).
pub fn decode_response(status: u16, body: &str) -> Result<ScrapeResult, ClientError> {
    if (200..300).contains(&status) {
        let parsed: SuccessBody = serde_json::from_str(body)
            .map_err(|e| ClientError::Malformed(e.to_string()))?;
        return parsed
            .result
            .ok_or_else(|| ClientError::Malformed(s!("missing `result` field")));
    }

    let detail = serde_json::from_str::<FailureBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|d| d.as_str().map(str::to_owned));

    Err(ClientError::Status { status, detail })
}
