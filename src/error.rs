// src/error.rs
use std::io;

use thiserror::Error;

use crate::config::consts::{CONNECT_FAILED, MALFORMED_RESPONSE};

#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never produced an HTTP response (DNS, refused, reset, …).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response. `detail` is the backend's message, when it sent one.
    #[error("backend returned HTTP {status}{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Status { status: u16, detail: Option<String> },

    /// 2xx response without a usable `result`.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Worker went away without reporting an outcome.
    #[error("request worker ended without a response")]
    Interrupted,

    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl ClientError {
    /// The single line shown inline under the URL field.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Status { detail: Some(d), .. } if !d.is_empty() => d.clone(),
            ClientError::Malformed(_) => s!(MALFORMED_RESPONSE),
            _ => s!(CONNECT_FAILED),
        }
    }
}
