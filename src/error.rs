use reqwest::StatusCode;
use thiserror::Error;

/// Error type surfaced by every adapter operation.
#[derive(Debug, Error)]
pub enum CrmError {
    #[error("{0}")]
    Validation(String),

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Agile CRM returned {status} for {endpoint}: {body}")]
    Api {
        status: StatusCode,
        endpoint: String,
        body: String,
    },

    #[error("invalid JSON in {status} response from {endpoint}: {source}")]
    Decode {
        status: StatusCode,
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CrmError {
    pub fn validation(message: impl Into<String>) -> Self {
        CrmError::Validation(message.into())
    }

    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        CrmError::Transport {
            endpoint: endpoint.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CrmError>;
