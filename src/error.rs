// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{}", service_message(.status, .detail))]
    Service {
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("{0}")]
    Validation(String),
}

impl ClientError {
    pub fn service(status: StatusCode, detail: Option<String>) -> Self {
        ClientError::Service { status, detail }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        ClientError::Decode(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        ClientError::Validation(msg.into())
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Service { status, .. } => Some(*status),
            ClientError::Network(e) => e.status(),
            _ => None,
        }
    }
}

fn service_message(status: &StatusCode, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.to_string(),
        None => match status.canonical_reason() {
            Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
            None => format!("HTTP {}", status.as_u16()),
        },
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid base URL '{0}': expected http:// or https://")]
    InvalidBaseUrl(String),
}
