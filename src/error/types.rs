// src/error/types.rs
use serde::Serialize;
use thiserror::Error;

/// Failure surfaced by every backend call.
///
/// Both variants carry the endpoint that originated the call so callers can
/// report where it failed. `Display` renders only the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request reached the server and the server reported a failure.
    #[error("{message}")]
    Backend {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// The request never completed, or its body could not be read as JSON.
    #[error("{message}")]
    Transport { endpoint: String, message: String },
}

impl ApiError {
    pub fn backend(endpoint: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        ApiError::Backend {
            endpoint: endpoint.into(),
            status,
            message: message.into(),
        }
    }

    pub fn transport(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Transport {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Backend { message, .. } | ApiError::Transport { message, .. } => message,
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::Backend { endpoint, .. } | ApiError::Transport { endpoint, .. } => endpoint,
        }
    }

    /// HTTP status, present only when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Backend { status, .. } => Some(*status),
            ApiError::Transport { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl Serialize for ApiError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Raised by a `Transport` when the HTTP exchange itself fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportFailure(pub String);

impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        TransportFailure(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Base URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
