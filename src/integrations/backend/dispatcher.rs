// src/integrations/backend/dispatcher.rs
//
// Request Dispatcher
//
// ARCHITECTURE:
// - Joins the configured base address with an endpoint fragment
// - Applies the JSON content-type default under caller headers
// - Normalizes every outcome into ApiResult / ApiError
//
// RULES:
// - The body is parsed as JSON before the status is looked at
// - A body that is not JSON is a transport failure, on any status
// - No retries, no timeout, no cancellation

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::request::{merge_headers, HttpRequest, HttpResponse, RequestConfig};
use super::transport::Transport;
use crate::error::{ApiError, ApiResult};

pub struct RequestDispatcher {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl RequestDispatcher {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Executes `endpoint` with `options` and returns the parsed JSON body.
    pub async fn request(&self, endpoint: &str, options: RequestConfig) -> ApiResult<Value> {
        let url = self.url_for(endpoint);
        log::debug!("API Request: {} {}", options.method, url);

        let request = HttpRequest {
            method: options.method,
            url,
            headers: merge_headers(&options.headers),
            body: options.body,
        };

        let result = match self.transport.send(request).await {
            Ok(response) => resolve(endpoint, &response),
            Err(failure) => Err(ApiError::transport(endpoint, failure.to_string())),
        };

        if let Err(err) = &result {
            log::error!("API Error [{}]: {}", endpoint, err);
        }

        result
    }

    pub async fn get(&self, endpoint: &str) -> ApiResult<Value> {
        self.request(endpoint, RequestConfig::default()).await
    }

    /// Like `request`, then deserializes the body into `T`.
    ///
    /// A body that does not fit `T` is reported as a transport failure.
    pub async fn request_as<T>(&self, endpoint: &str, options: RequestConfig) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let value = self.request(endpoint, options).await?;
        serde_json::from_value(value).map_err(|e| ApiError::transport(endpoint, e.to_string()))
    }
}

fn resolve(endpoint: &str, response: &HttpResponse) -> ApiResult<Value> {
    let data: Value = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::transport(endpoint, e.to_string()))?;

    if response.is_success() {
        return Ok(data);
    }

    let status = response.status;
    Err(ApiError::backend(endpoint, status, failure_message(&data, status)))
}

/// `detail`, then `error`, then `HTTP {status}`.
fn failure_message(data: &Value, status: u16) -> String {
    ["detail", "error"]
        .iter()
        .find_map(|key| data.get(key).and_then(message_text))
        .unwrap_or_else(|| format!("HTTP {}", status))
}

/// Empty, null, false and zero values do not count as a message.
fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
