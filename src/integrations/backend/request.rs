// src/integrations/backend/request.rs
//
// Request shapes shared by the dispatcher and its transports.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call overrides handed to `RequestDispatcher::request`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestConfig {
    pub method: Method,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl RequestConfig {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Builds a config whose body is `payload` serialized as JSON.
    pub fn json<T>(method: Method, payload: &T) -> Result<Self, serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self {
            method,
            headers: BTreeMap::new(),
            body: Some(serde_json::to_string(payload)?),
        })
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// A fully resolved request, ready for a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Header lookup, ignoring ASCII case in the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Overlays `overrides` on top of the JSON content-type default.
///
/// Header names compare case-insensitively; an override replaces the default
/// entry rather than sitting next to it.
pub fn merge_headers(overrides: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    let mut merged = BTreeMap::new();
    merged.insert(CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string());

    for (name, value) in overrides {
        merged.retain(|existing: &String, _| !existing.eq_ignore_ascii_case(name));
        merged.insert(name.clone(), value.clone());
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_method_is_get() {
        assert_eq!(RequestConfig::default().method, Method::Get);
        assert_eq!(Method::Patch.to_string(), "PATCH");
    }

    #[test]
    fn test_json_content_type_added_by_default() {
        let merged = merge_headers(&BTreeMap::new());
        assert_eq!(merged.get("Content-Type").map(String::as_str), Some("application/json"));
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_caller_header_wins_regardless_of_case() {
        let config = RequestConfig::default().header("content-type", "text/plain");
        let merged = merge_headers(&config.headers);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get("content-type").map(String::as_str), Some("text/plain"));
    }

    #[test]
    fn test_extra_headers_are_kept() {
        let config = RequestConfig::default().header("X-Trace", "abc");
        let merged = merge_headers(&config.headers);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("X-Trace").map(String::as_str), Some("abc"));
    }

    #[test]
    fn test_json_body_serialized() {
        let config = RequestConfig::json(Method::Post, &serde_json::json!({ "people": 10 })).unwrap();
        assert_eq!(config.method, Method::Post);
        assert_eq!(config.body.as_deref(), Some(r#"{"people":10}"#));
    }

    #[test]
    fn test_request_header_lookup_is_case_insensitive() {
        let request = HttpRequest {
            method: Method::Get,
            url: "http://localhost/x".to_string(),
            headers: merge_headers(&BTreeMap::new()),
            body: None,
        };
        assert_eq!(request.header("CONTENT-TYPE"), Some("application/json"));
    }
}
