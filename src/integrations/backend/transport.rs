// src/integrations/backend/transport.rs
//
// HTTP transport seam
//
// The dispatcher only needs "send this request, give me status and body".
// Production uses reqwest; tests substitute a mock.

use async_trait::async_trait;
use reqwest::Client;

use super::request::{HttpRequest, HttpResponse, Method};
use crate::error::TransportFailure;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one HTTP exchange. Any non-network status is a successful
    /// exchange; only failures to complete it are errors.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure>;
}

/// reqwest-backed transport.
///
/// No timeout is configured: a call resolves or fails exactly once, when the
/// underlying connection does.
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(Client::builder().build()?))
    }

    pub fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure> {
        let mut builder = self
            .http_client
            .request(Self::method(request.method), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
