// src/catalog/health.rs

use serde_json::Value;

use crate::error::ApiResult;
use crate::integrations::backend::RequestDispatcher;

pub struct HealthApi<'a> {
    dispatcher: &'a RequestDispatcher,
}

impl<'a> HealthApi<'a> {
    pub fn new(dispatcher: &'a RequestDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Liveness probe: `{"status": "healthy", "service": .., "version": ..}`.
    pub async fn check(&self) -> ApiResult<Value> {
        self.dispatcher.get("/health/").await
    }

    /// API root listing the resource groups.
    pub async fn api_root(&self) -> ApiResult<Value> {
        self.dispatcher.get("/").await
    }
}
