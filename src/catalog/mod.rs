// src/catalog/mod.rs
//
// Endpoint Catalog
//
// RULES:
// - Each function only translates arguments into path, query and body
// - All network work is delegated to RequestDispatcher
// - Omitted arguments fall back to CatalogDefaults
// - Optional flags are omitted when unset, never sent as false

pub mod analytics;
pub mod citizen;
pub mod dashboard;
pub mod health;
pub mod inventory;
pub mod logistics;
pub mod query;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::config::CatalogDefaults;
use crate::error::{ApiError, ApiResult};
use crate::integrations::backend::{Method, RequestConfig, RequestDispatcher};

pub use analytics::{AnalyticsApi, AnomalyReport, ShelterNeeds};
pub use citizen::CitizenApi;
pub use dashboard::DashboardApi;
pub use health::HealthApi;
pub use inventory::{InventoryApi, SupplyCalculation};
pub use logistics::{LogisticsApi, PositionUpdate};
pub use query::Query;

/// Namespaced access to every backend resource group.
#[derive(Clone)]
pub struct EndpointCatalog {
    dispatcher: Arc<RequestDispatcher>,
    defaults: CatalogDefaults,
}

impl EndpointCatalog {
    pub fn new(dispatcher: Arc<RequestDispatcher>, defaults: CatalogDefaults) -> Self {
        Self {
            dispatcher,
            defaults,
        }
    }

    pub fn dispatcher(&self) -> &RequestDispatcher {
        &self.dispatcher
    }

    pub fn defaults(&self) -> &CatalogDefaults {
        &self.defaults
    }

    pub fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi::new(&self.dispatcher, &self.defaults)
    }

    pub fn logistics(&self) -> LogisticsApi<'_> {
        LogisticsApi::new(&self.dispatcher)
    }

    pub fn inventory(&self) -> InventoryApi<'_> {
        InventoryApi::new(&self.dispatcher, &self.defaults)
    }

    pub fn citizen(&self) -> CitizenApi<'_> {
        CitizenApi::new(&self.dispatcher, &self.defaults)
    }

    pub fn analytics(&self) -> AnalyticsApi<'_> {
        AnalyticsApi::new(&self.dispatcher, &self.defaults)
    }

    pub fn health(&self) -> HealthApi<'_> {
        HealthApi::new(&self.dispatcher)
    }
}

/// Sends `payload` as a JSON body.
///
/// A payload that cannot be serialized never leaves the process and is
/// reported as a transport failure for `endpoint`.
pub(crate) async fn send_json<T>(
    dispatcher: &RequestDispatcher,
    endpoint: &str,
    method: Method,
    payload: &T,
) -> ApiResult<Value>
where
    T: Serialize + ?Sized,
{
    let options = RequestConfig::json(method, payload)
        .map_err(|e| ApiError::transport(endpoint, e.to_string()))?;
    dispatcher.request(endpoint, options).await
}
