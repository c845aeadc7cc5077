// src/catalog/analytics.rs
//
// Analytics: overview, forecasts, risk, shelter recommendation and
// consumption anomaly detection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::query::Query;
use super::send_json;
use crate::config::CatalogDefaults;
use crate::error::ApiResult;
use crate::integrations::backend::{Method, RequestDispatcher};

pub const DEFAULT_FORECAST_MONTHS: u32 = 6;

/// Accommodation requirements for a shelter recommendation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShelterNeeds {
    pub needs_ada: bool,
    pub has_pets: bool,
}

/// Body of a consumption anomaly check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyReport {
    pub resource: String,
    pub current_rate: f64,
    pub historical_avg: f64,
    pub historical_std: f64,
}

pub struct AnalyticsApi<'a> {
    dispatcher: &'a RequestDispatcher,
    defaults: &'a CatalogDefaults,
}

impl<'a> AnalyticsApi<'a> {
    pub fn new(dispatcher: &'a RequestDispatcher, defaults: &'a CatalogDefaults) -> Self {
        Self {
            dispatcher,
            defaults,
        }
    }

    pub async fn get_overview(&self) -> ApiResult<Value> {
        self.dispatcher.get("/analytics/").await
    }

    pub async fn forecast_disasters(&self, state: Option<&str>, months: Option<u32>) -> ApiResult<Value> {
        let endpoint = Query::new()
            .param("state", state.unwrap_or(&self.defaults.state))
            .param("months", months.unwrap_or(DEFAULT_FORECAST_MONTHS))
            .append_to("/analytics/forecast/disasters/");
        self.dispatcher.get(&endpoint).await
    }

    pub async fn get_risk_score(&self, state: Option<&str>) -> ApiResult<Value> {
        let endpoint = Query::new()
            .param("state", state.unwrap_or(&self.defaults.state))
            .append_to("/analytics/risk/area/");
        self.dispatcher.get(&endpoint).await
    }

    /// Nearest suitable open shelters. `needs_ada` / `has_pets` are only
    /// sent when requested.
    pub async fn recommend_shelter(
        &self,
        lat: f64,
        lon: f64,
        state: Option<&str>,
        needs: ShelterNeeds,
    ) -> ApiResult<Value> {
        let endpoint = Query::new()
            .param("lat", lat)
            .param("lon", lon)
            .param("state", state.unwrap_or(&self.defaults.state))
            .flag("needs_ada", needs.needs_ada)
            .flag("has_pets", needs.has_pets)
            .append_to("/analytics/recommend/shelter/");
        self.dispatcher.get(&endpoint).await
    }

    pub async fn detect_anomaly(
        &self,
        resource: &str,
        current_rate: f64,
        historical_avg: f64,
        historical_std: f64,
    ) -> ApiResult<Value> {
        let body = AnomalyReport {
            resource: resource.to_string(),
            current_rate,
            historical_avg,
            historical_std,
        };
        send_json(self.dispatcher, "/analytics/anomaly/consumption/", Method::Post, &body).await
    }
}
