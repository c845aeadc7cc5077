// src/catalog/dashboard.rs
//
// Dashboard: stats, weather, disasters, alerts and incidents.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use super::query::Query;
use super::send_json;
use crate::config::CatalogDefaults;
use crate::error::ApiResult;
use crate::integrations::backend::{Method, RequestDispatcher};

pub const DEFAULT_DISASTER_DAYS: u32 = 30;

pub struct DashboardApi<'a> {
    dispatcher: &'a RequestDispatcher,
    defaults: &'a CatalogDefaults,
}

impl<'a> DashboardApi<'a> {
    pub fn new(dispatcher: &'a RequestDispatcher, defaults: &'a CatalogDefaults) -> Self {
        Self {
            dispatcher,
            defaults,
        }
    }

    fn state<'s>(&'s self, state: Option<&'s str>) -> &'s str {
        state.unwrap_or(&self.defaults.state)
    }

    pub async fn get_stats(&self, state: Option<&str>) -> ApiResult<Value> {
        let endpoint = Query::new()
            .param("state", self.state(state))
            .append_to("/dashboard/stats/");
        self.dispatcher.get(&endpoint).await
    }

    pub async fn get_weather_alerts(&self, state: Option<&str>) -> ApiResult<Value> {
        self.get_weather_alerts_filtered(state, &[]).await
    }

    /// Weather alerts restricted to the given NWS severities
    /// (e.g. `Extreme`, `Severe`). An empty slice means no filter.
    pub async fn get_weather_alerts_filtered(
        &self,
        state: Option<&str>,
        severities: &[&str],
    ) -> ApiResult<Value> {
        let severity = severities.join(",");
        let endpoint = Query::new()
            .param("state", self.state(state))
            .optional("severity", Some(severity.as_str()))
            .append_to("/dashboard/weather/alerts/");
        self.dispatcher.get(&endpoint).await
    }

    pub async fn get_weather_forecast(&self, lat: Option<f64>, lon: Option<f64>) -> ApiResult<Value> {
        let endpoint = Query::new()
            .param("lat", lat.unwrap_or(self.defaults.lat))
            .param("lon", lon.unwrap_or(self.defaults.lon))
            .append_to("/dashboard/weather/forecast/");
        self.dispatcher.get(&endpoint).await
    }

    /// Disaster declarations over the last `days` (default 30), optionally
    /// limited to one state. Unlike most endpoints the state has no default.
    pub async fn get_disasters(&self, state: Option<&str>, days: Option<u32>) -> ApiResult<Value> {
        let endpoint = Query::new()
            .param("days", days.unwrap_or(DEFAULT_DISASTER_DAYS))
            .optional("state", state)
            .append_to("/dashboard/disasters/");
        self.dispatcher.get(&endpoint).await
    }

    pub async fn get_alerts(&self) -> ApiResult<Value> {
        self.dispatcher.get("/dashboard/alerts/").await
    }

    pub async fn get_alert(&self, alert_id: impl Display) -> ApiResult<Value> {
        self.dispatcher
            .get(&format!("/dashboard/alerts/{}/", alert_id))
            .await
    }

    pub async fn create_alert<T>(&self, data: &T) -> ApiResult<Value>
    where
        T: Serialize + ?Sized,
    {
        send_json(self.dispatcher, "/dashboard/alerts/", Method::Post, data).await
    }

    pub async fn get_incidents(&self, status: Option<&str>) -> ApiResult<Value> {
        let endpoint = Query::new()
            .optional("status", status)
            .append_to("/dashboard/incidents/");
        self.dispatcher.get(&endpoint).await
    }

    pub async fn get_incident(&self, incident_id: impl Display) -> ApiResult<Value> {
        self.dispatcher
            .get(&format!("/dashboard/incidents/{}/", incident_id))
            .await
    }

    pub async fn create_incident<T>(&self, data: &T) -> ApiResult<Value>
    where
        T: Serialize + ?Sized,
    {
        send_json(self.dispatcher, "/dashboard/incidents/", Method::Post, data).await
    }

    /// Partial update; only the fields present in `data` change.
    pub async fn update_incident<T>(&self, incident_id: impl Display, data: &T) -> ApiResult<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = format!("/dashboard/incidents/{}/", incident_id);
        send_json(self.dispatcher, &endpoint, Method::Patch, data).await
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::test_support::{expect_get, expect_request};
    use crate::integrations::backend::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_stats_default_state() {
        let catalog = expect_get("/dashboard/stats/?state=TX");
        catalog.dashboard().get_stats(None).await.unwrap();
    }

    #[tokio::test]
    async fn test_stats_explicit_state() {
        let catalog = expect_get("/dashboard/stats/?state=FL");
        catalog.dashboard().get_stats(Some("FL")).await.unwrap();
    }

    #[tokio::test]
    async fn test_weather_alerts_without_filter() {
        let catalog = expect_get("/dashboard/weather/alerts/?state=TX");
        catalog.dashboard().get_weather_alerts(None).await.unwrap();
    }

    #[tokio::test]
    async fn test_weather_alerts_with_severities() {
        let catalog = expect_get("/dashboard/weather/alerts/?state=TX&severity=Extreme%2CSevere");
        catalog
            .dashboard()
            .get_weather_alerts_filtered(None, &["Extreme", "Severe"])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_forecast_defaults_to_city_centroid() {
        let catalog = expect_get("/dashboard/weather/forecast/?lat=30.2672&lon=-97.7431");
        catalog.dashboard().get_weather_forecast(None, None).await.unwrap();
    }

    #[tokio::test]
    async fn test_disasters_default_window_without_state() {
        let catalog = expect_get("/dashboard/disasters/?days=30");
        catalog.dashboard().get_disasters(None, None).await.unwrap();
    }

    #[tokio::test]
    async fn test_disasters_with_state_and_window() {
        let catalog = expect_get("/dashboard/disasters/?days=90&state=LA");
        catalog.dashboard().get_disasters(Some("LA"), Some(90)).await.unwrap();
    }

    #[tokio::test]
    async fn test_incidents_without_status_has_no_query() {
        let catalog = expect_get("/dashboard/incidents/");
        catalog.dashboard().get_incidents(None).await.unwrap();
    }

    #[tokio::test]
    async fn test_incidents_filtered_by_status() {
        let catalog = expect_get("/dashboard/incidents/?status=open");
        catalog.dashboard().get_incidents(Some("open")).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_incident_posts_body() {
        let body = json!({ "title": "Flooding on I-35", "severity": "high" });
        let catalog = expect_request(Method::Post, "/dashboard/incidents/", Some(body.clone()));
        catalog.dashboard().create_incident(&body).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_incident_patches() {
        let body = json!({ "status": "resolved" });
        let catalog = expect_request(Method::Patch, "/dashboard/incidents/12/", Some(body.clone()));
        catalog.dashboard().update_incident(12, &body).await.unwrap();
    }

    #[tokio::test]
    async fn test_alert_reads() {
        let catalog = expect_get("/dashboard/alerts/");
        catalog.dashboard().get_alerts().await.unwrap();

        let catalog = expect_get("/dashboard/alerts/3/");
        catalog.dashboard().get_alert(3).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_alert_posts_body() {
        let body = json!({ "title": "Boil water notice" });
        let catalog = expect_request(Method::Post, "/dashboard/alerts/", Some(body.clone()));
        catalog.dashboard().create_alert(&body).await.unwrap();
    }
}
