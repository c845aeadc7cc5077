// src/catalog/citizen.rs
//
// Citizen safety: status, alerts, contacts and shelters.

use std::fmt::Display;

use serde_json::Value;

use super::query::Query;
use crate::config::CatalogDefaults;
use crate::error::ApiResult;
use crate::integrations::backend::RequestDispatcher;

pub struct CitizenApi<'a> {
    dispatcher: &'a RequestDispatcher,
    defaults: &'a CatalogDefaults,
}

impl<'a> CitizenApi<'a> {
    pub fn new(dispatcher: &'a RequestDispatcher, defaults: &'a CatalogDefaults) -> Self {
        Self {
            dispatcher,
            defaults,
        }
    }

    fn by_state(&self, path: &str, state: Option<&str>) -> String {
        Query::new()
            .param("state", state.unwrap_or(&self.defaults.state))
            .append_to(path)
    }

    pub async fn get_safety_status(&self, state: Option<&str>) -> ApiResult<Value> {
        let endpoint = self.by_state("/citizen/safety-status/", state);
        self.dispatcher.get(&endpoint).await
    }

    pub async fn get_alerts(&self, state: Option<&str>) -> ApiResult<Value> {
        let endpoint = self.by_state("/citizen/alerts/", state);
        self.dispatcher.get(&endpoint).await
    }

    pub async fn get_emergency_contacts(&self) -> ApiResult<Value> {
        self.dispatcher.get("/citizen/emergency-contacts/").await
    }

    /// Locally registered shelters; `open_only` adds `open=true`.
    pub async fn get_shelters(&self, state: Option<&str>, open_only: bool) -> ApiResult<Value> {
        let endpoint = Query::new()
            .param("state", state.unwrap_or(&self.defaults.state))
            .flag("open", open_only)
            .append_to("/citizen/shelters/");
        self.dispatcher.get(&endpoint).await
    }

    pub async fn get_shelter(&self, shelter_id: impl Display) -> ApiResult<Value> {
        self.dispatcher
            .get(&format!("/citizen/shelters/{}/", shelter_id))
            .await
    }

    pub async fn get_fema_shelters(&self, state: Option<&str>) -> ApiResult<Value> {
        let endpoint = self.by_state("/citizen/shelters/fema/", state);
        self.dispatcher.get(&endpoint).await
    }

    /// Local and FEMA shelters combined.
    pub async fn get_all_shelters(&self, state: Option<&str>) -> ApiResult<Value> {
        let endpoint = self.by_state("/citizen/shelters/all/", state);
        self.dispatcher.get(&endpoint).await
    }
}
