// src/catalog/inventory.rs
//
// Inventory: stock items, warehouses and supply planning.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::query::Query;
use super::send_json;
use crate::config::CatalogDefaults;
use crate::error::ApiResult;
use crate::integrations::backend::{Method, RequestDispatcher};

pub const DEFAULT_PLANNING_DAYS: u32 = 7;

/// Body of a supply calculation. `state` is only sent when given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyCalculation {
    pub people: u32,
    pub days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

pub struct InventoryApi<'a> {
    dispatcher: &'a RequestDispatcher,
    defaults: &'a CatalogDefaults,
}

impl<'a> InventoryApi<'a> {
    pub fn new(dispatcher: &'a RequestDispatcher, defaults: &'a CatalogDefaults) -> Self {
        Self {
            dispatcher,
            defaults,
        }
    }

    pub async fn get_items(&self, category: Option<&str>) -> ApiResult<Value> {
        let endpoint = Query::new()
            .optional("category", category)
            .append_to("/inventory/items/");
        self.dispatcher.get(&endpoint).await
    }

    pub async fn get_item(&self, item_id: impl Display) -> ApiResult<Value> {
        self.dispatcher
            .get(&format!("/inventory/items/{}/", item_id))
            .await
    }

    pub async fn update_item<T>(&self, item_id: impl Display, data: &T) -> ApiResult<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = format!("/inventory/items/{}/", item_id);
        send_json(self.dispatcher, &endpoint, Method::Patch, data).await
    }

    pub async fn calculate_supplies(
        &self,
        people: u32,
        days: Option<u32>,
        state: Option<&str>,
    ) -> ApiResult<Value> {
        let body = SupplyCalculation {
            people,
            days: days.unwrap_or(DEFAULT_PLANNING_DAYS),
            state: state.filter(|s| !s.is_empty()).map(str::to_string),
        };
        send_json(self.dispatcher, "/inventory/calculate/", Method::Post, &body).await
    }

    pub async fn get_resource_needs(&self, state: Option<&str>, days: Option<u32>) -> ApiResult<Value> {
        let endpoint = Query::new()
            .param("state", state.unwrap_or(&self.defaults.state))
            .param("days", days.unwrap_or(DEFAULT_PLANNING_DAYS))
            .append_to("/inventory/resource-needs/");
        self.dispatcher.get(&endpoint).await
    }

    pub async fn get_warehouses(&self) -> ApiResult<Value> {
        self.dispatcher.get("/inventory/warehouses/").await
    }

    pub async fn get_warehouse(&self, warehouse_id: impl Display) -> ApiResult<Value> {
        self.dispatcher
            .get(&format!("/inventory/warehouses/{}/", warehouse_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::test_support::{expect_get, expect_request};
    use crate::integrations::backend::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_items_unfiltered_and_by_category() {
        let catalog = expect_get("/inventory/items/");
        catalog.inventory().get_items(None).await.unwrap();

        let catalog = expect_get("/inventory/items/?category=water");
        catalog.inventory().get_items(Some("water")).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_item_patches() {
        let body = json!({ "quantity": 250 });
        let catalog = expect_request(Method::Patch, "/inventory/items/5/", Some(body.clone()));
        catalog.inventory().update_item(5, &body).await.unwrap();
    }

    #[tokio::test]
    async fn test_calculate_supplies_defaults_days_and_omits_state() {
        let catalog = expect_request(
            Method::Post,
            "/inventory/calculate/",
            Some(json!({ "people": 1200, "days": 7 })),
        );
        catalog.inventory().calculate_supplies(1200, None, None).await.unwrap();
    }

    #[tokio::test]
    async fn test_calculate_supplies_with_state() {
        let catalog = expect_request(
            Method::Post,
            "/inventory/calculate/",
            Some(json!({ "people": 50, "days": 3, "state": "OK" })),
        );
        catalog
            .inventory()
            .calculate_supplies(50, Some(3), Some("OK"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_resource_needs_defaults() {
        let catalog = expect_get("/inventory/resource-needs/?state=TX&days=7");
        catalog.inventory().get_resource_needs(None, None).await.unwrap();
    }

    #[tokio::test]
    async fn test_warehouses() {
        let catalog = expect_get("/inventory/warehouses/");
        catalog.inventory().get_warehouses().await.unwrap();

        let catalog = expect_get("/inventory/warehouses/2/");
        catalog.inventory().get_warehouse(2).await.unwrap();
    }
}
