// src/catalog/logistics.rs
//
// Logistics: fleet listing, vehicle records, positions and dispatch.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::query::Query;
use super::send_json;
use crate::error::ApiResult;
use crate::integrations::backend::{Method, RequestDispatcher};

/// Body of a position report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub lat: f64,
    pub lon: f64,
}

pub struct LogisticsApi<'a> {
    dispatcher: &'a RequestDispatcher,
}

impl<'a> LogisticsApi<'a> {
    pub fn new(dispatcher: &'a RequestDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Vehicles filtered by status and/or type. With neither filter the
    /// request carries no query string at all.
    pub async fn get_vehicles(
        &self,
        status: Option<&str>,
        vehicle_type: Option<&str>,
    ) -> ApiResult<Value> {
        let endpoint = Query::new()
            .optional("status", status)
            .optional("type", vehicle_type)
            .append_to("/logistics/vehicles/");
        self.dispatcher.get(&endpoint).await
    }

    pub async fn get_vehicle(&self, vehicle_id: impl Display) -> ApiResult<Value> {
        self.dispatcher
            .get(&format!("/logistics/vehicles/{}/", vehicle_id))
            .await
    }

    pub async fn create_vehicle<T>(&self, data: &T) -> ApiResult<Value>
    where
        T: Serialize + ?Sized,
    {
        send_json(self.dispatcher, "/logistics/vehicles/", Method::Post, data).await
    }

    /// Full replacement of a vehicle record.
    pub async fn update_vehicle<T>(&self, vehicle_id: impl Display, data: &T) -> ApiResult<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = format!("/logistics/vehicles/{}/", vehicle_id);
        send_json(self.dispatcher, &endpoint, Method::Put, data).await
    }

    pub async fn update_vehicle_position(
        &self,
        vehicle_id: impl Display,
        lat: f64,
        lon: f64,
    ) -> ApiResult<Value> {
        let endpoint = format!("/logistics/vehicles/{}/position/", vehicle_id);
        send_json(self.dispatcher, &endpoint, Method::Put, &PositionUpdate { lat, lon }).await
    }

    pub async fn dispatch_vehicle(
        &self,
        vehicle_id: impl Display,
        destination: &str,
    ) -> ApiResult<Value> {
        let endpoint = format!("/logistics/vehicles/{}/dispatch/", vehicle_id);
        send_json(
            self.dispatcher,
            &endpoint,
            Method::Post,
            &json!({ "destination": destination }),
        )
        .await
    }
}
