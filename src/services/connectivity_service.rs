// src/services/connectivity_service.rs
//
// Connectivity Service - smoke test of the backend surface
//
// Runs one representative read per resource group, in order, and reports
// which ones answered. A probe passes when the call resolves and the body
// does not carry `"success": false`.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::catalog::EndpointCatalog;
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Health,
    DashboardStats,
    WeatherAlerts,
    Vehicles,
    Inventory,
    Shelters,
    RiskScore,
}

impl Probe {
    pub const ALL: [Probe; 7] = [
        Probe::Health,
        Probe::DashboardStats,
        Probe::WeatherAlerts,
        Probe::Vehicles,
        Probe::Inventory,
        Probe::Shelters,
        Probe::RiskScore,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Probe::Health => "Health Check",
            Probe::DashboardStats => "Dashboard Stats",
            Probe::WeatherAlerts => "Weather Alerts",
            Probe::Vehicles => "Vehicles",
            Probe::Inventory => "Inventory",
            Probe::Shelters => "Shelters",
            Probe::RiskScore => "Risk Score",
        }
    }

    async fn execute(&self, catalog: &EndpointCatalog) -> ApiResult<Value> {
        match self {
            Probe::Health => catalog.health().check().await,
            Probe::DashboardStats => catalog.dashboard().get_stats(None).await,
            Probe::WeatherAlerts => catalog.dashboard().get_weather_alerts(None).await,
            Probe::Vehicles => catalog.logistics().get_vehicles(None, None).await,
            Probe::Inventory => catalog.inventory().get_items(None).await,
            Probe::Shelters => catalog.citizen().get_shelters(None, false).await,
            Probe::RiskScore => catalog.analytics().get_risk_score(None).await,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    Passed,
    /// The call resolved but the body reported `"success": false`.
    Reported,
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    pub probe: Probe,
    pub outcome: ProbeOutcome,
}

impl ProbeResult {
    pub fn passed(&self) -> bool {
        self.outcome == ProbeOutcome::Passed
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            ProbeOutcome::Passed => write!(f, "PASS {}: OK", self.probe.name()),
            ProbeOutcome::Reported => write!(f, "FAIL {}: FAILED", self.probe.name()),
            ProbeOutcome::Failed(err) => write!(f, "FAIL {}: {}", self.probe.name(), err),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectivityReport {
    pub results: Vec<ProbeResult>,
}

impl ConnectivityReport {
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(ProbeResult::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ProbeResult> {
        self.results.iter().filter(|r| !r.passed())
    }
}

pub struct ConnectivityService {
    catalog: Arc<EndpointCatalog>,
}

impl ConnectivityService {
    pub fn new(catalog: Arc<EndpointCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn run(&self, probe: Probe) -> ProbeResult {
        let outcome = match probe.execute(&self.catalog).await {
            Ok(body) if reports_failure(&body) => ProbeOutcome::Reported,
            Ok(_) => ProbeOutcome::Passed,
            Err(err) => ProbeOutcome::Failed(err),
        };

        let result = ProbeResult { probe, outcome };
        log::debug!("{}", result);
        result
    }

    /// Runs every probe sequentially.
    pub async fn run_all(&self) -> ConnectivityReport {
        let mut report = ConnectivityReport::default();
        for probe in Probe::ALL {
            report.results.push(self.run(probe).await);
        }
        report
    }
}

fn reports_failure(body: &Value) -> bool {
    body.get("success") == Some(&Value::Bool(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalogDefaults;
    use crate::error::TransportFailure;
    use crate::integrations::backend::transport::MockTransport;
    use crate::integrations::backend::{HttpResponse, RequestDispatcher};

    const BASE: &str = "http://localhost:8000/api/v1";

    fn service(transport: MockTransport) -> ConnectivityService {
        let dispatcher = RequestDispatcher::new(BASE, Arc::new(transport));
        let catalog = EndpointCatalog::new(Arc::new(dispatcher), CatalogDefaults::default());
        ConnectivityService::new(Arc::new(catalog))
    }

    #[tokio::test]
    async fn test_all_probes_pass() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(7)
            .returning(|_| Ok(HttpResponse::new(200, r#"{"status": "healthy"}"#)));

        let report = service(transport).run_all().await;

        assert_eq!(report.results.len(), 7);
        assert!(report.all_passed());
        assert_eq!(report.passed_count(), 7);
        let names: Vec<_> = report.results.iter().map(|r| r.probe.name()).collect();
        assert_eq!(names[0], "Health Check");
        assert_eq!(names[6], "Risk Score");
    }

    #[tokio::test]
    async fn test_success_false_is_reported() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_| Ok(HttpResponse::new(200, r#"{"success": false}"#)));

        let result = service(transport).run(Probe::DashboardStats).await;
        assert_eq!(result.outcome, ProbeOutcome::Reported);
        assert_eq!(result.to_string(), "FAIL Dashboard Stats: FAILED");
    }

    #[tokio::test]
    async fn test_mixed_outcomes() {
        let mut transport = MockTransport::new();
        transport.expect_send().returning(|req| {
            if req.url.contains("/logistics/") {
                Ok(HttpResponse::new(503, r#"{"detail": "Fleet service down"}"#))
            } else if req.url.contains("/health/") {
                Err(TransportFailure("connection refused".to_string()))
            } else {
                Ok(HttpResponse::new(200, "{}"))
            }
        });

        let report = service(transport).run_all().await;

        assert!(!report.all_passed());
        assert_eq!(report.passed_count(), 5);
        let failures: Vec<String> = report.failures().map(|r| r.to_string()).collect();
        assert_eq!(
            failures,
            vec![
                "FAIL Health Check: connection refused".to_string(),
                "FAIL Vehicles: Fleet service down".to_string(),
            ]
        );
    }
}
