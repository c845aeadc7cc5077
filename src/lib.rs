// src/lib.rs
// Civil Shield - client access layer for the emergency-management backend
//
// Architecture:
// - Dispatcher: one place where requests are sent and failures normalized
// - Catalog: pure argument → request translators per resource group
// - Notifications: transient toasts, independent of the request layer
// - Explicit wiring: no globals, state is passed to whoever needs it

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod error;
pub mod formatting;
pub mod integrations;
pub mod logging;

// ============================================================================
// BACKEND SURFACE
// ============================================================================

pub mod catalog;
pub mod services;

// ============================================================================
// PRESENTATION
// ============================================================================

pub mod application;
pub mod notifications;

// ============================================================================
// PUBLIC API - Configuration & Errors
// ============================================================================

pub use config::{ApiConfig, CatalogDefaults, NotificationConfig};
pub use error::{ApiError, ApiResult, ConfigError, TransportFailure};

// ============================================================================
// PUBLIC API - Request Dispatch
// ============================================================================

pub use integrations::{
    HttpRequest, HttpResponse, Method, ReqwestTransport, RequestConfig, RequestDispatcher,
    Transport,
};

// ============================================================================
// PUBLIC API - Endpoint Catalog
// ============================================================================

pub use catalog::{
    AnalyticsApi, AnomalyReport, CitizenApi, DashboardApi, EndpointCatalog, HealthApi,
    InventoryApi, LogisticsApi, PositionUpdate, ShelterNeeds, SupplyCalculation,
};

// ============================================================================
// PUBLIC API - Notifications & Formatting
// ============================================================================

pub use formatting::{format_date, format_date_in, format_time, format_time_in, Timestamp};
pub use notifications::{
    MemorySurface, Notification, NotificationCenter, NotificationId, Severity, Surface,
    TerminalSurface,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, ErrorResponse, ErrorType, NotifyOnError, ToErrorResponse};
pub use services::{ConnectivityReport, ConnectivityService, Probe, ProbeOutcome, ProbeResult};
