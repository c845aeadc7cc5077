// src/application/state.rs

use std::sync::Arc;

use crate::catalog::EndpointCatalog;
use crate::config::{ApiConfig, NotificationConfig};
use crate::error::ConfigError;
use crate::integrations::backend::{ReqwestTransport, RequestDispatcher, Transport};
use crate::notifications::{NotificationCenter, Surface};
use crate::services::ConnectivityService;

/// Everything calling code needs, wired once at startup.
/// All fields are Arc-wrapped so they can be handed to tasks and views.
pub struct AppState {
    pub config: ApiConfig,
    pub dispatcher: Arc<RequestDispatcher>,
    pub catalog: Arc<EndpointCatalog>,
    pub notifications: Arc<NotificationCenter>,
    pub connectivity: Arc<ConnectivityService>,
}

impl AppState {
    pub fn new(
        config: ApiConfig,
        transport: Arc<dyn Transport>,
        surface: Arc<dyn Surface>,
        notification_config: NotificationConfig,
    ) -> Self {
        let dispatcher = Arc::new(RequestDispatcher::new(config.base_url.clone(), transport));
        let catalog = Arc::new(EndpointCatalog::new(
            dispatcher.clone(),
            config.defaults.clone(),
        ));
        let notifications = Arc::new(NotificationCenter::new(surface, notification_config));
        let connectivity = Arc::new(ConnectivityService::new(catalog.clone()));

        Self {
            config,
            dispatcher,
            catalog,
            notifications,
            connectivity,
        }
    }

    /// Production wiring over a reqwest transport.
    pub fn connect(
        config: ApiConfig,
        surface: Arc<dyn Surface>,
        notification_config: NotificationConfig,
    ) -> Result<Self, ConfigError> {
        let transport = Arc::new(ReqwestTransport::new()?);
        Ok(Self::new(config, transport, surface, notification_config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::backend::transport::MockTransport;
    use crate::notifications::MemorySurface;

    #[test]
    fn test_components_share_configuration() {
        let config = ApiConfig::with_base_url("https://shield.example/api/v1")
            .unwrap()
            .with_default_state("FL");
        let state = AppState::new(
            config,
            Arc::new(MockTransport::new()),
            Arc::new(MemorySurface::new()),
            NotificationConfig::default(),
        );

        assert_eq!(state.dispatcher.base_url(), "https://shield.example/api/v1");
        assert_eq!(state.catalog.dispatcher().base_url(), "https://shield.example/api/v1");
        assert_eq!(state.catalog.defaults().state, "FL");
    }

    #[test]
    fn test_connect_builds_reqwest_stack() {
        let state = AppState::connect(
            ApiConfig::default(),
            Arc::new(MemorySurface::new()),
            NotificationConfig::default(),
        )
        .unwrap();
        assert_eq!(state.dispatcher.base_url(), "http://localhost:8000/api/v1");
    }
}
