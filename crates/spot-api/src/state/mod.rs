//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, the identity verifier, and configuration.

use std::sync::Arc;

use spot_common::{AppConfig, IdentityVerifier};
use spot_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Bearer token verification
    identity_verifier: Arc<dyn IdentityVerifier>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        identity_verifier: Arc<dyn IdentityVerifier>,
        config: AppConfig,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            identity_verifier,
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the identity verifier
    pub fn identity_verifier(&self) -> &dyn IdentityVerifier {
        self.identity_verifier.as_ref()
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("identity_verifier", &"IdentityVerifier")
            .field("config", &"AppConfig")
            .finish()
    }
}
