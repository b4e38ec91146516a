//! Health service

use tracing::{instrument, warn};

use crate::dto::ReadinessResponse;

use super::context::ServiceContext;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    /// Create a new HealthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Ping the storage backend
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        match self.ctx.health_check().ping().await {
            Ok(()) => ReadinessResponse::from_storage(true),
            Err(e) => {
                warn!(error = %e, "Storage health check failed");
                ReadinessResponse::from_storage(false)
            }
        }
    }
}
