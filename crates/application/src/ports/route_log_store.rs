//! Route log store port
//!
//! Persistence collaborator for chosen-route history. The route comparison
//! pipeline never touches this; only callers that want history do.

use async_trait::async_trait;
use domain::{NewRouteLog, RouteLog};

use crate::error::ApplicationError;

/// Port for reading and appending per-user route logs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RouteLogStorePort: Send + Sync {
    /// All route logs for a user, oldest first
    async fn logs_for(&self, user_id: &str) -> Result<Vec<RouteLog>, ApplicationError>;

    /// Append a route log, assigning id and timestamp
    async fn add(&self, log: NewRouteLog) -> Result<RouteLog, ApplicationError>;
}
