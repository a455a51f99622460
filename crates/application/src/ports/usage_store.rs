//! Usage record store port

use async_trait::async_trait;
use domain::{NewUsageRecord, UsageRecord};

use crate::error::ApplicationError;

/// Port for reading and appending per-user consumption records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsageStorePort: Send + Sync {
    /// All usage records for a user, oldest first
    async fn records_for(&self, user_id: &str) -> Result<Vec<UsageRecord>, ApplicationError>;

    /// Append a usage record, assigning it an id
    async fn add(&self, record: NewUsageRecord) -> Result<UsageRecord, ApplicationError>;
}
