//! Sustainability tips port

use async_trait::async_trait;
use domain::SustainabilityTip;

use crate::error::ApplicationError;

/// Port for the curated sustainability tip catalogue
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TipsPort: Send + Sync {
    /// The daily tip list
    async fn daily_tips(&self) -> Result<Vec<SustainabilityTip>, ApplicationError>;
}
