//! In-memory store - implements the usage, route log, and tips ports
//!
//! Backed by `parking_lot` maps keyed by user id. The demo user is seeded
//! with a month of consumption data so dashboards render without setup.

use std::collections::HashMap;

use application::ApplicationError;
use application::ports::{RouteLogStorePort, TipsPort, UsageStorePort};
use async_trait::async_trait;
use chrono::Utc;
use domain::{NewRouteLog, NewUsageRecord, RouteLog, SustainabilityTip, UsageRecord};
use parking_lot::RwLock;

use crate::demo_data;

/// User whose records are pre-seeded
pub const DEMO_USER: &str = "demo";

/// In-memory storage for usage records, route logs, and tips
#[derive(Debug)]
pub struct MemoryStore {
    usage: RwLock<HashMap<String, Vec<UsageRecord>>>,
    route_logs: RwLock<HashMap<String, Vec<RouteLog>>>,
    tips: Vec<SustainabilityTip>,
}

impl MemoryStore {
    /// Create a store seeded with the demo dataset
    #[must_use]
    pub fn new() -> Self {
        let mut usage = HashMap::new();
        usage.insert(
            DEMO_USER.to_string(),
            demo_data::demo_usage_records(DEMO_USER),
        );

        Self {
            usage: RwLock::new(usage),
            route_logs: RwLock::new(HashMap::new()),
            tips: demo_data::sustainability_tips(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UsageStorePort for MemoryStore {
    async fn records_for(&self, user_id: &str) -> Result<Vec<UsageRecord>, ApplicationError> {
        Ok(self.usage.read().get(user_id).cloned().unwrap_or_default())
    }

    async fn add(&self, record: NewUsageRecord) -> Result<UsageRecord, ApplicationError> {
        let record = UsageRecord::from_new(record);
        self.usage
            .write()
            .entry(record.user_id.clone())
            .or_default()
            .push(record.clone());
        Ok(record)
    }
}

#[async_trait]
impl RouteLogStorePort for MemoryStore {
    async fn logs_for(&self, user_id: &str) -> Result<Vec<RouteLog>, ApplicationError> {
        Ok(self
            .route_logs
            .read()
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn add(&self, log: NewRouteLog) -> Result<RouteLog, ApplicationError> {
        let log = RouteLog::from_new(log, Utc::now());
        self.route_logs
            .write()
            .entry(log.user_id.clone())
            .or_default()
            .push(log.clone());
        Ok(log)
    }
}

#[async_trait]
impl TipsPort for MemoryStore {
    async fn daily_tips(&self) -> Result<Vec<SustainabilityTip>, ApplicationError> {
        Ok(self.tips.clone())
    }
}
