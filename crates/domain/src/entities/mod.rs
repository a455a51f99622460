//! Domain entities

mod chat_message;
mod route_log;
mod route_option;
mod sustainability_tip;
mod usage_record;

pub use chat_message::{ChatMessage, MessageRole};
pub use route_log::{NewRouteLog, RouteLog};
pub use route_option::RouteOption;
pub use sustainability_tip::{SustainabilityTip, TipImpact};
pub use usage_record::{NewUsageRecord, UsageRecord};
