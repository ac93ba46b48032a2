//! Remote persistence service interface.
//!
//! The day view only needs success/failure plus a JSON-shaped payload
//! from the backend, so the transport sits behind the
//! [`ConsumptionService`] trait. [`ApiClient`] implements it over HTTP;
//! tests substitute an in-memory implementation.

pub mod client;

pub use client::ApiClient;

use chrono::NaiveDate;

use crate::models::{ConsumptionItem, DayMeals, Goal, GoalUpdate};

/// Errors that can occur talking to the remote service.
#[derive(Debug)]
pub enum ServiceError {
    /// Request could not be sent or the connection failed
    Request(String),
    /// Server answered with a non-success status
    Failure(u16),
    /// Response body could not be decoded
    Decode(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Request(e) => write!(f, "Request error: {}", e),
            ServiceError::Failure(status) => write!(f, "Server returned status {}", status),
            ServiceError::Decode(e) => write!(f, "Invalid response: {}", e),
        }
    }
}

impl std::error::Error for ServiceError {}

/// Operations the day view needs from the persistence backend.
pub trait ConsumptionService {
    /// Fetches everything consumed on `day`, grouped by meal.
    async fn fetch_day(&self, user_id: i64, day: NaiveDate) -> Result<DayMeals, ServiceError>;

    /// Deletes one consumption record.
    async fn delete_consumption(&self, consumption_id: i64) -> Result<(), ServiceError>;

    /// Replaces one consumption record, keyed by its id.
    async fn update_consumption(
        &self,
        consumption_id: i64,
        item: &ConsumptionItem,
    ) -> Result<(), ServiceError>;

    /// Fetches the user's nutrition goals.
    async fn fetch_goal(&self, user_id: i64) -> Result<Goal, ServiceError>;

    /// Saves the goal fields present in `update`.
    async fn save_goal(&self, update: &GoalUpdate) -> Result<(), ServiceError>;
}
