//! HTTP client for the EasyCal API server.

use chrono::NaiveDate;

use super::{ConsumptionService, ServiceError};
use crate::models::{ConsumptionItem, DayMeals, Goal, GoalUpdate};

/// JSON/HTTP implementation of [`ConsumptionService`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given server, e.g. `http://localhost:3001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn day_url(&self, user_id: i64, day: NaiveDate) -> String {
        format!(
            "{}/api/consumptions?type=day&userId={}&date={}",
            self.base_url,
            user_id,
            day.format("%Y-%m-%d")
        )
    }

    fn consumption_url(&self, consumption_id: i64) -> String {
        format!("{}/api/consumptions/{}", self.base_url, consumption_id)
    }

    fn goal_url(&self, user_id: i64) -> String {
        format!("{}/api/goals/{}", self.base_url, user_id)
    }

    fn goals_url(&self) -> String {
        format!("{}/api/goals", self.base_url)
    }

    fn check_status(response: &reqwest::Response) -> Result<(), ServiceError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ServiceError::Failure(status.as_u16()))
        }
    }
}

impl ConsumptionService for ApiClient {
    async fn fetch_day(&self, user_id: i64, day: NaiveDate) -> Result<DayMeals, ServiceError> {
        let url = self.day_url(user_id, day);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;
        Self::check_status(&response)?;

        response
            .json::<DayMeals>()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))
    }

    async fn delete_consumption(&self, consumption_id: i64) -> Result<(), ServiceError> {
        let url = self.consumption_url(consumption_id);
        tracing::debug!("DELETE {}", url);

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;
        Self::check_status(&response)
    }

    async fn update_consumption(
        &self,
        consumption_id: i64,
        item: &ConsumptionItem,
    ) -> Result<(), ServiceError> {
        let url = self.consumption_url(consumption_id);
        tracing::debug!("PUT {}", url);

        let response = self
            .http
            .put(&url)
            .json(item)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;
        Self::check_status(&response)
    }

    async fn fetch_goal(&self, user_id: i64) -> Result<Goal, ServiceError> {
        let url = self.goal_url(user_id);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;
        Self::check_status(&response)?;

        response
            .json::<Goal>()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))
    }

    async fn save_goal(&self, update: &GoalUpdate) -> Result<(), ServiceError> {
        let url = self.goals_url();
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(update)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;
        Self::check_status(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_url() {
        let client = ApiClient::new("http://localhost:3001");
        let day = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(
            client.day_url(1, day),
            "http://localhost:3001/api/consumptions?type=day&userId=1&date=2025-03-09"
        );
    }

    #[test]
    fn test_consumption_url() {
        let client = ApiClient::new("http://localhost:3001");
        assert_eq!(
            client.consumption_url(42),
            "http://localhost:3001/api/consumptions/42"
        );
    }

    #[test]
    fn test_goal_urls() {
        let client = ApiClient::new("https://easycal.example.com");
        assert_eq!(
            client.goal_url(7),
            "https://easycal.example.com/api/goals/7"
        );
        assert_eq!(client.goals_url(), "https://easycal.example.com/api/goals");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3001/");
        assert_eq!(
            client.consumption_url(1),
            "http://localhost:3001/api/consumptions/1"
        );
    }
}
