//! Typed HTTP client for the team tracker REST API.

use std::time::Duration;

use chrono::NaiveDate;
use log::debug;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use crate::error::{ClientError, Result, UNKNOWN_ERROR_CODE};
use team_tracker_core::goals::Goal;
use team_tracker_core::stats::DailyStats;
use team_tracker_core::team_members::{Mood, TeamMember};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Client for the `/api` endpoints.
///
/// ```ignore
/// let client = ApiClient::new("http://localhost:5000")?;
/// let members = client.list_team_members(true).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    pub async fn list_team_members(&self, include_goals: bool) -> Result<Vec<TeamMember>> {
        let request = self
            .client
            .get(self.url("/team-members"))
            .query(&[("includeGoals", include_goals)]);
        self.send(request).await
    }

    pub async fn update_mood(&self, team_member_id: i32, mood: Mood) -> Result<TeamMember> {
        let request = self
            .client
            .put(self.url(&format!("/team-members/{}/mood", team_member_id)))
            .json(&json!({ "mood": mood }));
        self.send(request).await
    }

    pub async fn create_goal(&self, team_member_id: i32, goal_text: &str) -> Result<Goal> {
        let request = self
            .client
            .post(self.url("/goals"))
            .json(&json!({ "teamMemberId": team_member_id, "goalText": goal_text }));
        self.send(request).await
    }

    pub async fn toggle_goal(&self, goal_id: i32) -> Result<Goal> {
        let request = self
            .client
            .put(self.url(&format!("/goals/{}/toggle", goal_id)));
        self.send(request).await
    }

    pub async fn delete_goal(&self, goal_id: i32) -> Result<()> {
        let request = self.client.delete(self.url(&format!("/goals/{}", goal_id)));
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await?;
        Err(api_error(status, &body))
    }

    /// Summary for `date`, or for the server's current UTC day.
    pub async fn daily_stats(&self, date: Option<NaiveDate>) -> Result<DailyStats> {
        let mut request = self.client.get(self.url("/stats"));
        if let Some(date) = date {
            request = request.query(&[("date", date.format("%Y-%m-%d").to_string())]);
        }
        self.send(request).await
    }

    /// Sends the request and unwraps the `{data}` envelope.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        debug!("[ApiClient] {} {}", status, response.url());
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        serde_json::from_str::<DataEnvelope<T>>(&body)
            .map(|envelope| envelope.data)
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

fn api_error(status: StatusCode, body: &str) -> ClientError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => ClientError::Api {
            status: status.as_u16(),
            code: envelope.error.code,
            message: envelope.error.message,
        },
        Err(_) => ClientError::Api {
            status: status.as_u16(),
            code: UNKNOWN_ERROR_CODE.to_string(),
            message: format!(
                "HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            ),
        },
    }
}
