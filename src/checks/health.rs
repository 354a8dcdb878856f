//! Health check against the API root

#![allow(dead_code)]

use anyhow::Result;
use serde::Deserialize;
use tracing::info;

use crate::http::HttpClient;
use crate::models::{Check, CheckResult, CheckStatus};

/// Greeting payload returned by the API root
#[derive(Debug, Deserialize)]
struct Greeting {
    message: String,
}

/// Check 1: GET the API root and verify the greeting
#[derive(Clone, Debug)]
pub struct HealthCheck {
    pub api_base: String,
    pub expected_message: String,
}

impl HealthCheck {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            expected_message: "Hello World".to_string(),
        }
    }

    pub fn expect_message(mut self, message: impl Into<String>) -> Self {
        self.expected_message = message.into();
        self
    }

    pub async fn run(&self, client: &HttpClient) -> Result<CheckResult> {
        info!("Running Health Check");
        let start = std::time::Instant::now();
        let url = format!("{}/", self.api_base);

        let (status, detail) = match client.get(&url).await {
            Ok(resp) if resp.is_success() => match resp.json::<Greeting>() {
                Ok(greeting) if greeting.message == self.expected_message => (
                    CheckStatus::Pass,
                    format!("greeting returned in {}ms", resp.duration_ms),
                ),
                Ok(greeting) => (
                    CheckStatus::Fail,
                    format!(
                        "unexpected greeting {:?} (expected {:?})",
                        greeting.message, self.expected_message
                    ),
                ),
                Err(e) => (CheckStatus::Fail, format!("{e:#}")),
            },
            Ok(resp) => (
                CheckStatus::Fail,
                format!("status {}: {}", resp.status_code, resp.body),
            ),
            Err(e) => (CheckStatus::Fail, format!("request failed: {e:#}")),
        };

        Ok(CheckResult {
            check: Check::Health,
            status,
            duration_ms: start.elapsed().as_millis() as u64,
            message: Some(detail),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::support::{json_reply, refused_api_base, MockBackend};

    #[test]
    fn builder_defaults() {
        let check = HealthCheck::new("http://localhost/api");
        assert_eq!(check.expected_message, "Hello World");

        let check = check.expect_message("Howdy");
        assert_eq!(check.expected_message, "Howdy");
    }

    #[tokio::test]
    async fn passes_on_expected_greeting() {
        let backend =
            MockBackend::start(vec![json_reply(200, r#"{"message": "Hello World"}"#)]).await;
        let client = HttpClient::with_timeout(5).unwrap();

        let result = HealthCheck::new(backend.api_base()).run(&client).await.unwrap();
        assert_eq!(result.status, CheckStatus::Pass);
    }

    #[tokio::test]
    async fn fails_on_wrong_greeting() {
        let backend = MockBackend::start(vec![json_reply(200, r#"{"message": "Goodbye"}"#)]).await;
        let client = HttpClient::with_timeout(5).unwrap();

        let result = HealthCheck::new(backend.api_base()).run(&client).await.unwrap();
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.message.unwrap().contains("Goodbye"));
    }

    #[tokio::test]
    async fn fails_on_error_status() {
        let backend = MockBackend::start(vec![json_reply(500, r#"{"detail": "boom"}"#)]).await;
        let client = HttpClient::with_timeout(5).unwrap();

        let result = HealthCheck::new(backend.api_base()).run(&client).await.unwrap();
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.message.unwrap().contains("500"));
    }

    #[tokio::test]
    async fn transport_failure_becomes_fail() {
        let client = HttpClient::with_timeout(5).unwrap();

        let result = HealthCheck::new(refused_api_base().await)
            .run(&client)
            .await
            .unwrap();
        assert_eq!(result.status, CheckStatus::Fail);
    }
}
