//! Validation-error handling check

use anyhow::Result;
use tracing::{info, warn};

use crate::http::HttpClient;
use crate::models::{Check, CheckResult, CheckStatus};

/// Check 5: POST a payload missing the required field.
///
/// A 422 passes. Any other status is logged as a warning but still
/// passes; this check is advisory. Only a transport failure fails it.
#[derive(Clone, Debug)]
pub struct ErrorHandlingCheck {
    pub api_base: String,
}

impl ErrorHandlingCheck {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    pub async fn run(&self, client: &HttpClient) -> Result<CheckResult> {
        info!("Running Error Handling check");
        let start = std::time::Instant::now();
        let url = format!("{}/status", self.api_base);

        let (status, detail) = match client.post_json(&url, &serde_json::json!({})).await {
            Ok(resp) if resp.status_code == 422 => (
                CheckStatus::Pass,
                "validation errors properly returned".to_string(),
            ),
            Ok(resp) => {
                warn!(
                    "Unexpected status {} for invalid payload: {}",
                    resp.status_code, resp.body
                );
                (
                    CheckStatus::Pass,
                    format!(
                        "unexpected status {} for invalid payload (tolerated)",
                        resp.status_code
                    ),
                )
            }
            Err(e) => (CheckStatus::Fail, format!("request failed: {e:#}")),
        };

        Ok(CheckResult {
            check: Check::ErrorHandling,
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

    #[tokio::test]
    async fn passes_on_validation_status() {
        let backend = MockBackend::start_store(true).await;
        let client = HttpClient::with_timeout(5).unwrap();

        let result = ErrorHandlingCheck::new(backend.api_base())
            .run(&client)
            .await
            .unwrap();
        assert_eq!(result.status, CheckStatus::Pass);
        assert!(result.message.unwrap().contains("validation"));
    }

    #[tokio::test]
    async fn tolerates_any_other_status() {
        for reply in [
            json_reply(200, "{}"),
            json_reply(404, r#"{"detail": "not found"}"#),
            json_reply(500, r#"{"detail": "boom"}"#),
        ] {
            let backend = MockBackend::start(vec![reply]).await;
            let client = HttpClient::with_timeout(5).unwrap();

            let result = ErrorHandlingCheck::new(backend.api_base())
                .run(&client)
                .await
                .unwrap();
            assert_eq!(result.status, CheckStatus::Pass);
            assert!(result.message.unwrap().contains("tolerated"));
        }
    }

    #[tokio::test]
    async fn transport_failure_becomes_fail() {
        let client = HttpClient::with_timeout(5).unwrap();

        let result = ErrorHandlingCheck::new(refused_api_base().await)
            .run(&client)
            .await
            .unwrap();
        assert_eq!(result.status, CheckStatus::Fail);
    }
}
