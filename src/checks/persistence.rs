//! Write-then-read persistence check

use anyhow::Result;
use tracing::{debug, info};

use crate::http::HttpClient;
use crate::models::{Check, CheckResult, CheckStatus, NewStatusCheck, StatusCheck};

/// Check 4: create a record with a unique name, then verify it appears in
/// a full listing with the same id and name.
///
/// Catches a backend that accepts writes but fails to persist them or to
/// include new records in subsequent reads. The listing is scanned
/// linearly; order is not assumed and unrelated records are tolerated.
#[derive(Clone, Debug)]
pub struct PersistenceCheck {
    pub api_base: String,
}

impl PersistenceCheck {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    pub async fn run(&self, client: &HttpClient) -> Result<CheckResult> {
        info!("Running Data Persistence check");
        let start = std::time::Instant::now();
        let url = format!("{}/status", self.api_base);

        // Unique name so concurrent or repeated runs cannot collide
        let client_name = format!("db_test_{:08x}", rand::random::<u32>());

        let created: StatusCheck = match client
            .post_json(&url, &NewStatusCheck::new(&client_name))
            .await
        {
            Ok(resp) if resp.is_success() => match resp.json() {
                Ok(record) => record,
                Err(e) => {
                    return Ok(self.fail(start, format!("create returned bad record: {e:#}")))
                }
            },
            Ok(resp) => {
                return Ok(self.fail(
                    start,
                    format!("create returned status {}: {}", resp.status_code, resp.body),
                ))
            }
            Err(e) => return Ok(self.fail(start, format!("create request failed: {e:#}"))),
        };

        debug!("Created record {} ({})", created.id, client_name);

        let records: Vec<serde_json::Value> = match client.get(&url).await {
            Ok(resp) if resp.is_success() => match resp.json() {
                Ok(records) => records,
                Err(e) => return Ok(self.fail(start, format!("listing was not a list: {e:#}"))),
            },
            Ok(resp) => {
                return Ok(self.fail(
                    start,
                    format!("listing returned status {}: {}", resp.status_code, resp.body),
                ))
            }
            Err(e) => return Ok(self.fail(start, format!("listing request failed: {e:#}"))),
        };

        let found = records.iter().any(|record| {
            record.get("id").and_then(|v| v.as_str()) == Some(created.id.as_str())
                && record.get("client_name").and_then(|v| v.as_str())
                    == Some(client_name.as_str())
        });

        let (status, detail) = if found {
            (
                CheckStatus::Pass,
                format!(
                    "record {} round-tripped through {} listed entries",
                    created.id,
                    records.len()
                ),
            )
        } else {
            (
                CheckStatus::Fail,
                format!(
                    "created record {} ({}) not found in listing of {} entries",
                    created.id,
                    client_name,
                    records.len()
                ),
            )
        };

        Ok(CheckResult {
            check: Check::Persistence,
            status,
            duration_ms: start.elapsed().as_millis() as u64,
            message: Some(detail),
        })
    }

    fn fail(&self, start: std::time::Instant, message: String) -> CheckResult {
        CheckResult::fail(
            Check::Persistence,
            start.elapsed().as_millis() as u64,
            message,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::support::{json_reply, refused_api_base, MockBackend};

    #[tokio::test]
    async fn passes_when_record_round_trips() {
        let backend = MockBackend::start_store(true).await;
        let client = HttpClient::with_timeout(5).unwrap();

        let result = PersistenceCheck::new(backend.api_base())
            .run(&client)
            .await
            .unwrap();
        assert_eq!(result.status, CheckStatus::Pass, "{:?}", result.message);
    }

    #[tokio::test]
    async fn passes_with_unrelated_records_in_store() {
        let backend = MockBackend::start_store(true).await;
        let client = HttpClient::with_timeout(5).unwrap();
        let url = format!("{}/status", backend.api_base());

        // Seed decoy records owned by "other runs"
        for name in ["db_test_other", "some_client"] {
            client
                .post_json(&url, &NewStatusCheck::new(name))
                .await
                .unwrap();
        }

        let result = PersistenceCheck::new(backend.api_base())
            .run(&client)
            .await
            .unwrap();
        assert_eq!(result.status, CheckStatus::Pass, "{:?}", result.message);
    }

    #[tokio::test]
    async fn fails_when_write_is_not_persisted() {
        let backend = MockBackend::start_store(false).await;
        let client = HttpClient::with_timeout(5).unwrap();

        let result = PersistenceCheck::new(backend.api_base())
            .run(&client)
            .await
            .unwrap();
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.message.unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn fails_when_create_is_rejected() {
        let backend = MockBackend::start(vec![json_reply(500, r#"{"detail": "boom"}"#)]).await;
        let client = HttpClient::with_timeout(5).unwrap();

        let result = PersistenceCheck::new(backend.api_base())
            .run(&client)
            .await
            .unwrap();
        assert_eq!(result.status, CheckStatus::Fail);
    }

    #[tokio::test]
    async fn transport_failure_becomes_fail() {
        let client = HttpClient::with_timeout(5).unwrap();

        let result = PersistenceCheck::new(refused_api_base().await)
            .run(&client)
            .await
            .unwrap();
        assert_eq!(result.status, CheckStatus::Fail);
    }
}
