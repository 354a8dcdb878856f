//! Status endpoint read/write check

use anyhow::Result;
use chrono::Local;
use tracing::{debug, info};

use crate::http::HttpClient;
use crate::models::{Check, CheckResult, CheckStatus, NewStatusCheck, StatusCheck};

/// Check 3: GET the status collection, then POST a new record.
///
/// The GET must return a JSON array; a failure there short-circuits the
/// write sub-check. The POST must echo id, client_name and timestamp.
#[derive(Clone, Debug)]
pub struct StatusEndpointsCheck {
    pub api_base: String,
}

impl StatusEndpointsCheck {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    pub async fn run(&self, client: &HttpClient) -> Result<CheckResult> {
        info!("Running Status Endpoints check");
        let start = std::time::Instant::now();
        let url = format!("{}/status", self.api_base);
        let mut details = Vec::new();

        // Read sub-check
        match client.get(&url).await {
            Ok(resp) if resp.is_success() => match resp.json::<Vec<serde_json::Value>>() {
                Ok(records) => {
                    debug!("GET /status returned {} records", records.len());
                    details.push(format!("GET listed {} status checks", records.len()));
                }
                Err(e) => return Ok(self.fail(start, format!("GET did not return a list: {e:#}"))),
            },
            Ok(resp) => {
                return Ok(self.fail(
                    start,
                    format!("GET returned status {}: {}", resp.status_code, resp.body),
                ))
            }
            Err(e) => return Ok(self.fail(start, format!("GET request failed: {e:#}"))),
        }

        // Write sub-check
        let client_name = format!("test_client_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let payload = NewStatusCheck::new(&client_name);

        let (status, detail) = match client.post_json(&url, &payload).await {
            Ok(resp) if resp.is_success() => match resp.json::<StatusCheck>() {
                Ok(record) if record.client_name == client_name => (
                    CheckStatus::Pass,
                    format!("created status check {} for {}", record.id, record.client_name),
                ),
                Ok(record) => (
                    CheckStatus::Fail,
                    format!(
                        "POST echoed client_name {:?} (submitted {:?})",
                        record.client_name, client_name
                    ),
                ),
                Err(e) => (
                    CheckStatus::Fail,
                    format!("POST returned incomplete data: {e:#}"),
                ),
            },
            Ok(resp) => (
                CheckStatus::Fail,
                format!("POST returned status {}: {}", resp.status_code, resp.body),
            ),
            Err(e) => (CheckStatus::Fail, format!("POST request failed: {e:#}")),
        };
        details.push(detail);

        Ok(CheckResult {
            check: Check::StatusEndpoints,
            status,
            duration_ms: start.elapsed().as_millis() as u64,
            message: Some(details.join("; ")),
        })
    }

    fn fail(&self, start: std::time::Instant, message: String) -> CheckResult {
        CheckResult::fail(
            Check::StatusEndpoints,
            start.elapsed().as_millis() as u64,
            message,
        )
    }
}
