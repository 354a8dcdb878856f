//! Suite orchestration
//!
//! Runs the checks in declared order behind a fault boundary: a check
//! that returns an error is recorded and the remaining checks still run.

use anyhow::Result;
use std::time::Instant;
use tracing::{error, info};

use crate::checks;
use crate::config::HarnessConfig;
use crate::http::HttpClient;
use crate::models::{Check, CheckResult, RunSummary};

/// Sequential runner for the backend check suite
pub struct SuiteRunner {
    config: HarnessConfig,
    client: HttpClient,
}

impl SuiteRunner {
    /// Create a runner with a shared client built from the config
    pub fn new(config: HarnessConfig) -> Result<Self> {
        let client = HttpClient::with_timeout(config.timeout_secs)?;
        Ok(Self { config, client })
    }

    /// Run a single check, honoring the skip list
    pub async fn run_check(&self, check: Check) -> CheckResult {
        if self.config.skip_checks.contains(&check.number()) {
            return CheckResult::skip(check, "Skipped by configuration");
        }

        info!("Running {}", check);

        match checks::run_check(check, &self.config, &self.client).await {
            Ok(result) => result,
            Err(e) => {
                error!("{} crashed: {:#}", check, e);
                CheckResult::error(check, format!("{e:#}"))
            }
        }
    }

    /// Run all checks sequentially in declared order
    pub async fn run_all(&self) -> RunSummary {
        info!("Starting backend suite against {}", self.config.api_base);

        let start = Instant::now();
        let mut results = Vec::new();

        for check in Check::all() {
            let result = self.run_check(check).await;
            info!("  {}", result);
            results.push(result);
        }

        let summary = RunSummary::new(&self.config.api_base, results);

        info!(
            "Suite completed in {}ms - {}/{} passed ({:.1}%)",
            start.elapsed().as_millis(),
            summary.passed,
            summary.total,
            summary.pass_rate()
        );

        summary
    }
}
