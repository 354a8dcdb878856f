//! Check outcome and run summary models

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Check;

/// Check execution status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    Skip,
    Error,
}

impl CheckStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "✓",
            CheckStatus::Fail => "✗",
            CheckStatus::Skip => "○",
            CheckStatus::Error => "!",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CheckStatus::Pass)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "PASS"),
            CheckStatus::Fail => write!(f, "FAIL"),
            CheckStatus::Skip => write!(f, "SKIP"),
            CheckStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Result of a single check execution
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub check: Check,
    pub status: CheckStatus,
    pub duration_ms: u64,
    pub message: Option<String>,
}

impl CheckResult {
    pub fn pass(check: Check, duration_ms: u64) -> Self {
        Self {
            check,
            status: CheckStatus::Pass,
            duration_ms,
            message: None,
        }
    }

    pub fn fail(check: Check, duration_ms: u64, message: impl Into<String>) -> Self {
        Self {
            check,
            status: CheckStatus::Fail,
            duration_ms,
            message: Some(message.into()),
        }
    }

    pub fn skip(check: Check, reason: impl Into<String>) -> Self {
        Self {
            check,
            status: CheckStatus::Skip,
            duration_ms: 0,
            message: Some(reason.into()),
        }
    }

    pub fn error(check: Check, error: impl Into<String>) -> Self {
        Self {
            check,
            status: CheckStatus::Error,
            duration_ms: 0,
            message: Some(error.into()),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}ms]",
            self.status.symbol(),
            self.check,
            self.duration_ms
        )?;
        if let Some(msg) = &self.message {
            write!(f, " - {msg}")?;
        }
        Ok(())
    }
}

/// Summary of a full suite run, results in execution order
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub api_base: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub total_duration_ms: u64,
    pub results: Vec<CheckResult>,
}

impl RunSummary {
    pub fn new(api_base: impl Into<String>, results: Vec<CheckResult>) -> Self {
        let total = results.len();
        let passed = results
            .iter()
            .filter(|r| r.status == CheckStatus::Pass)
            .count();
        let failed = results
            .iter()
            .filter(|r| r.status == CheckStatus::Fail)
            .count();
        let skipped = results
            .iter()
            .filter(|r| r.status == CheckStatus::Skip)
            .count();
        let errors = results
            .iter()
            .filter(|r| r.status == CheckStatus::Error)
            .count();
        let total_duration_ms = results.iter().map(|r| r.duration_ms).sum();

        Self {
            started_at: Utc::now(),
            api_base: api_base.into(),
            total,
            passed,
            failed,
            skipped,
            errors,
            total_duration_ms,
            results,
        }
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    /// True iff every executed check passed
    pub fn is_all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Backend suite - {}", self.api_base)?;
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        for result in &self.results {
            writeln!(f, "  {result}")?;
        }
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(
            f,
            "{}/{} checks passed | Fail: {} | Skip: {} | Error: {}",
            self.passed, self.total, self.failed, self.skipped, self.errors
        )
    }
}
