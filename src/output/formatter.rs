//! Output formatters for check results
//!
//! Provides Table, JSON, and summary output formats.

use crate::models::{CheckResult, CheckStatus, RunSummary};

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }
}

/// Result formatter
pub struct ResultFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Format a single check result
    pub fn format_result(&self, result: &CheckResult) -> String {
        match self.format {
            OutputFormat::Table => self.format_result_line(result),
            OutputFormat::Json => serde_json::to_string(result).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(result).unwrap_or_default(),
            OutputFormat::Summary => format!(
                "{} {} ({}ms)",
                result.status.symbol(),
                result.check.name(),
                result.duration_ms
            ),
        }
    }

    fn format_result_line(&self, result: &CheckResult) -> String {
        let status_str = if self.colorize {
            match result.status {
                CheckStatus::Pass => "\x1b[32m✓ PASS\x1b[0m",
                CheckStatus::Fail => "\x1b[31m✗ FAIL\x1b[0m",
                CheckStatus::Skip => "\x1b[33m○ SKIP\x1b[0m",
                CheckStatus::Error => "\x1b[31m! ERROR\x1b[0m",
            }
        } else {
            match result.status {
                CheckStatus::Pass => "✓ PASS",
                CheckStatus::Fail => "✗ FAIL",
                CheckStatus::Skip => "○ SKIP",
                CheckStatus::Error => "! ERROR",
            }
        };

        format!(
            "{:2}. {:20} {} [{:>6}ms]",
            result.check.number(),
            result.check.name(),
            status_str,
            result.duration_ms
        )
    }

    /// Format a full run summary
    pub fn format_summary(&self, summary: &RunSummary) -> String {
        match self.format {
            OutputFormat::Table => self.format_summary_table(summary),
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
            OutputFormat::Summary => format!(
                "{}: {}/{} checks passed ({:.1}%) in {}ms",
                summary.api_base,
                summary.passed,
                summary.total,
                summary.pass_rate(),
                summary.total_duration_ms
            ),
        }
    }

    fn format_summary_table(&self, summary: &RunSummary) -> String {
        let mut output = String::new();

        output.push_str("\n╔══════════════════════════════════════════════════════════════╗\n");
        output.push_str(&format!("║  Backend Suite - {:44} ║\n", summary.api_base));
        output.push_str("╠══════════════════════════════════════════════════════════════╣\n");

        for result in &summary.results {
            output.push_str(&format!("║  {}  ║\n", self.format_result_line(result)));
        }

        output.push_str("╠══════════════════════════════════════════════════════════════╣\n");

        let pass_str = if self.colorize {
            format!("\x1b[32m{}\x1b[0m", summary.passed)
        } else {
            summary.passed.to_string()
        };
        let fail_str = if self.colorize && summary.failed > 0 {
            format!("\x1b[31m{}\x1b[0m", summary.failed)
        } else {
            summary.failed.to_string()
        };

        output.push_str(&format!(
            "║  {}/{} checks passed | Fail: {} | Skip: {} | Error: {}         ║\n",
            pass_str, summary.total, fail_str, summary.skipped, summary.errors
        ));
        output.push_str(&format!(
            "║  Pass Rate: {:5.1}% | Duration: {:6}ms                       ║\n",
            summary.pass_rate(),
            summary.total_duration_ms
        ));
        output.push_str("╚══════════════════════════════════════════════════════════════╝\n");

        output
    }
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}

/// Write a run summary to a file, without color codes
pub fn write_summary_to_file(
    path: &str,
    summary: &RunSummary,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let formatter = ResultFormatter::new(format).no_color();
    std::fs::write(path, formatter.format_summary(summary))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Check;

    #[test]
    fn output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("TABLE"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_str("unknown"), None);
    }

    #[test]
    fn format_result_summary() {
        let result = CheckResult::pass(Check::Health, 100);
        let formatter = ResultFormatter::new(OutputFormat::Summary);
        let output = formatter.format_result(&result);
        assert!(output.contains("Health Check"));
    }

    #[test]
    fn summary_table_reports_pass_count() {
        let results = vec![
            CheckResult::pass(Check::Health, 10),
            CheckResult::fail(Check::Cors, 5, "no allow-origin header"),
        ];
        let summary = RunSummary::new("http://localhost:8000/api", results);
        let formatter = ResultFormatter::new(OutputFormat::Table).no_color();
        let output = formatter.format_summary(&summary);

        assert!(output.contains("1/2 checks passed"));
        assert!(output.contains("✗ FAIL"));
    }

    #[test]
    fn json_summary_round_trips() {
        let summary = RunSummary::new(
            "http://localhost:8000/api",
            vec![CheckResult::pass(Check::Health, 10)],
        );
        let formatter = ResultFormatter::new(OutputFormat::Json);
        let output = formatter.format_summary(&summary);

        let parsed: RunSummary = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.passed, 1);
        assert_eq!(parsed.api_base, summary.api_base);
    }

    #[test]
    fn write_summary_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        let summary = RunSummary::new(
            "http://localhost:8000/api",
            vec![CheckResult::pass(Check::Health, 10)],
        );

        write_summary_to_file(path.to_str().unwrap(), &summary, OutputFormat::Json).unwrap();
        assert!(path.exists());
    }
}
