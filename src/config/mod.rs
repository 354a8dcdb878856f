//! Configuration module
//!
//! Handles resolving the backend address and per-run settings.

mod env_file;

pub use env_file::{resolve_backend_url, ResolveError, BACKEND_URL_KEY};

/// Path suffix appended to the backend base URL
pub const API_SUFFIX: &str = "/api";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Immutable per-run harness configuration
#[derive(Clone, Debug)]
pub struct HarnessConfig {
    /// Backend base URL as resolved from configuration
    pub base_url: String,

    /// API base (base URL + `/api`)
    pub api_base: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,

    /// Check numbers to skip
    pub skip_checks: Vec<u8>,
}

impl HarnessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let api_base = format!("{}{}", base_url.trim_end_matches('/'), API_SUFFIX);
        Self {
            base_url,
            api_base,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            skip_checks: Vec::new(),
        }
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_skip_checks(mut self, skip: Vec<u8>) -> Self {
        self.skip_checks = skip;
        self
    }

    /// Parse a comma-separated skip list ("1,3")
    pub fn parse_skip_list(s: &str) -> Vec<u8> {
        s.split(',')
            .filter_map(|part| part.trim().parse().ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_appends_suffix() {
        let config = HarnessConfig::new("http://localhost:8000");
        assert_eq!(config.api_base, "http://localhost:8000/api");
    }

    #[test]
    fn api_base_trims_trailing_slash() {
        let config = HarnessConfig::new("http://localhost:8000/");
        assert_eq!(config.api_base, "http://localhost:8000/api");
    }

    #[test]
    fn default_timeout() {
        let config = HarnessConfig::new("http://localhost:8000");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn skip_list_parsing() {
        assert_eq!(HarnessConfig::parse_skip_list("1,3"), vec![1, 3]);
        assert_eq!(HarnessConfig::parse_skip_list(" 2 , 5 "), vec![2, 5]);
        assert!(HarnessConfig::parse_skip_list("").is_empty());
        assert!(HarnessConfig::parse_skip_list("abc").is_empty());
    }
}
