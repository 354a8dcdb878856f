//! CORS preflight check

#![allow(dead_code)]

use anyhow::Result;
use std::collections::HashMap;
use tracing::info;

use crate::http::HttpClient;
use crate::models::{Check, CheckResult, CheckStatus};

/// Check 2: OPTIONS preflight with simulated cross-origin headers.
///
/// Only the allow-origin header is required; allow-methods and
/// allow-headers are reported but do not affect the outcome.
#[derive(Clone, Debug)]
pub struct CorsCheck {
    pub api_base: String,
    pub origin: String,
    pub request_method: String,
    pub request_headers: String,
}

impl CorsCheck {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            origin: "https://example.com".to_string(),
            request_method: "POST".to_string(),
            request_headers: "Content-Type".to_string(),
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub async fn run(&self, client: &HttpClient) -> Result<CheckResult> {
        info!("Running CORS Configuration check");
        let start = std::time::Instant::now();
        let url = format!("{}/", self.api_base);

        let mut headers = HashMap::new();
        headers.insert("Origin".to_string(), self.origin.clone());
        headers.insert(
            "Access-Control-Request-Method".to_string(),
            self.request_method.clone(),
        );
        headers.insert(
            "Access-Control-Request-Headers".to_string(),
            self.request_headers.clone(),
        );

        let (status, detail) = match client.options_with_headers(&url, headers).await {
            Ok(resp) => {
                let allow_origin = resp
                    .get_header("Access-Control-Allow-Origin")
                    .filter(|v| !v.is_empty());

                match allow_origin {
                    Some(origin) => {
                        let mut lines = vec![format!("Allow-Origin: {origin}")];
                        for name in ["Access-Control-Allow-Methods", "Access-Control-Allow-Headers"]
                        {
                            match resp.get_header(name) {
                                Some(value) => lines.push(format!("{name}: {value}")),
                                None => lines.push(format!("{name}: (absent)")),
                            }
                        }
                        (CheckStatus::Pass, lines.join(", "))
                    }
                    None => (
                        CheckStatus::Fail,
                        format!(
                            "Access-Control-Allow-Origin header missing (status {})",
                            resp.status_code
                        ),
                    ),
                }
            }
            Err(e) => (CheckStatus::Fail, format!("preflight request failed: {e:#}")),
        };

        Ok(CheckResult {
            check: Check::Cors,
            status,
            duration_ms: start.elapsed().as_millis() as u64,
            message: Some(detail),
        })
    }
}
