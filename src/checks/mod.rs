//! Backend check implementations
//!
//! The five checks run against the backend, in declared order:
//!
//! 1. Health Check - API root greeting
//! 2. CORS Configuration - preflight allow-origin header
//! 3. Status Endpoints - collection read + record write
//! 4. Data Persistence - write-then-read round trip
//! 5. Error Handling - validation response for a bad payload

mod cors;
mod errors;
mod health;
mod persistence;
mod status;

pub use cors::CorsCheck;
pub use errors::ErrorHandlingCheck;
pub use health::HealthCheck;
pub use persistence::PersistenceCheck;
pub use status::StatusEndpointsCheck;

use anyhow::Result;

use crate::config::HarnessConfig;
use crate::http::HttpClient;
use crate::models::{Check, CheckResult};

/// Run a specific check against the configured backend
pub async fn run_check(
    check: Check,
    config: &HarnessConfig,
    client: &HttpClient,
) -> Result<CheckResult> {
    match check {
        Check::Health => HealthCheck::new(&config.api_base).run(client).await,
        Check::Cors => CorsCheck::new(&config.api_base).run(client).await,
        Check::StatusEndpoints => {
            StatusEndpointsCheck::new(&config.api_base).run(client).await
        }
        Check::Persistence => PersistenceCheck::new(&config.api_base).run(client).await,
        Check::ErrorHandling => ErrorHandlingCheck::new(&config.api_base).run(client).await,
    }
}
