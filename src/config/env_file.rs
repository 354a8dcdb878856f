//! Backend URL resolution from an env-style file
//!
//! The frontend's `.env` file is the single source of truth for the
//! backend's externally reachable address. Resolution is an explicit step
//! at the start of a run; failure aborts before any HTTP call.

use std::path::Path;
use thiserror::Error;

/// Configuration key holding the backend base URL
pub const BACKEND_URL_KEY: &str = "REACT_APP_BACKEND_URL";

/// Resolver failure reasons
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("{key} not found in {path}")]
    KeyMissing { key: &'static str, path: String },

    #[error("{key} in {path} has an empty value")]
    EmptyValue { key: &'static str, path: String },
}

/// Resolve the backend base URL from an env-style file.
///
/// Scans for a `KEY=VALUE` line whose key is [`BACKEND_URL_KEY`] and
/// returns the trimmed value. Only the first match counts.
pub fn resolve_backend_url(path: impl AsRef<Path>) -> Result<String, ResolveError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let content = std::fs::read_to_string(path).map_err(|source| ResolveError::Io {
        path: display.clone(),
        source,
    })?;

    for line in content.lines() {
        if let Some((key, value)) = line.split_once('=') {
            if key.trim() == BACKEND_URL_KEY {
                let value = value.trim();
                if value.is_empty() {
                    return Err(ResolveError::EmptyValue {
                        key: BACKEND_URL_KEY,
                        path: display,
                    });
                }
                return Ok(value.to_string());
            }
        }
    }

    Err(ResolveError::KeyMissing {
        key: BACKEND_URL_KEY,
        path: display,
    })
}
