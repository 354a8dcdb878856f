//! Wire shapes for the `/status` route
//!
//! Typed deserialization makes a missing or mistyped field produce a
//! precise diagnostic instead of a silent membership-test failure.

use serde::{Deserialize, Serialize};

/// A status-check record as returned by the backend.
///
/// The timestamp is server-assigned and treated as opaque text; the
/// harness only verifies its presence, never its value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: String,
}

/// Payload for creating a status-check record
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewStatusCheck {
    pub client_name: String,
}

impl NewStatusCheck {
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
        }
    }
}
