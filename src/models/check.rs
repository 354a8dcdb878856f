//! Check definitions for the backend test suite
//!
//! Defines the five checks and their fixed execution order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// All checks run against the backend, in declared order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    Health,
    Cors,
    StatusEndpoints,
    Persistence,
    ErrorHandling,
}

impl Check {
    /// Get check number (1-5)
    pub fn number(&self) -> u8 {
        match self {
            Check::Health => 1,
            Check::Cors => 2,
            Check::StatusEndpoints => 3,
            Check::Persistence => 4,
            Check::ErrorHandling => 5,
        }
    }

    /// Get check name
    pub fn name(&self) -> &'static str {
        match self {
            Check::Health => "Health Check",
            Check::Cors => "CORS Configuration",
            Check::StatusEndpoints => "Status Endpoints",
            Check::Persistence => "Data Persistence",
            Check::ErrorHandling => "Error Handling",
        }
    }

    /// Get check category
    pub fn category(&self) -> &'static str {
        match self {
            Check::Health | Check::Cors => "Connectivity",
            Check::StatusEndpoints | Check::Persistence => "Data",
            Check::ErrorHandling => "Validation",
        }
    }

    /// Get all checks in execution order
    pub fn all() -> Vec<Check> {
        vec![
            Check::Health,
            Check::Cors,
            Check::StatusEndpoints,
            Check::Persistence,
            Check::ErrorHandling,
        ]
    }

    /// Parse from check number
    pub fn from_number(n: u8) -> Option<Check> {
        match n {
            1 => Some(Check::Health),
            2 => Some(Check::Cors),
            3 => Some(Check::StatusEndpoints),
            4 => Some(Check::Persistence),
            5 => Some(Check::ErrorHandling),
            _ => None,
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Check {}: {}", self.number(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_numbers() {
        assert_eq!(Check::Health.number(), 1);
        assert_eq!(Check::ErrorHandling.number(), 5);
    }

    #[test]
    fn check_from_number() {
        assert_eq!(Check::from_number(1), Some(Check::Health));
        assert_eq!(Check::from_number(5), Some(Check::ErrorHandling));
        assert_eq!(Check::from_number(6), None);
    }

    #[test]
    fn all_checks_ordered() {
        let all = Check::all();
        assert_eq!(all.len(), 5);
        for (i, check) in all.iter().enumerate() {
            assert_eq!(check.number() as usize, i + 1);
        }
    }
}
