//! Driver availability reports.
//!
//! Drivers periodically report whether they are free and where they are. Nothing in the
//! order lifecycle consumes these reports yet; they are accepted and logged.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverStatusUpdate {
    pub is_available: bool,
    pub current_location: Location,
}

impl DriverStatusUpdate {
    /// `available` / `unavailable`, as it appears in the log.
    pub fn availability(&self) -> &'static str {
        if self.is_available {
            "available"
        } else {
            "unavailable"
        }
    }
}
