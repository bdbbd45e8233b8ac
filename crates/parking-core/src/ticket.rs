//! Parking tickets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::vehicle::Registration;

/// Proof of entry, issued when a vehicle is admitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingTicket {
    registration: Registration,
    entered_at: DateTime<Utc>,
}

impl ParkingTicket {
    /// Issue a ticket stamped with the current time
    #[must_use]
    pub fn issue(registration: Registration) -> Self {
        Self::issue_at(registration, Utc::now())
    }

    /// Issue a ticket stamped with `entered_at`
    #[must_use]
    pub const fn issue_at(registration: Registration, entered_at: DateTime<Utc>) -> Self {
        Self {
            registration,
            entered_at,
        }
    }

    #[must_use]
    pub const fn registration(&self) -> &Registration {
        &self.registration
    }

    #[must_use]
    pub const fn entered_at(&self) -> DateTime<Utc> {
        self.entered_at
    }
}
