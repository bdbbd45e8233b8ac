//! Duration-based pricing
//!
//! Fee = hourly rate for the vehicle class × whole hours parked. Partial
//! hours are truncated, and anything under one hour bills as one hour.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::vehicle::VehicleKind;

/// Hourly rates per vehicle class, in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRates {
    pub car: u64,
    pub bike: u64,
    pub truck: u64,
    pub bus: u64,
}

impl Default for HourlyRates {
    fn default() -> Self {
        Self {
            car: 20,
            bike: 10,
            truck: 30,
            bus: 30,
        }
    }
}

impl HourlyRates {
    #[must_use]
    pub const fn rate(&self, kind: VehicleKind) -> u64 {
        match kind {
            VehicleKind::Car => self.car,
            VehicleKind::Bike => self.bike,
            VehicleKind::Truck => self.truck,
            VehicleKind::Bus => self.bus,
        }
    }
}

/// Billed amount for one stay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    /// Hours billed (at least 1)
    pub hours: u64,
    /// Total fee
    pub fee: u64,
}

/// Computes exit fees from the vehicle class and time of entry
#[derive(Debug, Clone, Default)]
pub struct CostStrategy {
    rates: HourlyRates,
}

impl CostStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn rates(&self) -> &HourlyRates {
        &self.rates
    }

    /// Fee for a stay that began at `entered_at` and ends now
    #[must_use]
    pub fn cost(&self, kind: VehicleKind, entered_at: DateTime<Utc>) -> u64 {
        self.charge_between(kind, entered_at, Utc::now()).fee
    }

    /// Fee for a stay between two instants
    #[must_use]
    pub fn cost_between(
        &self,
        kind: VehicleKind,
        entered_at: DateTime<Utc>,
        exited_at: DateTime<Utc>,
    ) -> u64 {
        self.charge_between(kind, entered_at, exited_at).fee
    }

    /// Billed hours and fee for a stay between two instants
    #[must_use]
    pub fn charge_between(
        &self,
        kind: VehicleKind,
        entered_at: DateTime<Utc>,
        exited_at: DateTime<Utc>,
    ) -> Charge {
        let hours = billable_hours(entered_at, exited_at);
        Charge {
            hours,
            fee: self.rates.rate(kind).saturating_mul(hours),
        }
    }
}

/// Whole hours elapsed, never less than one.
///
/// An exit stamped before the entry (clock skew) counts as zero elapsed.
fn billable_hours(entered_at: DateTime<Utc>, exited_at: DateTime<Utc>) -> u64 {
    let whole_hours = (exited_at - entered_at).num_hours();
    u64::try_from(whole_hours).unwrap_or(0).max(1)
}
