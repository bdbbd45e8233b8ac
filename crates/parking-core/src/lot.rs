//! The parking lot aggregate
//!
//! Floors are tried in ascending order and, within a floor, spaces in
//! ascending slot order. The first free space wins.
//!
//! Exit fees are computed from the class of the vehicle that actually left
//! its space.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    config::LotConfig,
    floor::{Floor, Vacated},
    pricing::CostStrategy,
    ticket::ParkingTicket,
    vehicle::{Registration, Vehicle, VehicleKind},
    Error, Result,
};

/// Where a vehicle is parked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub floor: u32,
    pub slot: u32,
}

/// Outcome of a successful park
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub registration: Registration,
    pub floor: u32,
    pub slot: u32,
    pub entered_at: DateTime<Utc>,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Parked vehicle at space {} on floor {}",
            self.slot, self.floor
        )
    }
}

/// Outcome of a successful exit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExitReceipt {
    pub registration: Registration,
    pub floor: u32,
    pub slot: u32,
    pub kind: VehicleKind,
    pub color: String,
    pub entered_at: DateTime<Utc>,
    pub exited_at: DateTime<Utc>,
    pub hours: u64,
    pub fee: u64,
}

impl std::fmt::Display for ExitReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Removed vehicle from space {} on floor {}",
            self.slot, self.floor
        )?;
        write!(
            f,
            "Vehicle {} removed. Total cost: {}",
            self.registration, self.fee
        )
    }
}

/// Free slots on one floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FloorAvailability {
    pub floor: u32,
    pub available: Vec<u32>,
}

/// Free slots across the lot, in floor then slot order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LotStatus(pub Vec<FloorAvailability>);

impl LotStatus {
    #[must_use]
    pub fn floors(&self) -> &[FloorAvailability] {
        &self.0
    }

    /// Free slots on `floor`, or `None` if the lot has no such floor
    #[must_use]
    pub fn available_on(&self, floor: u32) -> Option<&[u32]> {
        self.0
            .iter()
            .find(|f| f.floor == floor)
            .map(|f| f.available.as_slice())
    }
}

impl std::fmt::Display for LotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut lines = Vec::new();
        for floor in &self.0 {
            lines.push(format!("Floor {} availability:", floor.floor));
            lines.extend(
                floor
                    .available
                    .iter()
                    .map(|slot| format!("Space {slot} is available")),
            );
        }
        write!(f, "{}", lines.join("\n"))
    }
}

/// A multi-floor lot with uniform floors and a single pricing strategy
#[derive(Debug, Clone)]
pub struct ParkingLot {
    floors: Vec<Floor>,
    pricing: CostStrategy,
}

impl ParkingLot {
    /// Build a lot of `floor_count` floors with `spaces_per_floor` spaces each
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either count is zero.
    pub fn new(floor_count: u32, spaces_per_floor: u32) -> Result<Self> {
        Self::from_config(&LotConfig {
            floors: floor_count,
            spaces_per_floor,
        })
    }

    /// Build a lot from validated configuration
    pub fn from_config(config: &LotConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            floors: (1..=config.floors)
                .map(|number| Floor::new(number, config.spaces_per_floor))
                .collect(),
            pricing: CostStrategy::new(),
        })
    }

    #[must_use]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.floors.iter().map(Floor::capacity).sum()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.floors.iter().map(Floor::occupied_count).sum()
    }

    /// Admit `vehicle`, stamping its ticket with the current time
    pub fn park(&mut self, vehicle: Vehicle) -> Result<Placement> {
        self.park_at(vehicle, Utc::now())
    }

    /// Admit `vehicle` with a ticket stamped `now`
    ///
    /// # Errors
    ///
    /// - `LotFull` if no floor has a free space; nothing changes.
    /// - `AlreadyOccupied` if space bookkeeping is corrupt.
    pub fn park_at(&mut self, vehicle: Vehicle, now: DateTime<Utc>) -> Result<Placement> {
        let registration = vehicle.registration().clone();
        let ticket = ParkingTicket::issue_at(registration.clone(), now);

        let Some(floor) = self.floors.iter_mut().find(|f| f.has_vacancy()) else {
            tracing::debug!(%registration, "parking lot is full");
            return Err(Error::LotFull);
        };
        let slot = floor.park(vehicle, ticket)?.ok_or(Error::LotFull)?;

        tracing::info!(%registration, floor = floor.number(), slot, "vehicle parked");
        Ok(Placement {
            registration,
            floor: floor.number(),
            slot,
            entered_at: now,
        })
    }

    /// Release the vehicle with `registration` and bill it against the current time
    pub fn remove(&mut self, registration: &Registration) -> Result<ExitReceipt> {
        self.remove_at(registration, Utc::now())
    }

    /// Release the vehicle with `registration`, billing the stay up to `now`
    ///
    /// # Errors
    ///
    /// Returns `VehicleNotFound` if no floor holds the registration; nothing
    /// changes.
    pub fn remove_at(
        &mut self,
        registration: &Registration,
        now: DateTime<Utc>,
    ) -> Result<ExitReceipt> {
        let Some((floor, Vacated { slot, occupant })) = self
            .floors
            .iter_mut()
            .find_map(|f| f.remove_by_registration(registration).map(|v| (f.number(), v)))
        else {
            tracing::debug!(%registration, "vehicle not found");
            return Err(Error::VehicleNotFound {
                registration: registration.to_string(),
            });
        };

        let kind = occupant.vehicle.kind();
        let entered_at = occupant.ticket.entered_at();
        let charge = self.pricing.charge_between(kind, entered_at, now);

        tracing::info!(
            %registration,
            floor,
            slot,
            %kind,
            hours = charge.hours,
            fee = charge.fee,
            "vehicle removed"
        );
        Ok(ExitReceipt {
            registration: registration.clone(),
            floor,
            slot,
            kind,
            color: occupant.vehicle.color().to_string(),
            entered_at,
            exited_at: now,
            hours: charge.hours,
            fee: charge.fee,
        })
    }

    /// Free slots per floor
    #[must_use]
    pub fn status(&self) -> LotStatus {
        LotStatus(
            self.floors
                .iter()
                .map(|f| FloorAvailability {
                    floor: f.number(),
                    available: f.available_slots(),
                })
                .collect(),
        )
    }

    /// Locate a parked vehicle
    #[must_use]
    pub fn find(&self, registration: &Registration) -> Option<Location> {
        self.floors.iter().find_map(|f| {
            f.find(registration).map(|slot| Location {
                floor: f.number(),
                slot,
            })
        })
    }
}
