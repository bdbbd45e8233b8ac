//! A single parking space

use serde::{Deserialize, Serialize};

use crate::{ticket::ParkingTicket, vehicle::Vehicle, Error, Result};

/// The vehicle in a space together with the ticket it entered on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    pub vehicle: Vehicle,
    pub ticket: ParkingTicket,
}

/// Occupancy of a space
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SpaceState {
    #[default]
    Free,
    Occupied(Occupant),
}

/// One numbered slot on a floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSpace {
    slot: u32,
    state: SpaceState,
}

impl ParkingSpace {
    /// Create a free space with the given 1-based slot number
    #[must_use]
    pub const fn new(slot: u32) -> Self {
        Self {
            slot,
            state: SpaceState::Free,
        }
    }

    #[must_use]
    pub const fn slot(&self) -> u32 {
        self.slot
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.state, SpaceState::Free)
    }

    #[must_use]
    pub const fn occupant(&self) -> Option<&Occupant> {
        match &self.state {
            SpaceState::Free => None,
            SpaceState::Occupied(occupant) => Some(occupant),
        }
    }

    /// Claim the space for `vehicle`
    ///
    /// # Errors
    ///
    /// Returns `AlreadyOccupied` if the space is taken; the space is left
    /// unchanged.
    pub fn park(&mut self, vehicle: Vehicle, ticket: ParkingTicket) -> Result<()> {
        if !self.is_available() {
            return Err(Error::AlreadyOccupied { slot: self.slot });
        }
        self.state = SpaceState::Occupied(Occupant { vehicle, ticket });
        Ok(())
    }

    /// Free the space, handing back whatever was parked there
    pub fn remove(&mut self) -> Option<Occupant> {
        match std::mem::take(&mut self.state) {
            SpaceState::Free => None,
            SpaceState::Occupied(occupant) => Some(occupant),
        }
    }
}
