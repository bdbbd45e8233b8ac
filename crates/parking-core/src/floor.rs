//! Floors: fixed rows of parking spaces with first-fit allocation

use serde::{Deserialize, Serialize};

use crate::{
    space::{Occupant, ParkingSpace},
    ticket::ParkingTicket,
    vehicle::{Registration, Vehicle},
    Result,
};

/// A space freed by a removal, with what it held
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vacated {
    pub slot: u32,
    pub occupant: Occupant,
}

/// One level of the lot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    number: u32,
    spaces: Vec<ParkingSpace>,
}

impl Floor {
    /// Build a floor of `space_count` free spaces numbered from 1
    #[must_use]
    pub fn new(number: u32, space_count: u32) -> Self {
        Self {
            number,
            spaces: (1..=space_count).map(ParkingSpace::new).collect(),
        }
    }

    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn spaces(&self) -> &[ParkingSpace] {
        &self.spaces
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.spaces.len()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.spaces.iter().filter(|s| !s.is_available()).count()
    }

    #[must_use]
    pub fn has_vacancy(&self) -> bool {
        self.spaces.iter().any(ParkingSpace::is_available)
    }

    /// Park in the lowest-numbered free space.
    ///
    /// Returns the claimed slot, or `None` when the floor is full. A full
    /// floor drops the offered vehicle and ticket, so callers that need
    /// them back check [`Floor::has_vacancy`] first.
    pub fn park(&mut self, vehicle: Vehicle, ticket: ParkingTicket) -> Result<Option<u32>> {
        let Some(space) = self.spaces.iter_mut().find(|s| s.is_available()) else {
            tracing::debug!(floor = self.number, "no free space on floor");
            return Ok(None);
        };
        space.park(vehicle, ticket)?;
        Ok(Some(space.slot()))
    }

    /// Free the lowest-numbered space holding `registration`
    pub fn remove_by_registration(&mut self, registration: &Registration) -> Option<Vacated> {
        let space = self.spaces.iter_mut().find(|s| {
            s.occupant()
                .is_some_and(|o| o.vehicle.registration() == registration)
        })?;
        let slot = space.slot();
        space.remove().map(|occupant| Vacated { slot, occupant })
    }

    /// Slot numbers of free spaces, ascending
    #[must_use]
    pub fn available_slots(&self) -> Vec<u32> {
        self.spaces
            .iter()
            .filter(|s| s.is_available())
            .map(ParkingSpace::slot)
            .collect()
    }

    /// Slot holding `registration`, if any
    #[must_use]
    pub fn find(&self, registration: &Registration) -> Option<u32> {
        self.spaces
            .iter()
            .find(|s| {
                s.occupant()
                    .is_some_and(|o| o.vehicle.registration() == registration)
            })
            .map(ParkingSpace::slot)
    }
}
