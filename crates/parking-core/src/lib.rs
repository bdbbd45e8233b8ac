//! parking-core - domain model for a multi-floor parking lot
//!
//! This crate provides:
//! - Vehicle, registration and ticket types
//! - Parking spaces and floors with first-fit allocation
//! - The `ParkingLot` aggregate (park, remove, status)
//! - Duration-based pricing per vehicle class
//! - Layered lot configuration
//!
//! Nothing here prints. Every outcome comes back as a value whose `Display`
//! is the console text an operator sees.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod floor;
pub mod lot;
mod output_format;
pub mod pricing;
pub mod space;
pub mod ticket;
pub mod vehicle;

pub use config::{load_config, LotConfig, MAX_TOTAL_SPACES};
pub use error::{Error, Result};
pub use floor::{Floor, Vacated};
pub use lot::{ExitReceipt, FloorAvailability, Location, LotStatus, ParkingLot, Placement};
pub use output_format::OutputFormat;
pub use pricing::{Charge, CostStrategy, HourlyRates};
pub use space::{Occupant, ParkingSpace, SpaceState};
pub use ticket::ParkingTicket;
pub use vehicle::{Registration, Vehicle, VehicleKind};
