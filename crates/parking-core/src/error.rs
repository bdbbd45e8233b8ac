//! Error types for parking-core
//!
//! Errors fall into three groups:
//!
//! - **Business outcomes**: `LotFull`, `VehicleNotFound` (exit code 1)
//! - **Validation errors**: registration, vehicle kind and configuration (exit code 2)
//! - **Internal faults**: `AlreadyOccupied` (exit code 3)

use thiserror::Error;

/// Core error type for parking operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A vehicle was offered to a space that already holds one.
    ///
    /// Floors only hand vehicles to free spaces, so seeing this means the
    /// lot's bookkeeping is broken.
    #[error("Space {slot} is already occupied")]
    AlreadyOccupied {
        /// Slot number of the occupied space
        slot: u32,
    },

    /// Every space on every floor is taken
    #[error("Parking lot is full!")]
    LotFull,

    /// No parked vehicle carries the requested registration
    #[error("Vehicle not found!")]
    VehicleNotFound {
        /// The registration that was looked up
        registration: String,
    },

    /// Registration identifier failed validation
    #[error("Invalid registration: {0}")]
    InvalidRegistration(String),

    /// Vehicle class name could not be parsed
    #[error("Unknown vehicle kind '{0}' (expected car, bike, truck or bus)")]
    UnknownVehicleKind(String),

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Filesystem access failed
    #[error("IO error: {0}")]
    IoError(String),
}

impl Error {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::LotFull | Self::VehicleNotFound { .. } => 1,
            Self::InvalidRegistration(_)
            | Self::UnknownVehicleKind(_)
            | Self::InvalidConfig(_)
            | Self::ParseError(_)
            | Self::IoError(_) => 2,
            Self::AlreadyOccupied { .. } => 3,
        }
    }

    /// Whether the caller can report this and carry on.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::LotFull | Self::VehicleNotFound { .. })
    }
}

/// Result type alias for parking-core operations
pub type Result<T> = std::result::Result<T, Error>;
