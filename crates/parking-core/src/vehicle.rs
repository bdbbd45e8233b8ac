//! Vehicle identity types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{Error, Result};

/// Registration identifier of a vehicle.
///
/// Trimmed on construction and never empty. Two registrations are the same
/// vehicle only when they are byte-for-byte equal; no case folding happens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Registration(String);

impl Registration {
    /// Parse a registration, trimming surrounding whitespace.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidRegistration(
                "registration cannot be empty".to_string(),
            ));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(Error::InvalidRegistration(format!(
                "registration '{trimmed}' contains whitespace"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Registration {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<Registration> for String {
    fn from(value: Registration) -> Self {
        value.0
    }
}

/// Vehicle class, which decides the hourly rate
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VehicleKind {
    Car,
    Bike,
    Truck,
    Bus,
}

impl VehicleKind {
    /// Parse a class name such as `car` or `BUS`.
    pub fn from_name(name: &str) -> Result<Self> {
        name.trim()
            .parse()
            .map_err(|_| Error::UnknownVehicleKind(name.to_string()))
    }
}

/// A vehicle presented at the lot entrance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    registration: Registration,
    kind: VehicleKind,
    color: String,
}

impl Vehicle {
    #[must_use]
    pub fn new(registration: Registration, kind: VehicleKind, color: impl Into<String>) -> Self {
        Self {
            registration,
            kind,
            color: color.into(),
        }
    }

    #[must_use]
    pub const fn registration(&self) -> &Registration {
        &self.registration
    }

    #[must_use]
    pub const fn kind(&self) -> VehicleKind {
        self.kind
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}
