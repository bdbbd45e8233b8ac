//! Rendering lot outcomes for the operator
//!
//! Human format prints the console text carried by each outcome's
//! `Display`. JSON format prints one object per outcome with an `event` tag.

use std::io::Write;

use anyhow::Result;
use parking_core::{
    Error, ExitReceipt, HourlyRates, LotStatus, OutputFormat, Placement, VehicleKind,
};
use serde::Serialize;
use strum::IntoEnumIterator;

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Parked(&'a Placement),
    Removed(&'a ExitReceipt),
    Status { floors: &'a LotStatus },
    LotFull { message: String },
    VehicleNotFound { registration: &'a str, message: String },
    Refused { message: String },
    Rates(&'a HourlyRates),
}

/// Writes reports to an output stream in the chosen format
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Reporter<W> {
    pub const fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn parked(&mut self, placement: &Placement) -> Result<()> {
        self.emit(&Event::Parked(placement), placement)
    }

    pub fn removed(&mut self, receipt: &ExitReceipt) -> Result<()> {
        self.emit(&Event::Removed(receipt), receipt)
    }

    pub fn status(&mut self, status: &LotStatus) -> Result<()> {
        self.emit(&Event::Status { floors: status }, status)
    }

    /// Report a refusal the operator can act on (`LotFull`, `VehicleNotFound`)
    pub fn refused(&mut self, error: &Error) -> Result<()> {
        let message = error.to_string();
        let event = match error {
            Error::VehicleNotFound { registration } => Event::VehicleNotFound {
                registration: registration.as_str(),
                message: message.clone(),
            },
            Error::LotFull => Event::LotFull {
                message: message.clone(),
            },
            _ => Event::Refused {
                message: message.clone(),
            },
        };
        self.emit(&event, &message)
    }

    pub fn rates(&mut self, rates: &HourlyRates) -> Result<()> {
        let table = VehicleKind::iter()
            .map(|kind| format!("{kind}: {} per hour", rates.rate(kind)))
            .collect::<Vec<_>>()
            .join("\n");
        self.emit(&Event::Rates(rates), &table)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &Event<'_>, human: &dyn std::fmt::Display) -> Result<()> {
        if self.format.is_json() {
            let line = serde_json::to_string(event)?;
            writeln!(self.out, "{line}")?;
        } else {
            writeln!(self.out, "{human}")?;
        }
        Ok(())
    }
}
