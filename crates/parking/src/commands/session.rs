//! Line-oriented lot session
//!
//! Reads one command per line and applies it to a single in-memory lot.
//! Refusals (`LotFull`, `VehicleNotFound`) are reported and the session
//! carries on; anything else stops it.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use parking_core::{
    Error, LotConfig, OutputFormat, ParkingLot, Registration, Vehicle, VehicleKind,
};

use crate::report::Reporter;

/// Color recorded when a park command omits one
const DEFAULT_COLOR: &str = "unspecified";

/// A single lot operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Park(Vehicle),
    Remove(Registration),
    Status,
}

impl SessionCommand {
    /// Parse one script line; `None` for blank lines and comments
    pub fn parse_line(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        let command = match (verb.to_lowercase().as_str(), args.as_slice()) {
            ("park", [registration, kind]) => Self::Park(Vehicle::new(
                Registration::parse(registration)?,
                VehicleKind::from_name(kind)?,
                DEFAULT_COLOR,
            )),
            ("park", [registration, kind, color]) => Self::Park(Vehicle::new(
                Registration::parse(registration)?,
                VehicleKind::from_name(kind)?,
                *color,
            )),
            ("park", _) => return Err(usage("usage: park <registration> <kind> [color]")),
            ("remove", [registration]) => Self::Remove(Registration::parse(registration)?),
            ("remove", _) => return Err(usage("usage: remove <registration>")),
            ("status", []) => Self::Status,
            ("status", _) => return Err(usage("usage: status")),
            (other, _) => {
                return Err(usage(&format!(
                    "unknown command '{other}' (expected park, remove or status)"
                )))
            }
        };
        Ok(Some(command))
    }
}

fn usage(message: &str) -> anyhow::Error {
    Error::ParseError(message.to_string()).into()
}

/// Apply `command` to `lot` and report the outcome
///
/// # Errors
///
/// Returns an error if the lot reports an unrecoverable fault or the
/// report cannot be written.
pub fn execute<W: Write>(
    lot: &mut ParkingLot,
    command: SessionCommand,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    match command {
        SessionCommand::Park(vehicle) => match lot.park(vehicle) {
            Ok(placement) => reporter.parked(&placement),
            Err(e) if e.is_recoverable() => reporter.refused(&e),
            Err(e) => Err(e.into()),
        },
        SessionCommand::Remove(registration) => match lot.remove(&registration) {
            Ok(receipt) => reporter.removed(&receipt),
            Err(e) if e.is_recoverable() => reporter.refused(&e),
            Err(e) => Err(e.into()),
        },
        SessionCommand::Status => reporter.status(&lot.status()),
    }
}

/// Run every command from `input` against a fresh lot
pub fn run<R: BufRead, W: Write>(
    config: &LotConfig,
    input: R,
    out: W,
    format: OutputFormat,
) -> Result<()> {
    let mut lot = ParkingLot::from_config(config)?;
    let mut reporter = Reporter::new(out, format);
    tracing::debug!(
        floors = config.floors,
        spaces_per_floor = config.spaces_per_floor,
        "session started"
    );

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("Failed to read line {line_number}"))?;
        let Some(command) = SessionCommand::parse_line(&line)
            .with_context(|| format!("line {line_number}: {}", line.trim()))?
        else {
            continue;
        };
        execute(&mut lot, command, &mut reporter)
            .with_context(|| format!("line {line_number}: {}", line.trim()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str, config: LotConfig) -> Result<String> {
        let mut out = Vec::new();
        run(&config, script.as_bytes(), &mut out, OutputFormat::Human)?;
        Ok(String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn test_parse_park_with_and_without_color() -> Result<()> {
        let with_color = SessionCommand::parse_line("park KA01 car red")?;
        let without = SessionCommand::parse_line("PARK KA02 Bike")?;

        match (with_color, without) {
            (Some(SessionCommand::Park(a)), Some(SessionCommand::Park(b))) => {
                assert_eq!(a.color(), "red");
                assert_eq!(b.kind(), VehicleKind::Bike);
                assert_eq!(b.color(), DEFAULT_COLOR);
            }
            other => panic!("unexpected parse: {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_skips_blank_and_comments() -> Result<()> {
        assert_eq!(SessionCommand::parse_line("")?, None);
        assert_eq!(SessionCommand::parse_line("   # park X car")?, None);
        Ok(())
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        for line in [
            "park",
            "park KA01",
            "park KA01 boat",
            "remove",
            "remove A B",
            "status now",
            "leave KA01",
        ] {
            assert!(
                SessionCommand::parse_line(line).is_err(),
                "'{line}' should not parse"
            );
        }
    }

    #[test]
    fn test_malformed_lines_are_parse_errors() {
        for line in ["park A", "remove", "status now", "fly B"] {
            let err = SessionCommand::parse_line(line).expect_err("malformed line");
            let core = err.downcast_ref::<Error>();
            assert!(
                matches!(core, Some(Error::ParseError(_))),
                "'{line}' gave {err:#}"
            );
            assert_eq!(core.map(Error::exit_code), Some(2));
        }
    }

    #[test]
    fn test_session_reports_in_order() -> Result<()> {
        let script = "\
            park A car\n\
            park B car\n\
            park C bike\n\
            remove B\n\
            status\n";
        let out = run_script(
            script,
            LotConfig {
                floors: 2,
                spaces_per_floor: 3,
            },
        )?;

        let expected = "\
Parked vehicle at space 1 on floor 1
Parked vehicle at space 2 on floor 1
Parked vehicle at space 3 on floor 1
Removed vehicle from space 2 on floor 1
Vehicle B removed. Total cost: 20
Floor 1 availability:
Space 2 is available
Floor 2 availability:
Space 1 is available
Space 2 is available
Space 3 is available
";
        assert_eq!(out, expected);
        Ok(())
    }

    #[test]
    fn test_session_continues_after_refusals() -> Result<()> {
        let script = "park A car\npark B car\nremove Z\npark C truck\n";
        let out = run_script(
            script,
            LotConfig {
                floors: 1,
                spaces_per_floor: 1,
            },
        )?;

        assert_eq!(
            out,
            "Parked vehicle at space 1 on floor 1\n\
             Parking lot is full!\n\
             Vehicle not found!\n\
             Parking lot is full!\n"
        );
        Ok(())
    }

    #[test]
    fn test_malformed_line_aborts_with_line_number() {
        let err = run_script("park A car\nfly B\n", LotConfig::default())
            .expect_err("second line is malformed");
        assert!(format!("{err:#}").contains("line 2"));
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::ParseError(_))
        ));
    }
}
