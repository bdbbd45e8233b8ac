//! Scripted walk-through of the lot
//!
//! Parks two cars and a bike, shows availability, removes the second car
//! and shows availability again.

use std::io::Write;

use anyhow::Result;
use parking_core::{LotConfig, OutputFormat, ParkingLot, Registration, Vehicle, VehicleKind};

use super::session::{execute, SessionCommand};
use crate::report::Reporter;

const SAMPLE_VEHICLES: [(&str, VehicleKind, &str); 3] = [
    ("py01jf5634", VehicleKind::Car, "red"),
    ("up81fb5535", VehicleKind::Car, "blue"),
    ("Hr26ff4533", VehicleKind::Bike, "red"),
];

const DEPARTING: &str = "up81fb5535";

fn script() -> Result<Vec<SessionCommand>> {
    let mut commands = SAMPLE_VEHICLES
        .iter()
        .map(|(registration, kind, color)| {
            Registration::parse(registration)
                .map(|reg| SessionCommand::Park(Vehicle::new(reg, *kind, *color)))
        })
        .collect::<parking_core::Result<Vec<_>>>()?;

    commands.push(SessionCommand::Status);
    commands.push(SessionCommand::Remove(Registration::parse(DEPARTING)?));
    commands.push(SessionCommand::Status);
    Ok(commands)
}

/// Run the demo against a lot built from `config`
pub fn run<W: Write>(config: &LotConfig, out: W, format: OutputFormat) -> Result<()> {
    let mut lot = ParkingLot::from_config(config)?;
    let mut reporter = Reporter::new(out, format);

    for command in script()? {
        execute(&mut lot, command, &mut reporter)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_output(config: LotConfig) -> String {
        let mut out = Vec::new();
        run(&config, &mut out, OutputFormat::Human).expect("demo runs");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn test_demo_on_default_lot() {
        let expected = "\
Parked vehicle at space 1 on floor 1
Parked vehicle at space 2 on floor 1
Parked vehicle at space 3 on floor 1
Floor 1 availability:
Floor 2 availability:
Space 1 is available
Space 2 is available
Space 3 is available
Removed vehicle from space 2 on floor 1
Vehicle up81fb5535 removed. Total cost: 20
Floor 1 availability:
Space 2 is available
Floor 2 availability:
Space 1 is available
Space 2 is available
Space 3 is available
";
        assert_eq!(demo_output(LotConfig::default()), expected);
    }

    #[test]
    fn test_demo_on_tiny_lot_reports_full() {
        let out = demo_output(LotConfig {
            floors: 1,
            spaces_per_floor: 2,
        });
        assert!(out.contains("Parking lot is full!"));
        assert!(out.contains("Vehicle up81fb5535 removed. Total cost: 20"));
    }
}
