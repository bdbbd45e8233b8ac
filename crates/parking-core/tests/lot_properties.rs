//! Property-based tests for lot allocation invariants using proptest.
//!
//! # Invariants tested:
//! - Capacity: F×S vehicles fit, the next one is refused without side effects
//! - Minimum charge: an immediate exit bills one hour at the class rate
//! - Not found: removing an unknown registration changes nothing
//! - Status: a freed slot reappears in ascending order
//! - First fit: new vehicles always take the lowest free slot
//!
//! Reproducible: Set PROPTEST_SEED environment variable for deterministic runs

#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

use chrono::{TimeZone, Utc};
use parking_core::{Error, ParkingLot, Registration, Vehicle, VehicleKind};
use proptest::prelude::*;

// ═══════════════════════════════════════════════════════════════════════════
// STRATEGIES
// ═══════════════════════════════════════════════════════════════════════════

fn kind_strategy() -> impl Strategy<Value = VehicleKind> {
    prop_oneof![
        Just(VehicleKind::Car),
        Just(VehicleKind::Bike),
        Just(VehicleKind::Truck),
        Just(VehicleKind::Bus),
    ]
}

fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=4, 1u32..=6)
}

fn vehicle(index: usize, kind: VehicleKind) -> Vehicle {
    let registration =
        Registration::parse(format!("REG{index:04}")).expect("generated registration is valid");
    Vehicle::new(registration, kind, "blue")
}

fn fill(lot: &mut ParkingLot, count: usize) {
    for index in 0..count {
        lot.park(vehicle(index, VehicleKind::Car))
            .expect("lot has room");
    }
}

const fn hourly_rate(kind: VehicleKind) -> u64 {
    match kind {
        VehicleKind::Car => 20,
        VehicleKind::Bike => 10,
        VehicleKind::Truck | VehicleKind::Bus => 30,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PROPERTIES
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn prop_full_lot_refuses_next_vehicle((floors, spaces) in dimensions_strategy(), kind in kind_strategy()) {
        let mut lot = ParkingLot::new(floors, spaces).expect("valid dimensions");
        let capacity = lot.capacity();
        prop_assert_eq!(capacity, (floors * spaces) as usize);

        fill(&mut lot, capacity);
        let before = lot.status();

        let result = lot.park(vehicle(capacity, kind));
        prop_assert_eq!(result, Err(Error::LotFull));
        prop_assert_eq!(lot.occupied_count(), capacity);
        prop_assert_eq!(lot.status(), before);
    }

    #[test]
    fn prop_immediate_exit_bills_one_hour(kind in kind_strategy(), minutes in 0i64..60) {
        let mut lot = ParkingLot::new(2, 3).expect("valid dimensions");
        let entry = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).single().expect("valid date");
        let car = vehicle(1, kind);
        let registration = car.registration().clone();

        lot.park_at(car, entry).expect("lot has room");
        let receipt = lot
            .remove_at(&registration, entry + chrono::Duration::minutes(minutes))
            .expect("vehicle is parked");

        prop_assert_eq!(receipt.hours, 1);
        prop_assert_eq!(receipt.fee, hourly_rate(kind));
    }

    #[test]
    fn prop_unknown_removal_leaves_state((floors, spaces) in dimensions_strategy(), parked in 0usize..10) {
        let mut lot = ParkingLot::new(floors, spaces).expect("valid dimensions");
        let parked = parked.min(lot.capacity());
        fill(&mut lot, parked);
        let before = lot.status();
        let occupied = lot.occupied_count();

        let missing = Registration::parse("NEVER-PARKED").expect("valid registration");
        let result = lot.remove(&missing);

        let is_not_found = matches!(result, Err(Error::VehicleNotFound { .. }));
        prop_assert!(is_not_found);
        prop_assert_eq!(lot.status(), before);
        prop_assert_eq!(lot.occupied_count(), occupied);
    }

    #[test]
    fn prop_freed_slot_reappears_sorted((floors, spaces) in dimensions_strategy(), pick in any::<prop::sample::Index>()) {
        let mut lot = ParkingLot::new(floors, spaces).expect("valid dimensions");
        let capacity = lot.capacity();
        fill(&mut lot, capacity);

        let target = vehicle(pick.index(capacity), VehicleKind::Car);
        let receipt = lot.remove(target.registration()).expect("vehicle is parked");

        let status = lot.status();
        let free = status.available_on(receipt.floor).expect("floor exists");
        prop_assert_eq!(free, &[receipt.slot][..]);
        for floor in status.floors() {
            let mut sorted = floor.available.clone();
            sorted.sort_unstable();
            prop_assert_eq!(&floor.available, &sorted);
        }
    }

    #[test]
    fn prop_first_fit_takes_lowest_free_slot(spaces in 2u32..8, freed in prop::collection::btree_set(0usize..8, 1..4)) {
        let mut lot = ParkingLot::new(1, spaces).expect("valid dimensions");
        fill(&mut lot, spaces as usize);

        let freed: Vec<usize> = freed.into_iter().filter(|&i| i < spaces as usize).collect();
        prop_assume!(!freed.is_empty());
        for &index in &freed {
            lot.remove(vehicle(index, VehicleKind::Car).registration())
                .expect("vehicle is parked");
        }

        // vehicle i sits in slot i + 1, so the lowest freed index gives the lowest free slot
        let expected_slot = u32::try_from(freed[0] + 1).expect("small slot number");
        let placement = lot.park(vehicle(100, VehicleKind::Bike)).expect("a slot was freed");
        prop_assert_eq!(placement.floor, 1);
        prop_assert_eq!(placement.slot, expected_slot);
    }
}

#[test]
fn occupied_then_two_free_claims_slot_two() {
    let mut lot = ParkingLot::new(1, 3).expect("valid dimensions");
    lot.park(vehicle(0, VehicleKind::Car)).expect("room");

    let first = lot.park(vehicle(1, VehicleKind::Car)).expect("room");
    let second = lot.park(vehicle(2, VehicleKind::Car)).expect("room");

    assert_eq!(first.slot, 2);
    assert_eq!(second.slot, 3);
}
