//! Parking - command-line front end for the parking lot
//!
//! Wraps `parking-core` with configuration loading, logging and
//! human or JSON reporting.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod report;
