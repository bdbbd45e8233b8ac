//! Commands module for the parking CLI
//!
//! Provides the demo walk-through, the scripted session runner and the rate table.

pub mod demo;
pub mod rates;
pub mod session;
