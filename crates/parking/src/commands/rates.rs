use std::io::Write;

use anyhow::Result;
use parking_core::{CostStrategy, OutputFormat};

use crate::report::Reporter;

/// Print the hourly rate table
pub fn run<W: Write>(out: W, format: OutputFormat) -> Result<()> {
    let pricing = CostStrategy::new();
    Reporter::new(out, format).rates(pricing.rates())
}
