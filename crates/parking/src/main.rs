//! Parking CLI
//!
//! Binary name: `parking`

use std::process;

use clap::Parser;
use parking::cli::{self, setup, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = setup::init_tracing(cli.verbose) {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("Warning: {e}");
        }
    }

    if let Err(err) = cli::run(&cli) {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("Error: {err:#}");
        }

        let code = err
            .downcast_ref::<parking_core::Error>()
            .map_or(1, parking_core::Error::exit_code);

        #[allow(clippy::exit)]
        process::exit(code);
    }
}
