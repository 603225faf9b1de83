//! Command implementations for the NCER processor CLI

pub mod convert;
pub mod shared;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Dispatch the selected subcommand
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Convert(convert_args) => convert::execute(convert_args),
    }
}
