mod resolve;
pub mod types;
pub mod validation;

use clap::Parser;

pub use types::{Args, CleanArgs};

/// Parse the command line and resolve it into the settings the server runs with.
///
/// # Errors
///
/// Will return `Err` if the arguments are inconsistent or a referenced file cannot be read
pub fn args_checks() -> Result<CleanArgs, String> {
    let mut args = Args::parse();
    args.validate()?;
    CleanArgs::try_from(args)
}
