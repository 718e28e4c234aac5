use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use restage::logging::LoggingArgs;

/// Delete a path if it exists.
///
/// Directories are deleted recursively. Succeeds when nothing exists at the
/// path to begin with.
#[derive(Debug, Parser)]
#[clap(name = "remove", version)]
struct RemoveArgs {
    /// The path to delete
    destination: PathBuf,
    #[clap(flatten)]
    logging: LoggingArgs,
}

fn main() -> ExitCode {
    let args = RemoveArgs::parse();
    args.logging.init_logger();

    match restage::remove(&args.destination) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
