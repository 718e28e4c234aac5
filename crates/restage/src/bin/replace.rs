use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use restage::logging::LoggingArgs;

/// Replace a destination path with a copy of a source path.
///
/// Whatever currently exists at the destination is deleted first; the source
/// may be a file or a whole directory tree.
#[derive(Debug, Parser)]
#[clap(name = "replace", version)]
struct ReplaceArgs {
    /// The path to copy from; must exist
    source: PathBuf,
    /// The path that ends up as a copy of SOURCE
    destination: PathBuf,
    #[clap(flatten)]
    logging: LoggingArgs,
}

fn main() -> ExitCode {
    let args = ReplaceArgs::parse();
    args.logging.init_logger();

    match restage::replace(&args.source, &args.destination) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
