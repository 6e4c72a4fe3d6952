use std::process::ExitCode;

use clap::Parser;
use file2qr::cli::Cli;
use file2qr::Config;
use log::debug;

fn main() -> ExitCode {
    // Warnings only unless RUST_LOG says otherwise.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let config = Config::from(Cli::parse());

    match file2qr::app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{err:?}");
            eprintln!("{err}");
            for hint in err.hints() {
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}
