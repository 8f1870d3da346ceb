//! Main application entry point.

use clap::Parser;
use safeframe_app::CliArgs;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting SafeFrame");

    CliArgs::parse().run()
}
