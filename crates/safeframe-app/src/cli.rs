//! Command-line interface.

use crate::app::{App, AppConfig, AppError};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// SafeFrame safe-area editor (headless).
///
/// Loads an image, replays a scripted pointer session against the safe-area
/// editor and prints the resulting areas as JSON.
#[derive(Parser, Debug)]
#[command(name = "safeframe", version, about)]
pub struct CliArgs {
    /// Image to place safe areas on.
    pub image: PathBuf,

    /// Space available to the canvas, as WIDTHxHEIGHT.
    #[arg(long, default_value = "1280x800", value_parser = parse_viewport, value_name = "WxH")]
    pub viewport: (u32, u32),

    /// JSON session script to replay.
    #[arg(short, long, value_name = "FILE")]
    pub session: Option<PathBuf>,

    /// Write a PNG preview of the image with its overlay.
    #[arg(short, long, value_name = "FILE")]
    pub preview: Option<PathBuf>,

    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,
}

fn parse_viewport(value: &str) -> Result<(u32, u32), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {value:?}"))?;
    let width: u32 = width.trim().parse().map_err(|e| format!("invalid width: {e}"))?;
    let height: u32 = height.trim().parse().map_err(|e| format!("invalid height: {e}"))?;
    if width == 0 || height == 0 {
        return Err("viewport dimensions must be positive".to_string());
    }
    Ok((width, height))
}

impl CliArgs {
    /// Build the application configuration from the arguments.
    pub fn config(&self) -> AppConfig {
        AppConfig {
            viewport_width: self.viewport.0,
            viewport_height: self.viewport.1,
            pretty: !self.compact,
            ..AppConfig::default()
        }
    }

    /// Run the application and return an OS exit code.
    pub fn run(&self) -> ExitCode {
        match self.execute() {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{e}");
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        }
    }

    fn execute(&self) -> Result<String, AppError> {
        let mut app = App::with_config(self.config());
        app.load_image(&self.image)?;
        if let Some(session) = &self.session {
            let changed = app.run_session_file(session)?;
            log::info!("Session applied, {} steps changed the editor", changed);
        }
        if let Some(preview) = &self.preview {
            app.export_preview(preview)?;
        }
        app.snapshot_json()
    }
}
