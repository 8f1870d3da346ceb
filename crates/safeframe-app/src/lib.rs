//! SafeFrame Application
//!
//! Headless shell around the safe-area editor: loads an image, replays a
//! scripted pointer session, prints the resulting areas and exports a
//! preview of the overlay.

mod app;
mod cli;
mod export;
mod session;

pub use app::{App, AppConfig, AppError};
pub use cli::CliArgs;
pub use export::encode_png;
pub use session::{Session, SessionStep};
