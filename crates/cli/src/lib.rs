//! `stockroom-cli`: the interactive console around the inventory domain.
//!
//! `main` reads [`config::Config`], initializes tracing, and hands stdin/stdout
//! to a [`session::Session`].

pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod session;

pub use config::{Config, ConfigError};
pub use error::{CliError, CliResult};
pub use menu::MenuChoice;
pub use session::Session;
