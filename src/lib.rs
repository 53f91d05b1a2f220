pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{AtbClient, ScriptedPicker, TerminalPicker};
pub use crate::config::{request::TripRequest, toml_config::Settings, DisplayConfig};
pub use crate::core::{planner::TripPlanner, presenter::Presenter, table::DisplayMode};
pub use crate::utils::error::{AtbError, Result};
