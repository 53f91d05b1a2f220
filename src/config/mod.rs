#[cfg(feature = "cli")]
pub mod cli;
pub mod request;
pub mod routes;
pub mod toml_config;

use crate::core::table::DisplayMode;
use std::path::PathBuf;

pub const DEFAULT_ROUTES_FILE: &str = "~/.config/atb/routes.json";
pub const DEFAULT_SETTINGS_FILE: &str = "~/.config/atb/config.toml";

/// Output settings fixed at startup and handed to the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub mode: DisplayMode,
    /// Whether stdout was a terminal when the process started.
    pub interactive: bool,
    pub spacing: usize,
}

impl DisplayConfig {
    /// An explicit choice always wins; otherwise pretty only on a terminal.
    pub fn resolve(explicit: Option<DisplayMode>, interactive: bool, spacing: usize) -> Self {
        let mode = explicit.unwrap_or(if interactive {
            DisplayMode::Pretty
        } else {
            DisplayMode::Plain
        });

        Self {
            mode,
            interactive,
            spacing,
        }
    }
}

/// Expands a leading `~` to `$HOME`.
pub fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), std::env::var_os("HOME")) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ if path == "~" => std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(path)),
        _ => PathBuf::from(path),
    }
}
