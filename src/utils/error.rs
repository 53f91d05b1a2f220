use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtbError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to load routes file {path}: {message}")]
    RoutesFileError { path: String, message: String },

    #[error("Route {name} not found in {path}")]
    RouteNotFoundError { name: String, path: String },

    #[error("No stop suggestions for '{query}'")]
    NoSuggestionsError { query: String },

    #[error("Selection of '{field}' stop was cancelled")]
    SelectionCancelledError { field: String },

    #[error("Interactive selection failed: {message}")]
    InteractionError { message: String },

    #[error("Departure markup parse error: {message}")]
    ParseError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Parse,
    Configuration,
    Routes,
    Interaction,
}

impl AtbError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AtbError::HttpError(_) | AtbError::IoError(_) => ErrorCategory::Network,
            AtbError::SerializationError(_) | AtbError::ParseError { .. } => ErrorCategory::Parse,
            AtbError::RoutesFileError { .. } | AtbError::RouteNotFoundError { .. } => {
                ErrorCategory::Routes
            }
            AtbError::NoSuggestionsError { .. }
            | AtbError::SelectionCancelledError { .. }
            | AtbError::InteractionError { .. } => ErrorCategory::Interaction,
            AtbError::ConfigError { .. } | AtbError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Process exit status. Routes file and unknown route get their own codes.
    pub fn exit_code(&self) -> i32 {
        match self {
            AtbError::RoutesFileError { .. } => 1,
            AtbError::RouteNotFoundError { .. } => 2,
            _ => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AtbError::HttpError(e) if e.is_status() => format!(
                "The AtB travel planner answered with status {}",
                e.status().map(|s| s.as_u16()).unwrap_or_default()
            ),
            AtbError::HttpError(_) => "Could not reach the AtB travel planner".to_string(),
            AtbError::ParseError { .. } => {
                "Could not understand the travel planner response".to_string()
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and try again",
            ErrorCategory::Parse => {
                "Check that the stop names are valid; the upstream page format may have changed"
            }
            ErrorCategory::Configuration => "Check the settings file and command line flags",
            ErrorCategory::Routes => "Check the routes file or pass the stops explicitly",
            ErrorCategory::Interaction => {
                "Try a more specific stop name, or use --no-suggestions"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AtbError>;
