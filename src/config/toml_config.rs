use crate::utils::error::{AtbError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SUGGEST_ENDPOINT: &str =
    "https://rp.atb.no/scripts/TravelMagic/TravelMagicWE.dll/StageJSON";
pub const DEFAULT_DEPARTURES_ENDPOINT: &str =
    "https://rp.atb.no/scripts/TravelMagic/TravelMagicWE.dll/svar";
const DEFAULT_SPACING: usize = 3;

/// Optional settings file, e.g. `~/.config/atb/config.toml`:
///
/// ```toml
/// [service]
/// suggest_endpoint = "https://rp.atb.no/scripts/TravelMagic/TravelMagicWE.dll/StageJSON"
/// departures_endpoint = "https://rp.atb.no/scripts/TravelMagic/TravelMagicWE.dll/svar"
/// # no request deadline unless set
/// timeout_seconds = 30
///
/// [display]
/// spacing = 3
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub suggest_endpoint: Option<String>,
    pub departures_endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub spacing: Option<usize>,
}

impl Settings {
    /// Loads the settings file, falling back to defaults when it does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(AtbError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AtbError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AtbError::ConfigError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn with_endpoints(suggest: impl Into<String>, departures: impl Into<String>) -> Self {
        let mut settings = Self::default();
        settings.service.suggest_endpoint = Some(suggest.into());
        settings.service.departures_endpoint = Some(departures.into());
        settings
    }

    pub fn suggest_endpoint(&self) -> &str {
        self.service
            .suggest_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_SUGGEST_ENDPOINT)
    }

    pub fn departures_endpoint(&self) -> &str {
        self.service
            .departures_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_DEPARTURES_ENDPOINT)
    }

    /// Request deadline; `None` leaves requests without one.
    pub fn timeout_seconds(&self) -> Option<u64> {
        self.service.timeout_seconds
    }

    pub fn spacing(&self) -> usize {
        self.display.spacing.unwrap_or(DEFAULT_SPACING)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("service.suggest_endpoint", self.suggest_endpoint())?;
        validate_url("service.departures_endpoint", self.departures_endpoint())?;
        if let Some(timeout) = self.timeout_seconds() {
            validate_positive_number("service.timeout_seconds", timeout, 1)?;
        }
        validate_positive_number("display.spacing", self.spacing() as u64, 1)?;
        Ok(())
    }
}
