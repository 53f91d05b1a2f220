use crate::config::routes::RouteStore;
use crate::domain::model::{RouteAlias, StopName};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_pattern, Validate};
use std::path::PathBuf;

pub const DEFAULT_FROM_STOP: &str = "Munkegata M4 (Trondheim)";
pub const DEFAULT_TO_STOP: &str = "Solsiden (Trondheim)";

const DATE_PATTERN: &str = r"^\d{1,2}\.\d{1,2}\.\d{4}$";
const TIME_PATTERN: &str = r"^\d{1,2}:\d{1,2}$";

/// Parsed command line, independent of the argument parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    pub saved_route: Option<String>,
    /// Explicit stops; these override the saved route field by field.
    pub from: Option<StopName>,
    pub to: Option<StopName>,
    pub routes_file: PathBuf,
    pub use_suggestions: bool,
    pub date: Option<String>,
    pub time: Option<String>,
}

/// Starting point of a run: the route to search for and whether its stop
/// names still need to be refined through suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialRoute {
    pub route: RouteAlias,
    pub refine: bool,
}

impl TripRequest {
    pub fn new(routes_file: impl Into<PathBuf>) -> Self {
        Self {
            saved_route: None,
            from: None,
            to: None,
            routes_file: routes_file.into(),
            use_suggestions: true,
            date: None,
            time: None,
        }
    }

    /// Resolves the saved route (if any) and applies overrides.
    ///
    /// Saved routes are taken to hold exact stop names, so they are never
    /// refined. Without any stop input the built-in default route is used
    /// as-is; a single missing stop falls back to its default.
    pub fn initial_route(&self) -> Result<InitialRoute> {
        if let Some(name) = &self.saved_route {
            let store = RouteStore::load(&self.routes_file)?;
            let route = store
                .get(name)?
                .with_overrides(self.from.clone(), self.to.clone());
            tracing::debug!("Using saved route '{}': {:?}", name, route);
            return Ok(InitialRoute {
                route,
                refine: false,
            });
        }

        let defaults = RouteAlias::new(DEFAULT_FROM_STOP, DEFAULT_TO_STOP);
        if self.from.is_none() && self.to.is_none() {
            return Ok(InitialRoute {
                route: defaults,
                refine: false,
            });
        }

        Ok(InitialRoute {
            route: defaults.with_overrides(self.from.clone(), self.to.clone()),
            refine: self.use_suggestions,
        })
    }
}

impl Validate for TripRequest {
    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.saved_route {
            validate_non_empty_string("saved_route", name)?;
        }
        if let Some(from) = &self.from {
            validate_non_empty_string("from", from)?;
        }
        if let Some(to) = &self.to {
            validate_non_empty_string("to", to)?;
        }
        if let Some(date) = &self.date {
            validate_pattern("date", date, DATE_PATTERN, "D.M.YYYY")?;
        }
        if let Some(time) = &self.time {
            validate_pattern("time", time, TIME_PATTERN, "H:MM")?;
        }
        Ok(())
    }
}
