use serde::{Deserialize, Serialize};
use std::fmt;

/// Stop name as understood by the AtB travel planner. Opaque to us.
pub type StopName = String;

/// A saved origin/destination pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAlias {
    pub from: StopName,
    pub to: StopName,
}

impl RouteAlias {
    pub fn new(from: impl Into<StopName>, to: impl Into<StopName>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Returns a copy with each given field replaced.
    pub fn with_overrides(&self, from: Option<StopName>, to: Option<StopName>) -> Self {
        Self {
            from: from.unwrap_or_else(|| self.from.clone()),
            to: to.unwrap_or_else(|| self.to.clone()),
        }
    }
}

/// One segment of a journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leg {
    /// A bus or tram line, e.g. `"38"`.
    Line(String),
    /// A segment without a line number, assumed to be walking.
    Walk,
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leg::Line(id) => f.write_str(id),
            Leg::Walk => f.write_str("walking"),
        }
    }
}

/// One departure option, text kept verbatim from the planner response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureRecord {
    pub start_time: String,
    pub duration: String,
    pub legs: Vec<Leg>,
}

impl DepartureRecord {
    pub fn route_description(&self, separator: &str) -> String {
        self.legs
            .iter()
            .map(Leg::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Parameters of a single trip-planner query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureQuery {
    pub from: StopName,
    pub to: StopName,
    /// `D.M.YYYY`; the current date when absent.
    pub date: Option<String>,
    /// `H:MM`; the current time when absent.
    pub time: Option<String>,
}

/// Outcome of the interactive stop selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(StopName),
    Cancelled,
}
