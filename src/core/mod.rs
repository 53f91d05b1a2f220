pub mod parser;
pub mod planner;
pub mod presenter;
pub mod table;

pub use crate::domain::model::{DepartureQuery, DepartureRecord, Leg, RouteAlias, StopName};
pub use crate::domain::ports::{DepartureSource, StopPicker, StopSuggester};
pub use crate::utils::error::Result;
