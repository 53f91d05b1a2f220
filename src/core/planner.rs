use crate::config::request::TripRequest;
use crate::core::parser::DepartureParser;
use crate::domain::model::{DepartureQuery, DepartureRecord, RouteAlias, Selection, StopName};
use crate::domain::ports::{DepartureSource, StopPicker, StopSuggester};
use crate::utils::error::{AtbError, Result};

/// Returns the single candidate directly, otherwise asks the picker.
///
/// Callers must not pass an empty list; it is reported as an error rather
/// than forwarded to the picker.
pub fn pick_one<P: StopPicker + ?Sized>(
    picker: &P,
    field: &str,
    query: &str,
    options: Vec<StopName>,
) -> Result<StopName> {
    match options.len() {
        0 => Err(AtbError::NoSuggestionsError {
            query: query.to_string(),
        }),
        1 => Ok(options.into_iter().next().unwrap_or_default()),
        _ => match picker.choose_one(field, &options)? {
            Selection::Chosen(stop) => Ok(stop),
            Selection::Cancelled => Err(AtbError::SelectionCancelledError {
                field: field.to_string(),
            }),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripResult {
    pub route: RouteAlias,
    pub departures: Vec<DepartureRecord>,
}

/// Drives one run: route resolution, stop refinement, query and parsing.
pub struct TripPlanner<S, D, P>
where
    S: StopSuggester,
    D: DepartureSource,
    P: StopPicker,
{
    suggester: S,
    source: D,
    picker: P,
    parser: DepartureParser,
}

impl<S, D, P> TripPlanner<S, D, P>
where
    S: StopSuggester,
    D: DepartureSource,
    P: StopPicker,
{
    pub fn new(suggester: S, source: D, picker: P) -> Result<Self> {
        Ok(Self {
            suggester,
            source,
            picker,
            parser: DepartureParser::new()?,
        })
    }

    pub fn picker(&self) -> &P {
        &self.picker
    }

    /// Turns free text into a canonical stop name.
    pub async fn resolve_stop(&self, field: &str, query: &str) -> Result<StopName> {
        let suggestions = self.suggester.suggest(query).await?;
        let stop = pick_one(&self.picker, field, query, suggestions)?;
        tracing::debug!("Resolved '{}' stop '{}' to '{}'", field, query, stop);
        Ok(stop)
    }

    /// Refines both stops; `to` is resolved first.
    pub async fn refine_route(&self, route: RouteAlias) -> Result<RouteAlias> {
        let to = self.resolve_stop("to", &route.to).await?;
        let from = self.resolve_stop("from", &route.from).await?;
        Ok(RouteAlias { from, to })
    }

    pub async fn departures(&self, query: &DepartureQuery) -> Result<Vec<DepartureRecord>> {
        let body = self.source.fetch(query).await?;
        tracing::debug!("Received {} bytes of trip planner markup", body.len());
        self.parser.parse(&body)
    }

    pub async fn run(&self, request: &TripRequest) -> Result<TripResult> {
        let initial = request.initial_route()?;

        let route = if initial.refine {
            tracing::info!("Resolving stop names");
            self.refine_route(initial.route).await?
        } else {
            initial.route
        };

        tracing::info!("Searching departures from {} to {}", route.from, route.to);
        let query = DepartureQuery {
            from: route.from.clone(),
            to: route.to.clone(),
            date: request.date.clone(),
            time: request.time.clone(),
        };
        let departures = self.departures(&query).await?;
        tracing::info!("Found {} departures", departures.len());

        Ok(TripResult { route, departures })
    }
}
