//! Parser for the AtB travel planner result page.
//!
//! Each `div.tm-result-wrapper` block is one departure option. Inside it the
//! start time, the travel duration and the detail segments (`span.tm-det`) are
//! read verbatim; no whitespace or time-format normalization takes place.

use crate::domain::model::{DepartureRecord, Leg};
use crate::utils::error::{AtbError, Result};
use scraper::{ElementRef, Html, Selector};

const RESULT_WRAPPER: &str = "div.tm-result-wrapper";
const START_TIME: &str = "span.tm-result-fratil";
const DURATION_LABEL: &str = "span.tm-result-value-time";
const DURATION_VALUE: &str = "span.tm-result-info-val";
const DETAIL_SEGMENT: &str = "span.tm-det";
const LINE_NUMBER: &str = "span.tm-det-linenr";

pub struct DepartureParser {
    wrapper: Selector,
    start_time: Selector,
    duration_label: Selector,
    duration_value: Selector,
    segment: Selector,
    line_number: Selector,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| AtbError::ParseError {
        message: format!("invalid selector {}: {}", css, e),
    })
}

impl DepartureParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            wrapper: selector(RESULT_WRAPPER)?,
            start_time: selector(START_TIME)?,
            duration_label: selector(DURATION_LABEL)?,
            duration_value: selector(DURATION_VALUE)?,
            segment: selector(DETAIL_SEGMENT)?,
            line_number: selector(LINE_NUMBER)?,
        })
    }

    /// Parses every result wrapper into a record, in document order.
    ///
    /// A wrapper without a start time, a duration or any detail segment is an
    /// error rather than a skipped record: it means the page layout changed or
    /// the query itself was invalid.
    pub fn parse(&self, body: &str) -> Result<Vec<DepartureRecord>> {
        let document = Html::parse_document(body);

        document
            .select(&self.wrapper)
            .enumerate()
            .map(|(index, wrapper)| self.parse_wrapper(index, wrapper))
            .collect()
    }

    fn parse_wrapper(&self, index: usize, wrapper: ElementRef<'_>) -> Result<DepartureRecord> {
        let start_time = wrapper
            .select(&self.start_time)
            .next()
            .map(text_of)
            .ok_or_else(|| missing(index, "start time"))?;

        let duration = self
            .duration(wrapper)
            .ok_or_else(|| missing(index, "duration"))?;

        let legs: Vec<Leg> = wrapper
            .select(&self.segment)
            .map(|segment| self.classify(segment))
            .collect();

        if legs.is_empty() {
            return Err(missing(index, "route details"));
        }

        tracing::debug!(
            "Parsed departure {} at {} ({} legs)",
            index,
            start_time,
            legs.len()
        );

        Ok(DepartureRecord {
            start_time,
            duration,
            legs,
        })
    }

    /// The first duration value that follows the first duration label.
    fn duration(&self, wrapper: ElementRef<'_>) -> Option<String> {
        let mut elements = wrapper.descendants().filter_map(ElementRef::wrap);

        elements.find(|el| self.duration_label.matches(el))?;
        elements
            .find(|el| self.duration_value.matches(el))
            .map(text_of)
    }

    /// A segment without a line number is taken to be a walk. The markup has
    /// no positive marker for walking, so nothing stronger is inferred.
    fn classify(&self, segment: ElementRef<'_>) -> Leg {
        match segment.select(&self.line_number).next() {
            Some(line) => Leg::Line(text_of(line)),
            None => Leg::Walk,
        }
    }
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn missing(index: usize, what: &str) -> AtbError {
    AtbError::ParseError {
        message: format!("result {} has no {}", index, what),
    }
}

/// Convenience wrapper for one-off parsing.
pub fn parse_departures(body: &str) -> Result<Vec<DepartureRecord>> {
    DepartureParser::new()?.parse(body)
}
