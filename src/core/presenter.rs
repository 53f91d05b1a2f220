use crate::config::DisplayConfig;
use crate::core::table::{DisplayMode, RenderOutcome, Table};
use crate::domain::model::{DepartureRecord, RouteAlias};
use console::Style;
use std::io::{self, Write};

pub const ROUTE_SEPARATOR: &str = " -> ";
const HEADER: [&str; 3] = ["Departure", "Duration", "Route"];

pub fn departure_table(departures: &[DepartureRecord], spacing: usize) -> Table {
    Table::new(departures.iter().map(|d| {
        [
            d.start_time.clone(),
            d.duration.clone(),
            d.route_description(ROUTE_SEPARATOR),
        ]
    }))
    .with_header(HEADER)
    .with_spacing(spacing)
}

pub struct Presenter {
    display: DisplayConfig,
}

impl Presenter {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }

    /// A `:: `-prefixed line, bold in pretty mode.
    pub fn banner<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        match self.display.mode {
            DisplayMode::Pretty => {
                let bold = Style::new().bold().force_styling(true);
                writeln!(out, "{}", bold.apply_to(format!(":: {}", text)))
            }
            DisplayMode::Plain => writeln!(out, ":: {}", text),
        }
    }

    pub fn departures<W: Write>(
        &self,
        out: &mut W,
        route: &RouteAlias,
        departures: &[DepartureRecord],
    ) -> io::Result<RenderOutcome> {
        if departures.is_empty() {
            return Ok(RenderOutcome::Nothing);
        }

        self.banner(out, "AtB")?;
        self.banner(out, &format!("From {} to {}", route.from, route.to))?;
        departure_table(departures, self.display.spacing).render(self.display.mode, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Leg;

    fn records() -> Vec<DepartureRecord> {
        vec![
            DepartureRecord {
                start_time: "13:51".to_string(),
                duration: "0:10".to_string(),
                legs: vec![Leg::Line("38".to_string())],
            },
            DepartureRecord {
                start_time: "13:55".to_string(),
                duration: "0:20".to_string(),
                legs: vec![Leg::Walk, Leg::Line("66".to_string())],
            },
        ]
    }

    fn route() -> RouteAlias {
        RouteAlias::new("Munkegata M4 (Trondheim)", "Solsiden (Trondheim)")
    }

    #[test]
    fn test_plain_output() {
        let presenter = Presenter::new(DisplayConfig::resolve(None, false, 3));
        let mut out = Vec::new();

        let outcome = presenter.departures(&mut out, &route(), &records()).unwrap();

        assert_eq!(outcome, RenderOutcome::Rendered);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            ":: AtB\n\
             :: From Munkegata M4 (Trondheim) to Solsiden (Trondheim)\n\
             13:51 0:10 38\n\
             13:55 0:20 walking -> 66\n"
        );
    }

    #[test]
    fn test_pretty_output_is_aligned() {
        let presenter = Presenter::new(DisplayConfig::resolve(None, true, 3));
        let mut out = Vec::new();

        presenter.departures(&mut out, &route(), &records()).unwrap();

        let text = console::strip_ansi_codes(&String::from_utf8(out).unwrap()).into_owned();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "Departure   Duration   Route        ");
        assert_eq!(lines[3], "13:51       0:10       38           ");
        assert_eq!(lines[4], "13:55       0:20       walking -> 66");
    }

    #[test]
    fn test_no_departures_prints_nothing() {
        let presenter = Presenter::new(DisplayConfig::resolve(Some(DisplayMode::Pretty), true, 3));
        let mut out = Vec::new();

        let outcome = presenter.departures(&mut out, &route(), &[]).unwrap();

        assert_eq!(outcome, RenderOutcome::Nothing);
        assert!(out.is_empty());
    }
}
