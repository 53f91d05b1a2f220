use crate::config::request::TripRequest;
use crate::config::{expand_home, DEFAULT_ROUTES_FILE, DEFAULT_SETTINGS_FILE};
use crate::core::table::DisplayMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "atb")]
#[command(about = "AtB route planner CLI to get the next departures")]
#[command(
    after_help = "If <SAVED_ROUTE> is given together with --from and/or --to, \
                  those flags override the matching field of the saved route."
)]
pub struct CliConfig {
    /// Either `<FROM_STOP> <TO_STOP>` or a single `<SAVED_ROUTE>`
    #[arg(value_name = "STOPS_OR_ROUTE", num_args = 0..=2)]
    pub positional: Vec<String>,

    /// Force aligned, colored output
    #[arg(long, conflicts_with = "terse")]
    pub pretty: bool,

    /// Force plain, space separated output
    #[arg(long)]
    pub terse: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Disable stop name suggestions
    #[arg(long)]
    pub no_suggestions: bool,

    #[arg(long, default_value = DEFAULT_ROUTES_FILE)]
    pub routes_file: String,

    /// Optional settings file
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    pub config: String,

    /// Specify or override the 'from' stop
    #[arg(long = "from", value_name = "FROM_STOP")]
    pub from_stop: Option<String>,

    /// Specify or override the 'to' stop
    #[arg(long = "to", value_name = "TO_STOP")]
    pub to_stop: Option<String>,

    /// Travel date as D.M.YYYY (default: today)
    #[arg(long)]
    pub date: Option<String>,

    /// Departure time as H:MM (default: now)
    #[arg(long)]
    pub time: Option<String>,
}

impl CliConfig {
    /// Explicit `--pretty`/`--terse` choice, if any.
    pub fn display_mode(&self) -> Option<DisplayMode> {
        if self.pretty {
            Some(DisplayMode::Pretty)
        } else if self.terse {
            Some(DisplayMode::Plain)
        } else {
            None
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        expand_home(&self.config)
    }

    pub fn to_request(&self) -> TripRequest {
        let mut request = TripRequest::new(expand_home(&self.routes_file));

        match self.positional.as_slice() {
            [route] => request.saved_route = Some(route.clone()),
            [from, to] => {
                request.from = Some(from.clone());
                request.to = Some(to.clone());
            }
            _ => {}
        }

        if let Some(from) = &self.from_stop {
            request.from = Some(from.clone());
        }
        if let Some(to) = &self.to_stop {
            request.to = Some(to.clone());
        }

        request.use_suggestions = !self.no_suggestions;
        request.date = self.date.clone();
        request.time = self.time.clone();
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_route_with_override() {
        let cli = CliConfig::try_parse_from(["atb", "work", "--to", "Lerkendal"]).unwrap();
        let request = cli.to_request();

        assert_eq!(request.saved_route.as_deref(), Some("work"));
        assert_eq!(request.from, None);
        assert_eq!(request.to.as_deref(), Some("Lerkendal"));
        assert!(request.use_suggestions);
    }

    #[test]
    fn test_two_positionals_are_stops() {
        let cli =
            CliConfig::try_parse_from(["atb", "munkegata", "solsiden", "--no-suggestions"]).unwrap();
        let request = cli.to_request();

        assert_eq!(request.saved_route, None);
        assert_eq!(request.from.as_deref(), Some("munkegata"));
        assert_eq!(request.to.as_deref(), Some("solsiden"));
        assert!(!request.use_suggestions);
    }

    #[test]
    fn test_from_flag_wins_over_positional() {
        let cli = CliConfig::try_parse_from(["atb", "a", "b", "--from", "c"]).unwrap();
        assert_eq!(cli.to_request().from.as_deref(), Some("c"));
    }

    #[test]
    fn test_display_mode_flags() {
        let pretty = CliConfig::try_parse_from(["atb", "--pretty"]).unwrap();
        let terse = CliConfig::try_parse_from(["atb", "--terse"]).unwrap();
        let neither = CliConfig::try_parse_from(["atb"]).unwrap();

        assert_eq!(pretty.display_mode(), Some(DisplayMode::Pretty));
        assert_eq!(terse.display_mode(), Some(DisplayMode::Plain));
        assert_eq!(neither.display_mode(), None);
        assert!(CliConfig::try_parse_from(["atb", "--pretty", "--terse"]).is_err());
    }

    #[test]
    fn test_explicit_paths_are_kept() {
        let cli = CliConfig::try_parse_from([
            "atb",
            "work",
            "--routes-file",
            "/etc/atb/routes.json",
            "--config",
            "/etc/atb/config.toml",
        ])
        .unwrap();

        assert_eq!(
            cli.to_request().routes_file,
            PathBuf::from("/etc/atb/routes.json")
        );
        assert_eq!(cli.settings_path(), PathBuf::from("/etc/atb/config.toml"));
    }
}
