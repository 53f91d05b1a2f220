use atb_departures::core::table::RenderOutcome;
use atb_departures::utils::{logger, validation::Validate};
use atb_departures::{
    AtbClient, AtbError, CliConfig, DisplayConfig, Presenter, Settings, TerminalPicker,
    TripPlanner,
};
use clap::Parser;
use std::io::IsTerminal;

async fn run(
    config: &CliConfig,
    display_config: DisplayConfig,
    settings: &Settings,
) -> Result<(), AtbError> {
    let request = config.to_request();
    request.validate()?;

    let client = AtbClient::new(settings)?;
    let planner = TripPlanner::new(client.clone(), client, TerminalPicker)?;
    let result = planner.run(&request).await?;

    let presenter = Presenter::new(display_config);
    let mut stdout = std::io::stdout().lock();
    match presenter.departures(&mut stdout, &result.route, &result.departures)? {
        RenderOutcome::Rendered => {}
        RenderOutcome::Nothing => {
            eprintln!(
                "No departures found from {} to {}",
                result.route.from, result.route.to
            );
        }
    }

    Ok(())
}

fn fail(e: &AtbError) -> ! {
    tracing::error!(
        "❌ atb failed: {} (Category: {:?}, exit code {})",
        e,
        e.category(),
        e.exit_code()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match Settings::load(config.settings_path()).and_then(|s| {
        s.validate()?;
        Ok(s)
    }) {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };

    let interactive = std::io::stdout().is_terminal();
    let display_config =
        DisplayConfig::resolve(config.display_mode(), interactive, settings.spacing());
    tracing::debug!(
        "Output mode {:?} (stdout interactive: {}, spacing {})",
        display_config.mode,
        display_config.interactive,
        display_config.spacing
    );

    if let Err(e) = run(&config, display_config, &settings).await {
        fail(&e);
    }
}
