use clap::Parser;
use inquire::{InquireError, Text};
use skycast_core::{Config, LookupHandler, Session, WeatherController};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "skycast",
    version,
    about = "Current conditions and 3-day forecasts in your terminal"
)]
pub struct Cli {
    /// Location to look up on startup instead of the configured default.
    pub location: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let mut session = Session::new(config.default_location.clone());
        let controller = WeatherController::new(config);

        let report = match self.location.as_deref() {
            Some(query) => controller.check_location(&mut session, query).await,
            None => controller.show_default(&mut session).await,
        };
        print_report(&session, &report);

        loop {
            let entry = match Text::new("Check weather for location (empty to quit):").prompt() {
                Ok(entry) => entry,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(err) => return Err(err.into()),
            };

            let query = entry.trim();
            if query.is_empty() {
                break;
            }

            let report = controller.check_location(&mut session, query).await;
            print_report(&session, &report);
        }

        Ok(())
    }
}

/// The location line is printed from the session, so a failed lookup still
/// shows the location it was for.
fn print_report(session: &Session, report: &str) {
    println!("Current Location: {}", session.location);
    println!();
    println!("{report}");
}
