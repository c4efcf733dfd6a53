use async_trait::async_trait;

use crate::config::Config;
use crate::fetch::WeatherFetcher;
use crate::report;

/// Shown in place of the report when either fetch fails.
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to retrieve weather data. Please try again.";

/// How many forecast days to request from the API.
const FORECAST_DAYS: u8 = 3;

/// Per-frontend lookup context. The location is the one most recently
/// requested, whether or not its fetch succeeded.
#[derive(Debug, Clone)]
pub struct Session {
    pub location: String,
}

impl Session {
    pub fn new(location: impl Into<String>) -> Self {
        Self { location: location.into() }
    }
}

/// Lookup operations a display surface triggers.
#[async_trait]
pub trait LookupHandler {
    /// Fetch and render weather for the session's current location.
    async fn show_default(&self, session: &mut Session) -> String;

    /// Record `query` as the session location, then fetch and render
    /// weather for it.
    async fn check_location(&self, session: &mut Session, query: &str) -> String;
}

/// Builds the query URLs, runs both fetches, and turns the outcome into
/// one block of display text.
#[derive(Debug, Clone)]
pub struct WeatherController {
    config: Config,
    fetcher: WeatherFetcher,
}

impl WeatherController {
    pub fn new(config: Config) -> Self {
        Self { config, fetcher: WeatherFetcher::new() }
    }

    fn current_url(&self, location: &str) -> String {
        format!(
            "{}/current.json?key={}&q={}",
            self.config.base_url,
            self.config.api_key,
            urlencoding::encode(location),
        )
    }

    fn forecast_url(&self, location: &str) -> String {
        format!(
            "{}/forecast.json?key={}&q={}&days={FORECAST_DAYS}",
            self.config.base_url,
            self.config.api_key,
            urlencoding::encode(location),
        )
    }

    async fn lookup(&self, location: &str) -> String {
        let current_url = self.current_url(location);
        let forecast_url = self.forecast_url(location);

        // The two requests are independent; issue them together.
        let (current, forecast) = tokio::join!(
            self.fetcher.fetch_body(&current_url),
            self.fetcher.fetch_body(&forecast_url),
        );

        match (current, forecast) {
            (Ok(current_json), Ok(forecast_json)) => report::compose_report(
                location,
                &report::current_weather_text(&current_json),
                &report::forecast_text(&forecast_json),
            ),
            (Err(err), _) | (_, Err(err)) => {
                log::error!("Weather lookup for '{location}' failed: {err}");
                FETCH_FAILURE_MESSAGE.to_string()
            }
        }
    }
}

#[async_trait]
impl LookupHandler for WeatherController {
    async fn show_default(&self, session: &mut Session) -> String {
        self.lookup(&session.location).await
    }

    async fn check_location(&self, session: &mut Session, query: &str) -> String {
        // The session must reflect the query even if the fetch fails.
        session.location = query.to_string();
        self.lookup(query).await
    }
}
