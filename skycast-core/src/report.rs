//! Rendering of parsed weather data into the displayed text blocks.
//!
//! The two `*_text` operations are total over arbitrary JSON input: a
//! payload that cannot be parsed is rendered as an inline error line, never
//! surfaced as an error to the caller. The forecast error line replaces the
//! whole forecast section, including any days that would have rendered.

use crate::model::{AstroInfo, CurrentConditions, DaySummary, Forecast, ForecastDay, HourlyEntry};
use crate::parse;

const DAY_SEPARATOR: &str = "----------------------------";

/// Render a `current.json` payload, or an inline error line.
pub fn current_weather_text(json: &str) -> String {
    match parse::parse_current(json) {
        Ok(current) => render_current(&current),
        Err(err) => {
            log::error!("Error occurred during parsing current weather data: {err}");
            format!("Error occurred during parsing current weather data. Exception: {err}\n")
        }
    }
}

/// Render a `forecast.json` payload, or an inline error line.
pub fn forecast_text(json: &str) -> String {
    match parse::parse_forecast(json) {
        Ok(forecast) => render_forecast(&forecast),
        Err(err) => {
            log::error!("Error occurred during parsing forecast data: {err}");
            format!("Error occurred during parsing forecast data. Exception: {err}\n")
        }
    }
}

/// Current conditions as fixed-order lines with a trailing blank line.
pub fn render_current(current: &CurrentConditions) -> String {
    format!(
        "Current Weather: {}\nTemperature: {}°C / {}°F\nWind Speed: {} kph / {} mph\n\n",
        current.condition,
        decimal(current.temp_c),
        decimal(current.temp_f),
        decimal(current.wind_kph),
        decimal(current.wind_mph),
    )
}

/// Per-day forecast blocks in response order, each closed by a separator
/// line, or one of the two fixed availability messages.
pub fn render_forecast(forecast: &Forecast) -> String {
    match forecast {
        Forecast::Unavailable => "No forecastday information available in the response.\n".to_string(),
        Forecast::Empty => "No forecast information available.\n".to_string(),
        Forecast::Days(days) => {
            let mut out = String::new();
            for day in days {
                out.push_str(&render_day(day));
            }
            out
        }
    }
}

/// Final report handed to the display surface.
pub fn compose_report(location: &str, current: &str, forecast: &str) -> String {
    format!(
        "Current Location: {location}\nWeather Information:\n{current}\nForecast Information:\n{forecast}"
    )
}

fn render_day(day: &ForecastDay) -> String {
    format!(
        "Date: {}\nDay Information:\n{}\nAstronomy Information:\n{}\nHourly Information:\n{}\n{DAY_SEPARATOR}\n",
        day.date,
        day_info(&day.day),
        astro_info(&day.astro),
        hourly_info(&day.hours),
    )
}

fn day_info(day: &DaySummary) -> String {
    match (day.maxtemp_c, day.mintemp_c) {
        (Some(max), Some(min)) => format!(
            "Max Temperature: {}°C\nMin Temperature: {}°C\n",
            decimal(max),
            decimal(min),
        ),
        _ => "Max/Min Temperature information not available.\n".to_string(),
    }
}

fn astro_info(astro: &AstroInfo) -> String {
    format!("Sunrise: {}\nSunset: {}\n", astro.sunrise, astro.sunset)
}

fn hourly_info(hours: &[HourlyEntry]) -> String {
    let mut out = String::new();
    for hour in hours {
        out.push_str(&format!(
            "Time: {:<25}Temperature: {:<30}Condition: {:<40}Wind Speed: {:<35}\n",
            hour.time,
            format!("{}°C", decimal(hour.temp_c)),
            hour.condition,
            format!("{} kph", decimal(hour.wind_kph)),
        ));
    }
    out
}

/// Shortest decimal form that keeps a trailing `.0` on whole values, which
/// `Display` would drop ("30" instead of "30.0").
fn decimal(value: f64) -> String {
    format!("{value:?}")
}
