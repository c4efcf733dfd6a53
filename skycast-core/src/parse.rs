//! Conversion of WeatherAPI.com JSON payloads into domain types.
//!
//! Parsing is all-or-nothing per document: any required field that is
//! missing or mistyped fails the whole parse. The only tolerated absences
//! are the day max/min temperatures and the `forecast.forecastday` block
//! itself, which map to [`DaySummary`] options and the non-`Days` variants
//! of [`Forecast`].

use serde::Deserialize;

use crate::error::ParseError;
use crate::model::{AstroInfo, CurrentConditions, DaySummary, Forecast, ForecastDay, HourlyEntry};

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    temp_f: f64,
    wind_kph: f64,
    wind_mph: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaCurrentDocument {
    current: WaCurrent,
}

#[derive(Debug, Deserialize)]
struct WaDay {
    maxtemp_c: Option<f64>,
    mintemp_c: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WaAstro {
    sunrise: String,
    sunset: String,
}

#[derive(Debug, Deserialize)]
struct WaHour {
    time: String,
    temp_c: f64,
    wind_kph: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    date: String,
    day: WaDay,
    astro: WaAstro,
    hour: Vec<WaHour>,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Option<Vec<WaForecastDay>>,
}

#[derive(Debug, Deserialize)]
struct WaForecastDocument {
    forecast: Option<WaForecast>,
}

/// Parse a `current.json` payload into current conditions.
pub fn parse_current(json: &str) -> Result<CurrentConditions, ParseError> {
    let doc: WaCurrentDocument = serde_json::from_str(json)?;
    let current = doc.current;

    Ok(CurrentConditions {
        condition: current.condition.text,
        temp_c: current.temp_c,
        temp_f: current.temp_f,
        wind_kph: current.wind_kph,
        wind_mph: current.wind_mph,
    })
}

/// Parse a `forecast.json` payload into a [`Forecast`].
pub fn parse_forecast(json: &str) -> Result<Forecast, ParseError> {
    let doc: WaForecastDocument = serde_json::from_str(json)?;

    let days = match doc.forecast.and_then(|f| f.forecastday) {
        Some(days) => days,
        None => return Ok(Forecast::Unavailable),
    };

    if days.is_empty() {
        return Ok(Forecast::Empty);
    }

    Ok(Forecast::Days(days.into_iter().map(into_forecast_day).collect()))
}

fn into_forecast_day(day: WaForecastDay) -> ForecastDay {
    ForecastDay {
        date: day.date,
        day: DaySummary { maxtemp_c: day.day.maxtemp_c, mintemp_c: day.day.mintemp_c },
        astro: AstroInfo { sunrise: day.astro.sunrise, sunset: day.astro.sunset },
        hours: day
            .hour
            .into_iter()
            .map(|hour| HourlyEntry {
                time: hour.time,
                temp_c: hour.temp_c,
                condition: hour.condition.text,
                wind_kph: hour.wind_kph,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT_SAMPLE: &str = r#"{
        "location": {"name": "Sydney", "country": "Australia"},
        "current": {
            "temp_c": 30.0,
            "temp_f": 86.0,
            "wind_kph": 10.0,
            "wind_mph": 6.2,
            "condition": {"text": "Sunny"}
        }
    }"#;

    #[test]
    fn current_sample_parses() {
        let current = parse_current(CURRENT_SAMPLE).expect("sample should parse");

        assert_eq!(current.condition, "Sunny");
        assert_eq!(current.temp_c, 30.0);
        assert_eq!(current.temp_f, 86.0);
        assert_eq!(current.wind_kph, 10.0);
        assert_eq!(current.wind_mph, 6.2);
    }

    #[test]
    fn current_without_current_key_fails() {
        let err = parse_current(r#"{"location": {"name": "Sydney"}}"#).unwrap_err();
        assert!(err.to_string().contains("current"));
    }

    #[test]
    fn current_with_mistyped_field_fails() {
        let json = r#"{"current": {"temp_c": "hot", "temp_f": 86.0, "wind_kph": 10.0,
            "wind_mph": 6.2, "condition": {"text": "Sunny"}}}"#;
        assert!(parse_current(json).is_err());
    }

    #[test]
    fn forecast_without_forecast_key_is_unavailable() {
        let forecast = parse_forecast(r#"{"location": {"name": "Sydney"}}"#).unwrap();
        assert_eq!(forecast, Forecast::Unavailable);
    }

    #[test]
    fn forecast_without_forecastday_is_unavailable() {
        let forecast = parse_forecast(r#"{"forecast": {}}"#).unwrap();
        assert_eq!(forecast, Forecast::Unavailable);
    }

    #[test]
    fn empty_forecastday_is_empty() {
        let forecast = parse_forecast(r#"{"forecast": {"forecastday": []}}"#).unwrap();
        assert_eq!(forecast, Forecast::Empty);
    }

    #[test]
    fn days_keep_response_order() {
        let json = r#"{"forecast": {"forecastday": [
            {"date": "2026-08-06",
             "day": {"maxtemp_c": 25.0, "mintemp_c": 17.0},
             "astro": {"sunrise": "06:01 AM", "sunset": "08:32 PM"},
             "hour": []},
            {"date": "2026-08-07",
             "day": {"maxtemp_c": 22.5, "mintemp_c": 15.0},
             "astro": {"sunrise": "06:02 AM", "sunset": "08:31 PM"},
             "hour": []}
        ]}}"#;

        let forecast = parse_forecast(json).unwrap();
        let Forecast::Days(days) = forecast else {
            panic!("expected days");
        };
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2026-08-06");
        assert_eq!(days[1].date, "2026-08-07");
    }

    #[test]
    fn missing_min_temperature_is_tolerated() {
        let json = r#"{"forecast": {"forecastday": [
            {"date": "2026-08-06",
             "day": {"maxtemp_c": 25.0},
             "astro": {"sunrise": "06:01 AM", "sunset": "08:32 PM"},
             "hour": []}
        ]}}"#;

        let Forecast::Days(days) = parse_forecast(json).unwrap() else {
            panic!("expected days");
        };
        assert_eq!(days[0].day.maxtemp_c, Some(25.0));
        assert_eq!(days[0].day.mintemp_c, None);
    }

    #[test]
    fn missing_sunrise_fails_the_whole_parse() {
        let json = r#"{"forecast": {"forecastday": [
            {"date": "2026-08-06",
             "day": {"maxtemp_c": 25.0, "mintemp_c": 17.0},
             "astro": {"sunset": "08:32 PM"},
             "hour": []}
        ]}}"#;

        assert!(parse_forecast(json).is_err());
    }

    #[test]
    fn missing_hour_field_fails_the_whole_parse() {
        let json = r#"{"forecast": {"forecastday": [
            {"date": "2026-08-06",
             "day": {"maxtemp_c": 25.0, "mintemp_c": 17.0},
             "astro": {"sunrise": "06:01 AM", "sunset": "08:32 PM"},
             "hour": [{"time": "2026-08-06 00:00", "wind_kph": 14.0,
                       "condition": {"text": "Clear"}}]}
        ]}}"#;

        assert!(parse_forecast(json).is_err());
    }

    #[test]
    fn malformed_json_fails() {
        assert!(parse_current("{ not json").is_err());
        assert!(parse_forecast("{ not json").is_err());
    }
}
