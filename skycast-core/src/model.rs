/// Point-in-time weather snapshot for a location.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub condition: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub wind_kph: f64,
    pub wind_mph: f64,
}

/// Forecast portion of a lookup, as far as the response provided one.
#[derive(Debug, Clone, PartialEq)]
pub enum Forecast {
    /// The response carried no `forecast.forecastday` data at all.
    Unavailable,
    /// The forecast day list was present but empty.
    Empty,
    /// One entry per day, in the order the API returned them.
    Days(Vec<ForecastDay>),
}

/// One calendar day of the forecast: aggregate summary, sunrise/sunset,
/// and the hourly breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: String,
    pub day: DaySummary,
    pub astro: AstroInfo,
    pub hours: Vec<HourlyEntry>,
}

/// Aggregated temperatures for one day. Either field may be absent
/// upstream; everything else in a day is required.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub maxtemp_c: Option<f64>,
    pub mintemp_c: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstroInfo {
    pub sunrise: String,
    pub sunset: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyEntry {
    pub time: String,
    pub temp_c: f64,
    pub condition: String,
    pub wind_kph: f64,
}
