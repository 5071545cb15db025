//! Response types for the weatherapi.com `forecast.json` endpoint, and their
//! conversion into [`WeatherObservation`]s.

use crate::types::weather_observation::WeatherObservation;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const UNKNOWN: &str = "Unknown";

/// Full forecast response: where, what it's like now, and the coming days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub location: Location,
    pub current: CurrentWeather,
    #[serde(default)]
    pub forecast: Forecast,
}

impl ForecastResponse {
    /// The forecast days, oldest first.
    pub fn days(&self) -> &[ForecastDay] {
        &self.forecast.forecastday
    }
}

/// The resolved location of a forecast query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub tz_id: Option<String>,
}

impl Location {
    pub fn city(&self) -> &str {
        or_unknown(&self.name)
    }

    pub fn region(&self) -> &str {
        or_unknown(&self.region)
    }

    pub fn country(&self) -> &str {
        or_unknown(&self.country)
    }
}

fn or_unknown(value: &str) -> &str {
    if value.trim().is_empty() {
        UNKNOWN
    } else {
        value
    }
}

/// Condition label as reported by the provider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub code: Option<u32>,
}

/// Current conditions at the queried location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temp_c: Option<f64>,
    pub temp_f: Option<f64>,
    #[serde(default)]
    pub condition: Condition,
    pub humidity: Option<f64>,
    pub wind_kph: Option<f64>,
    #[serde(default)]
    pub feelslike_c: Option<f64>,
    #[serde(default)]
    pub feelslike_f: Option<f64>,
}

impl CurrentWeather {
    pub fn observation(&self) -> WeatherObservation {
        WeatherObservation {
            temp_f: self.temp_f,
            temp_c: self.temp_c,
            condition: self.condition.text.clone(),
            humidity: self.humidity,
            wind_kph: self.wind_kph,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
}

/// One day of the multi-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub day: DaySummary,
}

impl ForecastDay {
    /// An observation built from the day's average temperature and condition,
    /// suitable for planning an outfit ahead of time.
    pub fn observation(&self) -> WeatherObservation {
        WeatherObservation {
            temp_f: self.day.avgtemp_f,
            temp_c: self.day.avgtemp_c,
            condition: self.day.condition.text.clone(),
            humidity: self.day.avghumidity,
            wind_kph: self.day.maxwind_kph,
        }
    }
}

/// Aggregated values for a forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub maxtemp_c: Option<f64>,
    pub maxtemp_f: Option<f64>,
    pub mintemp_c: Option<f64>,
    pub mintemp_f: Option<f64>,
    pub avgtemp_c: Option<f64>,
    pub avgtemp_f: Option<f64>,
    #[serde(default)]
    pub maxwind_kph: Option<f64>,
    #[serde(default)]
    pub avghumidity: Option<f64>,
    #[serde(default)]
    pub daily_chance_of_rain: Option<f64>,
    #[serde(default)]
    pub condition: Condition,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const FORECAST_JSON: &str = r#"{
        "location": {
            "name": "Amsterdam",
            "region": "North Holland",
            "country": "Netherlands",
            "lat": 52.37,
            "lon": 4.89,
            "tz_id": "Europe/Amsterdam",
            "localtime": "2025-10-18 09:00"
        },
        "current": {
            "temp_c": 11.0,
            "temp_f": 51.8,
            "is_day": 1,
            "condition": { "text": "Light rain", "icon": "//cdn.weatherapi.com/weather/64x64/day/296.png", "code": 1183 },
            "wind_kph": 18.4,
            "humidity": 87,
            "feelslike_c": 8.9,
            "feelslike_f": 48.0
        },
        "forecast": {
            "forecastday": [
                {
                    "date": "2025-10-18",
                    "date_epoch": 1760745600,
                    "day": {
                        "maxtemp_c": 13.1, "maxtemp_f": 55.6,
                        "mintemp_c": 8.2, "mintemp_f": 46.8,
                        "avgtemp_c": 10.4, "avgtemp_f": 50.7,
                        "maxwind_kph": 22.3, "avghumidity": 84,
                        "daily_chance_of_rain": 89,
                        "condition": { "text": "Moderate rain", "code": 1189 }
                    },
                    "astro": { "sunrise": "08:10 AM" },
                    "hour": []
                },
                {
                    "date": "2025-10-19",
                    "day": {
                        "maxtemp_c": 17.0, "maxtemp_f": 62.6,
                        "mintemp_c": 9.0, "mintemp_f": 48.2,
                        "avgtemp_c": 16.0, "avgtemp_f": 60.8,
                        "condition": { "text": "Partly Cloudy " }
                    }
                }
            ]
        }
    }"#;

    #[test]
    fn test_parse_forecast_response() -> Result<(), serde_json::Error> {
        let response: ForecastResponse = serde_json::from_str(FORECAST_JSON)?;

        assert_eq!(response.location.city(), "Amsterdam");
        assert_eq!(response.days().len(), 2);
        assert_eq!(
            response.days()[0].date,
            NaiveDate::from_ymd_opt(2025, 10, 18).unwrap()
        );
        assert_eq!(response.current.condition.code, Some(1183));
        Ok(())
    }

    #[test]
    fn test_current_observation() -> Result<(), serde_json::Error> {
        let response: ForecastResponse = serde_json::from_str(FORECAST_JSON)?;
        let obs = response.current.observation();

        assert_eq!(obs.temp_f, Some(51.8));
        assert_eq!(obs.condition, "Light rain");
        assert_eq!(obs.humidity, Some(87.0));
        assert_eq!(obs.wind_kph, Some(18.4));
        Ok(())
    }

    #[test]
    fn test_forecast_day_observation_uses_averages() -> Result<(), serde_json::Error> {
        let response: ForecastResponse = serde_json::from_str(FORECAST_JSON)?;
        let obs = response.days()[1].observation();

        assert_eq!(obs.temp_f, Some(60.8));
        assert_eq!(obs.temp_c, Some(16.0));
        assert_eq!(obs.condition, "Partly Cloudy ");
        assert_eq!(obs.wind_kph, None);
        Ok(())
    }

    #[test]
    fn test_location_defaults_to_unknown() -> Result<(), serde_json::Error> {
        let json = r#"{
            "location": { "name": "" },
            "current": { "temp_c": 20.0, "temp_f": 68.0, "condition": { "text": "Sunny" }, "humidity": 40, "wind_kph": 5.0 }
        }"#;
        let response: ForecastResponse = serde_json::from_str(json)?;

        assert_eq!(response.location.city(), "Unknown");
        assert_eq!(response.location.region(), "Unknown");
        assert_eq!(response.location.country(), "Unknown");
        assert!(response.days().is_empty());
        Ok(())
    }
}
