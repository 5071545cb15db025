//! The weather input consumed by the outfit selector.

use bon::Builder;
use serde::{Deserialize, Serialize};

/// A snapshot of weather conditions used to style an outfit.
///
/// Temperature may be given in Fahrenheit, Celsius or both. The selector
/// works in Fahrenheit and converts a Celsius-only observation. Both fields
/// are optional at the type level so incomplete provider data can be
/// represented and rejected instead of silently defaulted.
///
/// # Examples
///
/// ```
/// use weather_wardrobe::WeatherObservation;
///
/// let rainy = WeatherObservation::builder()
///     .temp_f(55.0)
///     .condition("Light rain")
///     .humidity(87.0)
///     .build();
/// assert_eq!(rainy.fahrenheit(), Some(55.0));
///
/// let metric = WeatherObservation::builder().temp_c(20.0).condition("Sunny").build();
/// assert_eq!(metric.fahrenheit(), Some(68.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct WeatherObservation {
    #[serde(default)]
    pub temp_f: Option<f64>,
    #[serde(default)]
    pub temp_c: Option<f64>,
    /// Free-text condition label such as `"Partly cloudy"` or `"Light rain"`.
    #[builder(into)]
    pub condition: String,
    /// Relative humidity in percent.
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_kph: Option<f64>,
}

impl WeatherObservation {
    /// The temperature in Fahrenheit, preferring the reported value over a conversion.
    /// Returns `None` when no finite temperature is available.
    pub fn fahrenheit(&self) -> Option<f64> {
        self.temp_f
            .filter(|t| t.is_finite())
            .or_else(|| {
                self.temp_c
                    .filter(|t| t.is_finite())
                    .map(celsius_to_fahrenheit)
            })
    }
}

pub(crate) fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fahrenheit_prefers_reported_value() {
        let obs = WeatherObservation::builder()
            .temp_f(61.0)
            .temp_c(15.0)
            .condition("Clear")
            .build();
        assert_eq!(obs.fahrenheit(), Some(61.0));
    }

    #[test]
    fn test_fahrenheit_from_celsius() {
        let obs = WeatherObservation::builder()
            .temp_c(-40.0)
            .condition("Clear")
            .build();
        assert_eq!(obs.fahrenheit(), Some(-40.0));
    }

    #[test]
    fn test_fahrenheit_missing_or_nan() {
        let missing = WeatherObservation::builder().condition("Clear").build();
        assert_eq!(missing.fahrenheit(), None);

        let nan = WeatherObservation::builder()
            .temp_f(f64::NAN)
            .condition("Clear")
            .build();
        assert_eq!(nan.fahrenheit(), None);
    }
}
