//! Weather-derived styling buckets that decide an outfit's name and tip.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Temperature thresholds, in Fahrenheit, separating the cold and hot buckets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StylingThresholds {
    /// Temperatures strictly below this are [`StylingBucket::Cold`].
    pub cold_below_f: f64,
    /// Temperatures strictly above this are [`StylingBucket::Hot`].
    pub hot_above_f: f64,
}

impl Default for StylingThresholds {
    fn default() -> Self {
        Self {
            cold_below_f: 60.0,
            hot_above_f: 80.0,
        }
    }
}

/// One of four weather classifications used to style an outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylingBucket {
    Cold,
    Hot,
    Rain,
    Mild,
}

impl StylingBucket {
    /// Classifies weather into a bucket. First match wins:
    /// cold temperature, hot temperature, a condition containing "rain"
    /// (case-insensitive), otherwise mild.
    ///
    /// Temperature is checked before the condition, so a cold rainy day is
    /// [`StylingBucket::Cold`].
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_wardrobe::{StylingBucket, StylingThresholds};
    ///
    /// let thresholds = StylingThresholds::default();
    /// assert_eq!(StylingBucket::classify(50.0, "light rain", &thresholds), StylingBucket::Cold);
    /// assert_eq!(StylingBucket::classify(70.0, "Heavy RAIN", &thresholds), StylingBucket::Rain);
    /// assert_eq!(StylingBucket::classify(70.0, "Sunny", &thresholds), StylingBucket::Mild);
    /// ```
    pub fn classify(temperature_f: f64, condition: &str, thresholds: &StylingThresholds) -> Self {
        if temperature_f < thresholds.cold_below_f {
            StylingBucket::Cold
        } else if temperature_f > thresholds.hot_above_f {
            StylingBucket::Hot
        } else if condition.to_lowercase().contains("rain") {
            StylingBucket::Rain
        } else {
            StylingBucket::Mild
        }
    }

    /// The outfit name shown for this bucket.
    pub fn outfit_name(&self) -> &'static str {
        match self {
            StylingBucket::Cold => "Cozy Layers",
            StylingBucket::Hot => "Cool Comfort",
            StylingBucket::Rain => "Rain Ready",
            StylingBucket::Mild => "Complete Outfit",
        }
    }

    /// The styling tip shown for this bucket.
    pub fn styling_tip(&self) -> &'static str {
        match self {
            StylingBucket::Cold => "Add a scarf or thermal layers",
            StylingBucket::Hot => "Choose breathable fabrics and light colors",
            StylingBucket::Rain => "Bring a waterproof jacket or umbrella",
            StylingBucket::Mild => "Dress appropriately for the weather",
        }
    }
}

impl fmt::Display for StylingBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StylingBucket::Cold => "cold",
            StylingBucket::Hot => "hot",
            StylingBucket::Rain => "rain",
            StylingBucket::Mild => "mild",
        };
        f.write_str(name)
    }
}
