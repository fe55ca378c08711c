use serde::Serialize;

/// Severity band for an AQI value, ordered Good -> Severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Severe,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::Satisfactory => "Satisfactory",
            Category::Moderate => "Moderate",
            Category::Poor => "Poor",
            Category::VeryPoor => "Very Poor",
            Category::Severe => "Severe",
        }
    }
}

const ADVICE_GOOD: &str =
    "Air quality is considered satisfactory, and air pollution poses little or no risk.";
const ADVICE_SATISFACTORY: &str = "Air quality is acceptable; however, for some pollutants there may be a moderate health concern for a very small number of people who are unusually sensitive to air pollution.";
const ADVICE_MODERATE: &str = "Members of sensitive groups may experience health effects. The general public is not likely to be affected.";
const ADVICE_POOR: &str = "Everyone may begin to experience health effects; members of sensitive groups may experience more serious health effects.";
const ADVICE_VERY_POOR: &str = "Health alert: everyone may experience more serious health effects.";
const ADVICE_SEVERE: &str = "Health warnings of emergency conditions. The entire population is more likely to be affected.";

/// Map an AQI value to its category band and health advice.
///
/// Band upper bounds are inclusive: 50 is still Good, 100 still Satisfactory,
/// and so on. Callers clamp to >= 0 before calling.
pub fn classify(aqi: f64) -> (Category, &'static str) {
    if aqi <= 50.0 {
        (Category::Good, ADVICE_GOOD)
    } else if aqi <= 100.0 {
        (Category::Satisfactory, ADVICE_SATISFACTORY)
    } else if aqi <= 200.0 {
        (Category::Moderate, ADVICE_MODERATE)
    } else if aqi <= 300.0 {
        (Category::Poor, ADVICE_POOR)
    } else if aqi <= 400.0 {
        (Category::VeryPoor, ADVICE_VERY_POOR)
    } else {
        (Category::Severe, ADVICE_SEVERE)
    }
}
