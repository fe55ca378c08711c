use serde::Serialize;

use crate::classify::Category;

/// Authoritative input order for the model's feature vector.
pub const POLLUTANT_FIELDS: [&str; 6] = ["pm25", "pm10", "no2", "so2", "co", "o3"];

/// One validated set of pollutant concentrations. All values are >= 0;
/// construction goes through the validator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollutantReading {
    pub pm25: f64,
    pub pm10: f64,
    pub no2: f64,
    pub so2: f64,
    pub co: f64,
    pub o3: f64,
}

impl PollutantReading {
    /// Feature vector in the order the model was trained with
    /// (matches `POLLUTANT_FIELDS`).
    pub fn features(&self) -> [f64; 6] {
        [self.pm25, self.pm10, self.no2, self.so2, self.co, self.o3]
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AqiResult {
    pub aqi: f64,
    pub category: Category,
    pub health_advice: &'static str,
}
