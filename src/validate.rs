use serde_json::{Map, Value};

use crate::error::PredictError;
use crate::types::{PollutantReading, POLLUTANT_FIELDS};

/// Check a decoded request payload against the required pollutant fields and
/// build a `PollutantReading` from it.
///
/// Fields are checked in the fixed order `pm25, pm10, no2, so2, co, o3` and
/// validation stops at the first failure: absent, then non-numeric, then
/// negative, per field.
pub fn validate(payload: &Map<String, Value>) -> Result<PollutantReading, PredictError> {
    let mut values = [0.0f64; 6];
    for (i, field) in POLLUTANT_FIELDS.into_iter().enumerate() {
        let value = payload
            .get(field)
            .ok_or(PredictError::MissingField(field))?;
        let number = value.as_f64().ok_or(PredictError::NotNumeric(field))?;
        if number < 0.0 {
            return Err(PredictError::NegativeValue(field));
        }
        values[i] = number;
    }

    Ok(PollutantReading {
        pm25: values[0],
        pm10: values[1],
        no2: values[2],
        so2: values[3],
        co: values[4],
        o3: values[5],
    })
}
