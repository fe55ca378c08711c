use serde_json::{Map, Value};
use std::sync::Arc;

use crate::classify::classify;
use crate::error::PredictError;
use crate::model::Predictor;
use crate::types::AqiResult;
use crate::validate::validate;

/// Validate -> infer -> clamp/round -> classify. Stateless per call; the only
/// persistent state is whether a predictor was loaded at startup.
pub struct Pipeline {
    predictor: Option<Arc<dyn Predictor>>,
}

impl Pipeline {
    pub fn new(predictor: Option<Arc<dyn Predictor>>) -> Self {
        Self { predictor }
    }

    pub fn model_loaded(&self) -> bool {
        self.predictor.is_some()
    }

    pub fn predict(&self, payload: &Map<String, Value>) -> Result<AqiResult, PredictError> {
        // Checked before the payload is touched at all.
        let Some(predictor) = &self.predictor else {
            return Err(PredictError::ModelUnavailable);
        };

        let reading = validate(payload)?;
        let raw = predictor
            .predict(&reading.features())
            .map_err(|e| PredictError::Prediction(e.to_string()))?;

        let aqi = round2(raw.max(0.0));
        let (category, health_advice) = classify(aqi);

        Ok(AqiResult {
            aqi,
            category,
            health_advice,
        })
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
