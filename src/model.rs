use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Regression capability the pipeline is built around. Implementations take
/// the ordered six-element feature vector and return a raw AQI estimate.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &[f64; 6]) -> Result<f64>;
}

/// Linear regression artifact persisted as JSON by `train_dummy_model`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub weights: [f64; 6],
    pub intercept: f64,
}

impl LinearModel {
    /// Load the artifact from disk. Callers decide what a failure means;
    /// the server logs it and keeps running without a predictor.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read model artifact at {}", path.display()))?;
        let model: LinearModel = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse model artifact at {}", path.display()))?;
        if !model.intercept.is_finite() || model.weights.iter().any(|w| !w.is_finite()) {
            bail!("model artifact at {} has non-finite parameters", path.display());
        }
        Ok(model)
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: &[f64; 6]) -> Result<f64> {
        let estimate = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        if !estimate.is_finite() {
            bail!("model produced a non-finite estimate");
        }
        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_is_weighted_sum_plus_intercept() {
        let model = LinearModel {
            weights: [0.4, 0.3, 0.1, 0.1, 0.05, 0.05],
            intercept: 2.0,
        };
        let estimate = model.predict(&[100.0, 80.0, 20.0, 10.0, 1.0, 15.0]).unwrap();
        assert!((estimate - 69.8).abs() < 1e-9);
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let model = LinearModel {
            weights: [1.0; 6],
            intercept: 0.0,
        };
        assert!(model.predict(&[f64::INFINITY, 0.0, 0.0, 0.0, 0.0, 0.0]).is_err());
    }

    #[test]
    fn load_round_trips_through_json() {
        let model = LinearModel {
            weights: [0.4, 0.3, 0.1, 0.1, 0.05, 0.05],
            intercept: -1.25,
        };
        let path = std::env::temp_dir().join("atmosai_model_roundtrip.json");
        fs::write(&path, serde_json::to_string(&model).unwrap()).unwrap();
        let loaded = LinearModel::load(&path).unwrap();
        assert_eq!(loaded.weights, model.weights);
        assert_eq!(loaded.intercept, model.intercept);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_errors_on_missing_or_malformed_artifact() {
        assert!(LinearModel::load(Path::new("/nonexistent/aqi_model.json")).is_err());

        let path = std::env::temp_dir().join("atmosai_model_malformed.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(LinearModel::load(&path).is_err());
        let _ = fs::remove_file(&path);
    }
}
