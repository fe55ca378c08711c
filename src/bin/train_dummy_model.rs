//! Fits a dummy AQI regression on synthetic pollutant data and writes the
//! artifact the server loads at startup.
//!
//! Run with: cargo run --bin train_dummy_model

use anyhow::{Context, Result};
use atmosai_backend::LinearModel;
use std::{fs, path::Path};

const N_SAMPLES: usize = 100;
const N_FEATURES: usize = 6;
const SEED: u64 = 42;
const NOISE_SIGMA: f64 = 10.0;
// pm25, pm10, no2, so2, co, o3
const TRUE_WEIGHTS: [f64; 6] = [0.4, 0.3, 0.1, 0.1, 0.05, 0.05];

/// Small 64-bit LCG so the synthetic dataset is reproducible.
struct Lcg64 {
    state: u64,
}

impl Lcg64 {
    const MULT: u64 = 6_364_136_223_846_793_005;
    const INC: u64 = 1_442_695_040_888_963_407;

    const fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_mul(Self::MULT).wrapping_add(Self::INC),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(Self::MULT).wrapping_add(Self::INC);
        self.state
    }

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Standard normal via Box-Muller.
    fn next_gaussian(&mut self) -> f64 {
        let u1 = self.next_f64().max(f64::MIN_POSITIVE);
        let u2 = self.next_f64();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}

/// Synthetic dataset: features uniform in [0, 500), target a fixed linear
/// combination plus Gaussian noise.
fn synthetic_data(rng: &mut Lcg64) -> (Vec<[f64; N_FEATURES]>, Vec<f64>) {
    let mut xs = Vec::with_capacity(N_SAMPLES);
    let mut ys = Vec::with_capacity(N_SAMPLES);
    for _ in 0..N_SAMPLES {
        let mut row = [0.0; N_FEATURES];
        for x in &mut row {
            *x = rng.next_f64() * 500.0;
        }
        let y: f64 = TRUE_WEIGHTS
            .iter()
            .zip(&row)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + NOISE_SIGMA * rng.next_gaussian();
        xs.push(row);
        ys.push(y);
    }
    (xs, ys)
}

/// Ordinary least squares with an intercept column, solved via the normal
/// equations and Gaussian elimination with partial pivoting.
fn fit_ols(xs: &[[f64; N_FEATURES]], ys: &[f64]) -> Result<LinearModel> {
    const D: usize = N_FEATURES + 1; // intercept last

    // Accumulate X^T X and X^T y over augmented rows [x0..x5, 1].
    let mut xtx = [[0.0f64; D]; D];
    let mut xty = [0.0f64; D];
    for (row, &y) in xs.iter().zip(ys) {
        let mut aug = [1.0f64; D];
        aug[..N_FEATURES].copy_from_slice(row);
        for i in 0..D {
            for j in 0..D {
                xtx[i][j] += aug[i] * aug[j];
            }
            xty[i] += aug[i] * y;
        }
    }

    // Forward elimination.
    for col in 0..D {
        let pivot = (col..D)
            .max_by(|&a, &b| xtx[a][col].abs().total_cmp(&xtx[b][col].abs()))
            .unwrap_or(col);
        if xtx[pivot][col].abs() < 1e-12 {
            anyhow::bail!("normal equations are singular");
        }
        xtx.swap(col, pivot);
        xty.swap(col, pivot);
        for row in col + 1..D {
            let factor = xtx[row][col] / xtx[col][col];
            for k in col..D {
                xtx[row][k] -= factor * xtx[col][k];
            }
            xty[row] -= factor * xty[col];
        }
    }

    // Back substitution.
    let mut beta = [0.0f64; D];
    for row in (0..D).rev() {
        let tail: f64 = (row + 1..D).map(|k| xtx[row][k] * beta[k]).sum();
        beta[row] = (xty[row] - tail) / xtx[row][row];
    }

    let mut weights = [0.0f64; N_FEATURES];
    weights.copy_from_slice(&beta[..N_FEATURES]);
    Ok(LinearModel {
        weights,
        intercept: beta[N_FEATURES],
    })
}

fn main() -> Result<()> {
    let mut rng = Lcg64::new(SEED);
    let (xs, ys) = synthetic_data(&mut rng);
    let model = fit_ols(&xs, &ys)?;

    let out_path = Path::new("model/aqi_model.json");
    if let Some(dir) = out_path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    fs::write(out_path, serde_json::to_string_pretty(&model)?)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!("Model saved to {}", out_path.display());
    println!("weights = {:?}, intercept = {:.4}", model.weights, model.intercept);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lcg_is_deterministic_and_in_range() {
        let mut a = Lcg64::new(7);
        let mut b = Lcg64::new(7);
        for _ in 0..100 {
            let x = a.next_f64();
            assert_eq!(x, b.next_f64());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn ols_recovers_generating_weights() {
        let mut rng = Lcg64::new(SEED);
        let (xs, ys) = synthetic_data(&mut rng);
        let model = fit_ols(&xs, &ys).unwrap();

        // Noise sigma is 10 over targets spanning ~0..500; coefficients
        // should land close to the generating ones.
        for (fitted, truth) in model.weights.iter().zip(&TRUE_WEIGHTS) {
            assert!(
                (fitted - truth).abs() < 0.05,
                "fitted {fitted} vs true {truth}"
            );
        }
        assert!(model.intercept.abs() < 15.0);
    }

    #[test]
    fn exact_linear_data_fits_exactly() {
        // No noise: OLS must reproduce the weights to numerical precision.
        let mut rng = Lcg64::new(1);
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        for _ in 0..50 {
            let mut row = [0.0; N_FEATURES];
            for x in &mut row {
                *x = rng.next_f64() * 500.0;
            }
            let y = TRUE_WEIGHTS.iter().zip(&row).map(|(w, x)| w * x).sum::<f64>() + 3.5;
            xs.push(row);
            ys.push(y);
        }
        let model = fit_ols(&xs, &ys).unwrap();
        for (fitted, truth) in model.weights.iter().zip(&TRUE_WEIGHTS) {
            assert!((fitted - truth).abs() < 1e-8);
        }
        assert!((model.intercept - 3.5).abs() < 1e-6);
    }
}
