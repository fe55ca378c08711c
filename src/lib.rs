pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod types;
pub mod validate;

pub use classify::{classify, Category};
pub use error::PredictError;
pub use model::{LinearModel, Predictor};
pub use pipeline::Pipeline;
pub use types::{AqiResult, PollutantReading, POLLUTANT_FIELDS};
