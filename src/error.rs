use thiserror::Error;

/// Every way a prediction request can fail. The HTTP layer maps client-input
/// variants to 400 and server-state variants to 500; the pipeline never
/// panics across its boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredictError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field {0} must be a number")]
    NotNumeric(&'static str),

    #[error("Field {0} cannot be negative")]
    NegativeValue(&'static str),

    #[error("ML model (aqi_model.json) is missing or could not be loaded")]
    ModelUnavailable,

    #[error("{0}")]
    Prediction(String),
}

impl PredictError {
    /// True for failures caused by the request payload rather than server state.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PredictError::MissingField(_)
                | PredictError::NotNumeric(_)
                | PredictError::NegativeValue(_)
        )
    }
}
