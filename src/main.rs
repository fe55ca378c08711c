use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use atmosai_backend::config::ServerConfig;
use atmosai_backend::{AqiResult, LinearModel, Pipeline, PredictError, Predictor};

#[derive(Clone)]
struct AppState {
    pipeline: Arc<Pipeline>,
}

async fn status(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "online",
        "message": "AtmosAI API is running",
        "model_loaded": state.pipeline.model_loaded(),
    }))
}

async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<AqiResult>, (StatusCode, Json<Value>)> {
    tracing::info!("predict request: {}", payload);

    let body = payload.as_object().ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "request body must be a JSON object" })),
        )
    })?;

    let result = state.pipeline.predict(body).map_err(into_response)?;
    tracing::info!("prediction: {} ({})", result.aqi, result.category.as_str());
    Ok(Json(result))
}

fn into_response(err: PredictError) -> (StatusCode, Json<Value>) {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(json!({ "error": err.to_string() })))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = ServerConfig::from_env();

    let predictor: Option<Arc<dyn Predictor>> = match LinearModel::load(&cfg.model_path) {
        Ok(model) => {
            tracing::info!("loaded model from {}", cfg.model_path.display());
            Some(Arc::new(model))
        }
        Err(e) => {
            tracing::warn!("serving without a model: {:#}", e);
            None
        }
    };

    let state = AppState {
        pipeline: Arc::new(Pipeline::new(predictor)),
    };

    let app = axum::Router::new()
        .route("/", get(status))
        .route("/predict", post(predict))
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], cfg.port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
