use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;

use crate::error::ScoringError;
use crate::scoring::{score_transcript, EngineOptions, ScoreReport, SemanticScorer};
use crate::utils::{log_request_failed, log_server_starting, log_transcript_scored};

#[derive(Debug, Deserialize)]
pub struct TranscriptInput {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: &'static str,
}

pub struct AppState<S> {
    pub scorer: S,
    pub options: EngineOptions,
}

#[derive(Debug)]
pub struct ApiError(pub ScoringError);

impl From<ScoringError> for ApiError {
    fn from(err: ScoringError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ScoringError::SemanticUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ScoringError::SemanticTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ScoringError::InvalidWeights { .. } | ScoringError::Settings(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.kind();
        let error = self.0.to_string();
        log_request_failed(kind, &error);
        (self.status(), Json(ErrorBody { error, kind })).into_response()
    }
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Intro scorer API is running" }))
}

async fn score<S: SemanticScorer + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(input): Json<TranscriptInput>,
) -> Result<Json<ScoreReport>, ApiError> {
    let start = Instant::now();
    let report = score_transcript(&input.text, &state.scorer, &state.options).await?;
    log_transcript_scored(&report, start.elapsed());
    Ok(Json(report))
}

pub fn router<S: SemanticScorer + 'static>(scorer: S, options: EngineOptions) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/score", post(score::<S>))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(AppState { scorer, options }))
}

pub async fn run<S: SemanticScorer + 'static>(
    addr: &str,
    scorer: S,
    options: EngineOptions,
) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log_server_starting(&listener.local_addr()?.to_string());
    axum::serve(listener, router(scorer, options)).await?;
    Ok(())
}
