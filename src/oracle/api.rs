use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tracing::{error, info};

use super::service::{OracleNewsResponse, OracleService};
use crate::error::ExecutionError;

pub type SharedOracle = Arc<OracleService>;

pub fn router(oracle: SharedOracle) -> Router {
    Router::new()
        .route("/oracle/news", post(run_news_sentiment))
        .with_state(oracle)
}

pub async fn run_server(oracle: SharedOracle, bind_addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("🌐 Oracle API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(oracle)).await?;
    Ok(())
}

async fn run_news_sentiment(
    State(oracle): State<SharedOracle>,
) -> Result<Json<OracleNewsResponse>, ApiError> {
    info!("POST /oracle/news triggered");
    let response = oracle.run_news_sentiment().await?;
    Ok(Json(response))
}

/// Maps a pipeline failure onto a 500 carrying the error message.
pub struct ApiError(ExecutionError);

impl From<ExecutionError> for ApiError {
    fn from(err: ExecutionError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Oracle run failed: {}", self.0);
        let body = serde_json::json!({
            "statusCode": StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            "message": self.0.message(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
