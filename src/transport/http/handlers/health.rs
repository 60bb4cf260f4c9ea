use crate::transport::http::types::{AppState, HealthResponse};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up; reports record counts", body = HealthResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let repo = state.repository.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        words: repo.word_count(),
        morphemes: repo.morpheme_count(),
    })
}
