use crate::domain::model::{NewWord, Word};
use crate::transport::http::handlers::common::{not_found, validated};
use crate::transport::http::types::{AppState, SearchQuery};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{debug, info};

const WORD_NOT_FOUND: &str = "Word not found";
const INVALID_WORD: &str = "Invalid word data";

#[utoipa::path(
    get,
    path = "/api/words",
    params(SearchQuery),
    responses(
        (status = 200, description = "Words in creation order, filtered by `search` when given", body = [Word])
    )
)]
pub async fn list_words_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    // An empty search string lists everything, same as no search.
    let search = query.search.as_deref().filter(|s| !s.is_empty());
    let repo = state.repository.read().await;
    let words: Vec<Word> = repo.list_words(search).into_iter().cloned().collect();
    debug!(search = ?search, hits = words.len(), "listed words");
    Json(words)
}

#[utoipa::path(
    get,
    path = "/api/words/{word}",
    params(
        ("word" = String, Path, description = "Exact surface form (e.g. dishonesty)")
    ),
    responses(
        (status = 200, description = "Word found", body = Word),
        (status = 404, description = "No such word", body = ApiMessage)
    )
)]
pub async fn get_word_handler(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> impl IntoResponse {
    let repo = state.repository.read().await;
    match repo.get_word(&word) {
        Some(w) => Json(w.clone()).into_response(),
        None => not_found(WORD_NOT_FOUND).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/words/{word}/breakdown",
    params(
        ("word" = String, Path, description = "Exact surface form (e.g. dishonesty)")
    ),
    responses(
        (status = 200, description = "Word with each component resolved to its stored morpheme", body = WordBreakdown),
        (status = 404, description = "No such word", body = ApiMessage)
    )
)]
pub async fn word_breakdown_handler(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> impl IntoResponse {
    let repo = state.repository.read().await;
    match repo.breakdown(&word) {
        Some(b) => Json(b).into_response(),
        None => not_found(WORD_NOT_FOUND).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/words",
    request_body = NewWord,
    responses(
        (status = 201, description = "Word stored (replaces any word with the same surface form)", body = Word),
        (status = 400, description = "Invalid word data", body = ApiMessage)
    )
)]
pub async fn create_word_handler(
    State(state): State<AppState>,
    request: Result<Json<NewWord>, JsonRejection>,
) -> impl IntoResponse {
    let new_word = match validated(request, NewWord::validate, INVALID_WORD) {
        Ok(w) => w,
        Err(resp) => return resp.into_response(),
    };

    let mut repo = state.repository.write().await;
    let word = repo.create_word(new_word);
    drop(repo);

    info!(id = word.id, word = %word.word, "word stored via API");
    (StatusCode::CREATED, Json(word)).into_response()
}
