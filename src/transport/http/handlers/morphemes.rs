use crate::domain::model::{Morpheme, MorphemeKind, NewMorpheme};
use crate::transport::http::handlers::common::{not_found, validated};
use crate::transport::http::types::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{debug, info};

const MORPHEME_NOT_FOUND: &str = "Morpheme not found";
const INVALID_MORPHEME: &str = "Invalid morpheme data";

#[utoipa::path(
    get,
    path = "/api/morphemes/{text}/{type}",
    params(
        ("text" = String, Path, description = "Morpheme surface text (e.g. dis-)"),
        ("type" = String, Path, description = "prefix, root or suffix")
    ),
    responses(
        (status = 200, description = "Morpheme found", body = Morpheme),
        (status = 404, description = "No morpheme with this text and type", body = ApiMessage)
    )
)]
pub async fn get_morpheme_handler(
    State(state): State<AppState>,
    Path((text, kind)): Path<(String, String)>,
) -> impl IntoResponse {
    // An unknown type cannot match any stored morpheme.
    let Ok(kind) = kind.parse::<MorphemeKind>() else {
        debug!(%text, %kind, "morpheme lookup with unknown type");
        return not_found(MORPHEME_NOT_FOUND).into_response();
    };

    let repo = state.repository.read().await;
    match repo.get_morpheme(&text, kind) {
        Some(m) => Json(m.clone()).into_response(),
        None => not_found(MORPHEME_NOT_FOUND).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/morphemes/type/{type}",
    params(
        ("type" = String, Path, description = "prefix, root or suffix")
    ),
    responses(
        (status = 200, description = "Morphemes of this type in creation order (empty for an unknown type)", body = [Morpheme])
    )
)]
pub async fn list_morphemes_by_kind_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> impl IntoResponse {
    let morphemes: Vec<Morpheme> = match kind.parse::<MorphemeKind>() {
        Ok(kind) => {
            let repo = state.repository.read().await;
            repo.list_morphemes_by_kind(kind).into_iter().cloned().collect()
        }
        Err(_) => Vec::new(),
    };
    Json(morphemes)
}

#[utoipa::path(
    post,
    path = "/api/morphemes",
    request_body = NewMorpheme,
    responses(
        (status = 201, description = "Morpheme stored (replaces any morpheme with the same text and type)", body = Morpheme),
        (status = 400, description = "Invalid morpheme data", body = ApiMessage)
    )
)]
pub async fn create_morpheme_handler(
    State(state): State<AppState>,
    request: Result<Json<NewMorpheme>, JsonRejection>,
) -> impl IntoResponse {
    let new_morpheme = match validated(request, NewMorpheme::validate, INVALID_MORPHEME) {
        Ok(m) => m,
        Err(resp) => return resp.into_response(),
    };

    let mut repo = state.repository.write().await;
    let morpheme = repo.create_morpheme(new_morpheme);
    drop(repo);

    info!(
        id = morpheme.id,
        text = %morpheme.text,
        kind = %morpheme.kind,
        "morpheme stored via API"
    );
    (StatusCode::CREATED, Json(morpheme)).into_response()
}
