use crate::domain::model::{
    Components, Morpheme, MorphemeKind, MorphemePart, NewMorpheme, NewWord, Word, WordBreakdown,
};
use crate::transport::http::handlers::{health, morphemes, words};
use crate::transport::http::types::{ApiMessage, AppState, HealthResponse};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        words::list_words_handler,
        words::get_word_handler,
        words::word_breakdown_handler,
        words::create_word_handler,
        morphemes::get_morpheme_handler,
        morphemes::list_morphemes_by_kind_handler,
        morphemes::create_morpheme_handler
    ),
    components(schemas(
        ApiMessage,
        HealthResponse,
        Word,
        NewWord,
        Components,
        WordBreakdown,
        MorphemePart,
        Morpheme,
        NewMorpheme,
        MorphemeKind
    ))
)]
pub struct ApiDoc;

/// API routes only. `/api/morphemes/type/{type}` is a static segment and wins
/// over the `{text}` capture of the exact-lookup route.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/words",
            get(words::list_words_handler).post(words::create_word_handler),
        )
        .route("/api/words/:word", get(words::get_word_handler))
        .route("/api/words/:word/breakdown", get(words::word_breakdown_handler))
        .route("/api/morphemes", post(morphemes::create_morpheme_handler))
        .route(
            "/api/morphemes/type/:type",
            get(morphemes::list_morphemes_by_kind_handler),
        )
        .route("/api/morphemes/:text/:type", get(morphemes::get_morpheme_handler))
        .with_state(app_state)
}

/// The full application: API routes plus Swagger UI, CORS and request tracing.
pub fn create_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
