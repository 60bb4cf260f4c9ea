use crate::storage::Repository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use utoipa::{IntoParams, ToSchema};

/// Shared handler state.
///
/// One lock guards the whole repository, so a create assigns its id and
/// inserts its record without another create interleaving.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<RwLock<Repository>>,
}

impl AppState {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository: Arc::new(RwLock::new(repository)),
        }
    }
}

/// Error body returned by every non-2xx response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiMessage {
    pub message: String,
    /// What was wrong with the request, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring of the word. Empty or missing lists every word.
    pub search: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub words: usize,
    pub morphemes: usize,
}
