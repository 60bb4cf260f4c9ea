pub mod router;
pub mod types;
pub mod handlers {
    pub mod common;
    pub mod health;
    pub mod morphemes;
    pub mod words;
}

pub use router::{create_app, create_router, ApiDoc};
pub use types::AppState;
