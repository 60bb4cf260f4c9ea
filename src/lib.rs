pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::model::{
    Components, Morpheme, MorphemeKind, NewMorpheme, NewWord, ValidationError, Word, WordBreakdown,
};
pub use infra::config::ServerConfig;
pub use storage::Repository;
