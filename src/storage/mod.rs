pub(crate) mod ordered;
pub mod repository;

pub use repository::Repository;
