mod source_repository;

pub use source_repository::{PgSourceStore, SourceStore};
