//! News sources (publishers).
//!
//! Sources are read-only here: the feed only needs their display name and
//! image, fetched in one batch per page.

pub mod models;
pub mod repositories;

pub use repositories::{PgSourceStore, SourceStore};
