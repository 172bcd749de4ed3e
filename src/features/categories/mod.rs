//! News categories.
//!
//! Categories are the unit of pagination for the category feed. They are
//! always listed by `name`, then `id`.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{CategoryStore, PgCategoryStore};
pub use services::CategoryService;
