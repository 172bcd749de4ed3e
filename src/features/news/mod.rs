//! News items and their read endpoints.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/news` | Filtered, paginated news across categories |
//! | GET | `/api/news/category/{category_id}` | Paginated news of one category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{NewsStore, PgNewsStore};
pub use services::NewsService;
