//! Category feed: one page of categories, each carrying its filtered news.
//!
//! The pipeline is filter compilation, category page selection, a per-category
//! news join and one batched metadata lookup per page. See
//! [`services::FeedService`] for the two pagination modes.

pub mod dtos;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::FeedService;
