mod news_query;
mod news_repository;

pub use news_query::{NewsPredicate, NewsQuery};
pub use news_repository::{NewsStore, PgNewsStore};
