mod news;

pub use news::{NewNewsItem, NewsItem, NewsView};
