mod category_with_news;

pub use category_with_news::CategoryWithNews;
