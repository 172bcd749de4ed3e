mod feed_handler;

pub use feed_handler::{__path_list_categories_with_news, list_categories_with_news};
