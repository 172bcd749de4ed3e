mod news_handler;

pub use news_handler::{
    __path_list_news, __path_list_news_by_category, list_news, list_news_by_category,
};
