use crate::features::categories::models::Category;
use crate::features::news::models::NewsView;

/// One category of a feed page with its filtered, enriched news
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryWithNews {
    pub category: Category,
    pub news: Vec<NewsView>,
}
