use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::categories::CategoryStore;
use crate::shared::types::PageRequest;

/// Categories on one page plus the size of the whole collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelection {
    pub categories: Vec<Category>,
    pub total: i64,
}

/// Picks the categories belonging to a page.
///
/// Uses the store's stable order (name, then id) over every category. Whether
/// a category has matching news plays no part in selection.
pub struct CategoryPageSelector {
    categories: Arc<dyn CategoryStore>,
}

impl CategoryPageSelector {
    pub fn new(categories: Arc<dyn CategoryStore>) -> Self {
        Self { categories }
    }

    pub async fn select_page(&self, page: PageRequest) -> Result<CategorySelection> {
        let (categories, total) = tokio::try_join!(
            self.categories.list_page(page.offset(), page.page_size()),
            self.categories.count(),
        )?;

        Ok(CategorySelection { categories, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{category, InMemoryCategoryStore};

    fn selector() -> CategoryPageSelector {
        CategoryPageSelector::new(Arc::new(InMemoryCategoryStore::new(vec![
            category("c3", "Culture"),
            category("c1", "Arts"),
            category("c2", "Business"),
        ])))
    }

    fn names(selection: &CategorySelection) -> Vec<&str> {
        selection
            .categories
            .iter()
            .map(|c| c.name.as_str())
            .collect()
    }

    #[tokio::test]
    async fn test_first_page_in_alphabetical_order() {
        let selection = selector()
            .select_page(PageRequest::new(1, 2))
            .await
            .unwrap();

        assert_eq!(names(&selection), vec!["Arts", "Business"]);
        assert_eq!(selection.total, 3);
    }

    #[tokio::test]
    async fn test_last_partial_page() {
        let selection = selector()
            .select_page(PageRequest::new(2, 2))
            .await
            .unwrap();

        assert_eq!(names(&selection), vec!["Culture"]);
        assert_eq!(selection.total, 3);
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty() {
        let selection = selector()
            .select_page(PageRequest::new(99, 10))
            .await
            .unwrap();

        assert!(selection.categories.is_empty());
        assert_eq!(selection.total, 3);
    }

    #[tokio::test]
    async fn test_name_ties_broken_by_id() {
        let selector = CategoryPageSelector::new(Arc::new(InMemoryCategoryStore::new(vec![
            category("b", "Same"),
            category("a", "Same"),
        ])));

        let selection = selector
            .select_page(PageRequest::new(1, 10))
            .await
            .unwrap();

        let ids: Vec<_> = selection.categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
