use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::categories::CategoryStore;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn CategoryStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// List all categories ordered by name
    pub async fn list(&self) -> Result<Vec<Category>> {
        self.store.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use crate::shared::test_helpers::{category, Stores};

    #[tokio::test]
    async fn test_list_is_ordered_by_name_then_id() {
        let stores = Stores::new(
            vec![
                category("z", "Sports"),
                category("b", "Arts"),
                category("a", "Arts"),
            ],
            vec![],
            vec![],
        );

        let ids: Vec<_> = stores
            .category_service()
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();

        assert_eq!(ids, vec!["a", "b", "z"]);
    }
}
