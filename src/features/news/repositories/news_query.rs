use sqlx::{Postgres, QueryBuilder};

use crate::features::news::models::NewsItem;

/// Store-level news predicate. All present constraints are ANDed; a `false`
/// flag or an empty source list means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsPredicate {
    latest_only: bool,
    popular_only: bool,
    source_ids: Vec<String>,
}

impl NewsPredicate {
    pub fn new(latest_only: bool, popular_only: bool, source_ids: Vec<String>) -> Self {
        Self {
            latest_only,
            popular_only,
            source_ids,
        }
    }

    /// In-process evaluation, equivalent to the SQL from [`Self::push_sql`]
    #[allow(dead_code)]
    pub fn matches(&self, item: &NewsItem) -> bool {
        (!self.latest_only || item.is_latest)
            && (!self.popular_only || item.is_popular)
            && (self.source_ids.is_empty() || self.source_ids.contains(&item.source_id))
    }

    /// Appends ` AND ...` clauses; the builder must already be inside a WHERE
    pub fn push_sql(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        if self.latest_only {
            builder.push(" AND is_latest = TRUE");
        }
        if self.popular_only {
            builder.push(" AND is_popular = TRUE");
        }
        if !self.source_ids.is_empty() {
            builder
                .push(" AND source_id = ANY(")
                .push_bind(self.source_ids.clone())
                .push(")");
        }
    }
}

/// A news lookup, optionally scoped to a single category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsQuery {
    pub category_id: Option<String>,
    pub predicate: NewsPredicate,
}

impl NewsQuery {
    pub fn matching(predicate: NewsPredicate) -> Self {
        Self {
            category_id: None,
            predicate,
        }
    }

    pub fn in_category(category_id: impl Into<String>, predicate: NewsPredicate) -> Self {
        Self {
            category_id: Some(category_id.into()),
            predicate,
        }
    }

    #[allow(dead_code)]
    pub fn matches(&self, item: &NewsItem) -> bool {
        self.category_id
            .as_deref()
            .map_or(true, |category_id| item.category_id == category_id)
            && self.predicate.matches(item)
    }

    pub fn push_sql(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        if let Some(category_id) = &self.category_id {
            builder
                .push(" AND category_id = ")
                .push_bind(category_id.clone());
        }
        self.predicate.push_sql(builder);
    }
}
