use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::news::models::NewsView;
use crate::features::sources::SourceStore;

/// Display attributes of a source used for enrichment
struct SourceMetadata {
    name: String,
    image_url: String,
}

/// Attaches source and category display attributes to news rows.
///
/// Source attributes come from a single batched lookup per call, never one
/// lookup per row. Enrichment is additive: a value already present on a row
/// is kept.
pub struct MetadataResolver {
    sources: Arc<dyn SourceStore>,
}

impl MetadataResolver {
    pub fn new(sources: Arc<dyn SourceStore>) -> Self {
        Self { sources }
    }

    /// Fills `source_name`, `source_title` and `source_profile_picture_url`.
    /// Rows keep their order; rows whose source is unknown come back unchanged.
    pub async fn attach_source_metadata(&self, rows: Vec<NewsView>) -> Result<Vec<NewsView>> {
        let ids: Vec<String> = rows
            .iter()
            .map(|row| row.item.source_id.as_str())
            .filter(|id| !id.trim().is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        if ids.is_empty() {
            return Ok(rows);
        }

        let metadata: HashMap<String, SourceMetadata> = self
            .sources
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|source| {
                (
                    source.id,
                    SourceMetadata {
                        name: source.name,
                        image_url: source.image_url,
                    },
                )
            })
            .collect();

        tracing::debug!(
            requested = ids.len(),
            resolved = metadata.len(),
            "Resolved source metadata"
        );

        Ok(rows
            .into_iter()
            .map(|mut row| {
                if let Some(source) = metadata.get(&row.item.source_id) {
                    fill_missing(&mut row.source_name, &source.name);
                    fill_missing(&mut row.source_title, &source.name);
                    fill_missing(&mut row.source_profile_picture_url, &source.image_url);
                }
                row
            })
            .collect())
    }

    /// Fills `category_name` from the parent the rows were fetched under
    pub fn attach_category_name(category: &Category, rows: &mut [NewsView]) {
        for row in rows
            .iter_mut()
            .filter(|row| row.item.category_id == category.id)
        {
            fill_missing(&mut row.category_name, &category.name);
        }
    }
}

fn fill_missing(slot: &mut Option<String>, value: &str) {
    if slot.is_none() && !value.trim().is_empty() {
        *slot = Some(value.to_string());
    }
}
