use crate::features::news::repositories::NewsPredicate;

/// Content constraints applied to news before it is grouped by category.
///
/// Only `true` flags constrain; an empty source list means any source.
/// Source ids are normalized on construction: trimmed, blanks dropped,
/// duplicates removed keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentFilter {
    is_latest: bool,
    is_popular: bool,
    source_ids: Vec<String>,
}

impl ContentFilter {
    pub fn normalize<I, S>(is_latest: bool, is_popular: bool, source_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for id in source_ids {
            let id = id.as_ref().trim();
            if !id.is_empty() && !normalized.iter().any(|seen| seen == id) {
                normalized.push(id.to_string());
            }
        }

        Self {
            is_latest,
            is_popular,
            source_ids: normalized,
        }
    }

    pub fn source_ids(&self) -> &[String] {
        &self.source_ids
    }

    /// Compile into the store-level predicate
    pub fn compile(&self) -> NewsPredicate {
        NewsPredicate::new(self.is_latest, self.is_popular, self.source_ids.clone())
    }
}
