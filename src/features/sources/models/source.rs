use sqlx::FromRow;
use validator::Validate;

use crate::core::error::Result;
use crate::shared::validation::{not_blank, validate_entity};

/// Database model for a news source (publisher)
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Source {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub description: String,
    pub source_category_id: String,
}

#[derive(Debug, Clone, Validate)]
pub struct NewSource {
    pub id: String,
    #[validate(custom(function = "not_blank", message = "Source name cannot be empty."))]
    pub name: String,
    pub image_url: String,
    pub description: String,
    #[validate(length(min = 1, message = "Source category cannot be empty."))]
    pub source_category_id: String,
}

impl Source {
    #[allow(dead_code)]
    pub fn create(props: NewSource) -> Result<Self> {
        validate_entity(&props)?;

        Ok(Self {
            id: props.id,
            name: props.name,
            image_url: props.image_url,
            description: props.description,
            source_category_id: props.source_category_id,
        })
    }
}
