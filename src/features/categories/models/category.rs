use sqlx::FromRow;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::shared::validation::{not_blank, validate_entity};

/// Database model for category
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color_code: String,
    pub image_url: String,
}

/// Input for building a validated category
#[derive(Debug, Clone, Validate)]
pub struct NewCategory {
    pub id: String,
    #[validate(custom(function = "not_blank", message = "Category name cannot be empty."))]
    pub name: String,
    pub description: String,
    #[validate(custom(
        function = "not_blank",
        message = "Category color code cannot be empty."
    ))]
    pub color_code: String,
    #[validate(custom(
        function = "not_blank",
        message = "Category image url cannot be empty."
    ))]
    pub image_url: String,
}

impl Category {
    #[allow(dead_code)]
    pub fn create(props: NewCategory) -> Result<Self> {
        validate_entity(&props)?;

        Ok(Self {
            id: props.id,
            name: props.name,
            description: props.description,
            color_code: props.color_code,
            image_url: props.image_url,
        })
    }

    #[allow(dead_code)]
    pub fn update_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        check_not_blank(&name, "Category name cannot be empty.")?;
        self.name = name;
        Ok(())
    }

    #[allow(dead_code)]
    pub fn update_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    #[allow(dead_code)]
    pub fn update_color(&mut self, color_code: impl Into<String>) -> Result<()> {
        let color_code = color_code.into();
        check_not_blank(&color_code, "Category color code cannot be empty.")?;
        self.color_code = color_code;
        Ok(())
    }

    #[allow(dead_code)]
    pub fn update_image(&mut self, image_url: impl Into<String>) -> Result<()> {
        let image_url = image_url.into();
        check_not_blank(&image_url, "Category image url cannot be empty.")?;
        self.image_url = image_url;
        Ok(())
    }
}

#[allow(dead_code)]
fn check_not_blank(value: &str, message: &str) -> Result<()> {
    not_blank(value).map_err(|_| AppError::Validation(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> NewCategory {
        NewCategory {
            id: "cat-tech".to_string(),
            name: "Tech".to_string(),
            description: "Gadgets and software".to_string(),
            color_code: "#0044ff".to_string(),
            image_url: "https://cdn.example.com/tech.png".to_string(),
        }
    }

    #[test]
    fn test_create_category() {
        let category = Category::create(props()).unwrap();
        assert_eq!(category.id, "cat-tech");
        assert_eq!(category.name, "Tech");
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let result = Category::create(NewCategory {
            name: "  ".to_string(),
            ..props()
        });

        match result {
            Err(AppError::Validation(msg)) => {
                assert!(msg.contains("Category name cannot be empty."))
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_create_rejects_blank_color_and_image() {
        assert!(Category::create(NewCategory {
            color_code: String::new(),
            ..props()
        })
        .is_err());
        assert!(Category::create(NewCategory {
            image_url: String::new(),
            ..props()
        })
        .is_err());
    }

    #[test]
    fn test_updates_revalidate() {
        let mut category = Category::create(props()).unwrap();

        assert!(category.update_name("").is_err());
        assert_eq!(category.name, "Tech");

        category.update_name("Technology").unwrap();
        category.update_description("");
        category.update_color("#111111").unwrap();
        assert!(category.update_image(" ").is_err());

        assert_eq!(category.name, "Technology");
        assert_eq!(category.description, "");
        assert_eq!(category.color_code, "#111111");
    }
}
