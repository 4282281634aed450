//! Product categories.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::CategoryId;
use crate::response::{ItemResponse, ListResponse, Resource};

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Inactive categories are hidden from the storefront.
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Resource for Category {
    const ONE: &'static str = "category";
    const MANY: &'static str = "categories";
    const DELETED: &'static str = "Category deleted successfully";
}

/// Normalized category list. The backend does not paginate categories.
pub type CategoriesResponse = ListResponse<Category>;

/// Normalized single category.
pub type CategoryResponse = ItemResponse<Category>;

/// Body of `POST /categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryData {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl CreateCategoryData {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            is_active: None,
        }
    }

    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::Validation("category name is required".to_string()));
        }
        Ok(())
    }
}

/// Body of `PUT /categories/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::MessageResponse;
    use serde_json::json;

    #[test]
    fn test_categories_response() {
        let body = json!({"categories": [{
            "id": 3,
            "name": "Spices",
            "description": "Whole and ground",
            "is_active": true,
            "created_at": "2026-01-01",
            "updated_at": "2026-01-02"
        }]});
        let resp = CategoriesResponse::from_backend(body).unwrap();
        assert_eq!(resp.data[0].id, CategoryId::new(3));
        assert_eq!(resp.total, None);
        assert!(CategoryResponse::from_backend(json!({})).is_err());
    }

    #[test]
    fn test_create_payload() {
        let data = CreateCategoryData::new("Teas", "Loose leaf");
        assert!(data.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({"name": "Teas", "description": "Loose leaf"})
        );
        assert!(CreateCategoryData::new("", "x").validate().is_err());
    }

    #[test]
    fn test_update_and_delete() {
        let update = UpdateCategoryData {
            is_active: Some(false),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"is_active": false}));
        assert_eq!(
            MessageResponse::deleted::<Category>(&json!({})).message,
            "Category deleted successfully"
        );
    }
}
