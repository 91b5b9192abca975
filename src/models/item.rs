// src/models/item.rs
// DOCUMENTATION: Data structures for inventory items
// PURPOSE: Items belong to a storage location and optionally to a category

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents a complete item record from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i64,

    /// Owning storage location (required foreign key)
    pub storage_location_id: i64,

    /// Optional category reference
    pub category_id: Option<i64>,

    pub name: String,
    pub description: Option<String>,

    /// How many of this item are stored here (defaults to 1)
    pub quantity: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new item
/// quantity defaults to 1 when omitted
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateItemRequest {
    pub storage_location_id: i64,
    pub category_id: Option<i64>,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    pub quantity: Option<i32>,
}

/// Request to update an item
/// DOCUMENTATION: The mutable field set is replaced wholesale:
/// storage_location_id is required (an update without it is rejected at
/// deserialization), and an omitted category_id clears the category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateItemRequest {
    pub storage_location_id: i64,
    pub category_id: Option<i64>,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
}

/// Query parameters for GET /api/items/search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub keyword: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_quantity_defaults_to_none() {
        let body = r#"{"storage_location_id": 3, "name": "Hammer"}"#;
        let req: CreateItemRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.quantity, None);
        assert_eq!(req.category_id, None);
        assert_eq!(req.storage_location_id, 3);
    }

    #[test]
    fn test_update_request_requires_storage_location() {
        let body = r#"{"name": "Hammer", "quantity": 2}"#;
        let result = serde_json::from_str::<UpdateItemRequest>(body);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_omitted_category_is_none() {
        let body = r#"{"storage_location_id": 3, "name": "Hammer", "quantity": 2}"#;
        let req: UpdateItemRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.category_id, None);
    }
}
