// src/models/category.rs
// DOCUMENTATION: Data structures for item categories

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents a category record from the database
/// Category names are unique (enforced by the store)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Icon identifier for the frontend
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request to create a new category
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub icon: Option<String>,
}

/// Request to update a category
/// Mutable fields: name, icon
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub icon: Option<String>,
}
