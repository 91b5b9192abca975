// src/models/storage_location.rs
// DOCUMENTATION: Data structures for storage locations
// PURPOSE: Storage locations belong to a room and own items; they carry
// an (x, y) position on the room's floor plan

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents a complete storage location record from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StorageLocation {
    pub id: i64,

    /// Owning room (required foreign key)
    pub room_id: i64,

    pub name: String,

    /// Free-text kind of storage: shelf, drawer, box, cabinet, ...
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub type_field: Option<String>,

    /// Position on the room floor plan
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new storage location (also used for batch creation)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateStorageLocationRequest {
    pub room_id: i64,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(rename = "type")]
    pub type_field: Option<String>,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
}

/// Request to update a storage location
/// Mutable fields: name, type, position_x, position_y, room_id
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateStorageLocationRequest {
    pub room_id: i64,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(rename = "type")]
    pub type_field: Option<String>,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
}
