// src/models/room.rs
// DOCUMENTATION: Data structures for rooms
// PURPOSE: Rooms belong to an address and own storage locations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents a complete room record from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub id: i64,

    /// Owning address (required foreign key)
    pub address_id: i64,

    pub name: String,

    /// Opaque floor-plan blob (serialized editor shapes); stored and
    /// returned verbatim, never parsed by the backend
    pub floor_plan_data: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new room (also used for batch creation)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRoomRequest {
    pub address_id: i64,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub floor_plan_data: Option<String>,
}

/// Request to update a room
/// Mutable fields: name, floor_plan_data, address_id
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateRoomRequest {
    pub address_id: i64,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub floor_plan_data: Option<String>,
}
