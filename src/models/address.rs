// src/models/address.rs
// DOCUMENTATION: Data structures for addresses
// PURPOSE: Top level of the inventory hierarchy (an address owns rooms)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents a complete address record from the database
/// DOCUMENTATION: Maps directly to the addresses table in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Address {
    pub id: i64,

    /// Display name, e.g. "Home" or "Summer house"
    pub name: String,

    /// Free-form postal address text
    pub address: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new address
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAddressRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub address: Option<String>,
}

/// Request to update an address
/// Only name and address are mutable; id and created_at are never touched
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateAddressRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub address: Option<String>,
}
