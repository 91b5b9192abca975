// src/models/photo.rs
// DOCUMENTATION: Data structures for item photos

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Photo record linking an item to a stored file
/// DOCUMENTATION: photo_path is the generated filename under the upload
/// directory, never an absolute path
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ItemPhoto {
    pub id: i64,
    pub item_id: i64,
    pub photo_path: String,
    pub created_at: DateTime<Utc>,
}

/// Request to create a photo record directly (photo path supplied by the
/// caller; the upload endpoint builds this internally)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePhotoRequest {
    pub item_id: i64,
    pub photo_path: String,
}
