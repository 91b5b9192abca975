// src/db/photo_repository.rs
// DOCUMENTATION: Item photo database operations
// PURPOSE: CRUD for photo records; file handling lives in services

use crate::errors::InventoryError;
use crate::models::{CreatePhotoRequest, ItemPhoto};
use sqlx::PgPool;

pub struct ItemPhotoRepository;

impl ItemPhotoRepository {
    /// Fetch all photo records
    pub async fn find_all(pool: &PgPool) -> Result<Vec<ItemPhoto>, InventoryError> {
        let photos = sqlx::query_as::<_, ItemPhoto>("SELECT * FROM item_photos")
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch photos: {}", e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        Ok(photos)
    }

    /// Fetch all photos of an item (empty vec when none match)
    pub async fn find_by_item(
        pool: &PgPool,
        item_id: i64,
    ) -> Result<Vec<ItemPhoto>, InventoryError> {
        let photos = sqlx::query_as::<_, ItemPhoto>("SELECT * FROM item_photos WHERE item_id = $1")
            .bind(item_id)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch photos for item {}: {}", item_id, e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        Ok(photos)
    }

    /// Fetch a single photo record by id
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<ItemPhoto, InventoryError> {
        let photo = sqlx::query_as::<_, ItemPhoto>("SELECT * FROM item_photos WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch photo {}: {}", id, e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        photo.ok_or_else(|| InventoryError::NotFound(format!("ItemPhoto {}", id)))
    }

    /// Insert a new photo record linking an item to a stored filename
    pub async fn create(
        pool: &PgPool,
        req: &CreatePhotoRequest,
    ) -> Result<ItemPhoto, InventoryError> {
        let photo = sqlx::query_as::<_, ItemPhoto>(
            r#"
            INSERT INTO item_photos (item_id, photo_path, created_at)
            VALUES ($1, $2, NOW())
            RETURNING *
            "#,
        )
        .bind(req.item_id)
        .bind(&req.photo_path)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create photo record: {}", e);
            InventoryError::DatabaseError(e.to_string())
        })?;

        log::info!("Created photo record with id: {}", photo.id);
        Ok(photo)
    }

    /// Hard delete a photo record by id
    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), InventoryError> {
        let result = sqlx::query("DELETE FROM item_photos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete photo {}: {}", id, e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(InventoryError::NotFound(format!("ItemPhoto {}", id)));
        }

        Ok(())
    }
}
