// src/db/storage_location_repository.rs
// DOCUMENTATION: Storage location database operations
// PURPOSE: CRUD plus by-room lookup and batch creation

use crate::errors::InventoryError;
use crate::models::{CreateStorageLocationRequest, StorageLocation, UpdateStorageLocationRequest};
use sqlx::PgPool;

pub struct StorageLocationRepository;

impl StorageLocationRepository {
    /// Fetch all storage locations
    pub async fn find_all(pool: &PgPool) -> Result<Vec<StorageLocation>, InventoryError> {
        let locations = sqlx::query_as::<_, StorageLocation>("SELECT * FROM storage_locations")
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch storage locations: {}", e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        Ok(locations)
    }

    /// Fetch all storage locations in a room (empty vec when none match)
    pub async fn find_by_room(
        pool: &PgPool,
        room_id: i64,
    ) -> Result<Vec<StorageLocation>, InventoryError> {
        let locations =
            sqlx::query_as::<_, StorageLocation>("SELECT * FROM storage_locations WHERE room_id = $1")
                .bind(room_id)
                .fetch_all(pool)
                .await
                .map_err(|e| {
                    log::error!("Failed to fetch storage locations for room {}: {}", room_id, e);
                    InventoryError::DatabaseError(e.to_string())
                })?;

        Ok(locations)
    }

    /// Fetch a single storage location by id
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<StorageLocation, InventoryError> {
        let location =
            sqlx::query_as::<_, StorageLocation>("SELECT * FROM storage_locations WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await
                .map_err(|e| {
                    log::error!("Failed to fetch storage location {}: {}", id, e);
                    InventoryError::DatabaseError(e.to_string())
                })?;

        location.ok_or_else(|| InventoryError::NotFound(format!("StorageLocation {}", id)))
    }

    /// Insert a new storage location
    pub async fn create(
        pool: &PgPool,
        req: &CreateStorageLocationRequest,
    ) -> Result<StorageLocation, InventoryError> {
        let location = sqlx::query_as::<_, StorageLocation>(
            r#"
            INSERT INTO storage_locations (room_id, name, type, position_x, position_y, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(req.room_id)
        .bind(&req.name)
        .bind(&req.type_field)
        .bind(req.position_x)
        .bind(req.position_y)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create storage location: {}", e);
            InventoryError::DatabaseError(e.to_string())
        })?;

        log::info!("Created storage location with id: {}", location.id);
        Ok(location)
    }

    /// Insert a batch of storage locations inside one transaction
    /// DOCUMENTATION: All-or-nothing; the returned vec preserves input order
    pub async fn create_batch(
        pool: &PgPool,
        reqs: &[CreateStorageLocationRequest],
    ) -> Result<Vec<StorageLocation>, InventoryError> {
        let mut tx = pool.begin().await.map_err(|e| {
            log::error!("Failed to begin batch storage location transaction: {}", e);
            InventoryError::DatabaseError(e.to_string())
        })?;

        let mut locations = Vec::with_capacity(reqs.len());
        for req in reqs {
            let location = sqlx::query_as::<_, StorageLocation>(
                r#"
                INSERT INTO storage_locations (room_id, name, type, position_x, position_y, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
                RETURNING *
                "#,
            )
            .bind(req.room_id)
            .bind(&req.name)
            .bind(&req.type_field)
            .bind(req.position_x)
            .bind(req.position_y)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                log::error!("Failed to create storage location in batch: {}", e);
                InventoryError::DatabaseError(e.to_string())
            })?;
            locations.push(location);
        }

        tx.commit().await.map_err(|e| {
            log::error!("Failed to commit batch storage location transaction: {}", e);
            InventoryError::DatabaseError(e.to_string())
        })?;

        log::info!("Created {} storage locations in batch", locations.len());
        Ok(locations)
    }

    /// Replace the mutable fields of a storage location
    /// (name, type, position_x, position_y, room_id)
    pub async fn update(
        pool: &PgPool,
        id: i64,
        req: &UpdateStorageLocationRequest,
    ) -> Result<StorageLocation, InventoryError> {
        let location = sqlx::query_as::<_, StorageLocation>(
            r#"
            UPDATE storage_locations
            SET name = $1, type = $2, position_x = $3, position_y = $4, room_id = $5, updated_at = NOW()
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.type_field)
        .bind(req.position_x)
        .bind(req.position_y)
        .bind(req.room_id)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to update storage location {}: {}", id, e);
            InventoryError::DatabaseError(e.to_string())
        })?;

        location.ok_or_else(|| InventoryError::NotFound(format!("StorageLocation {}", id)))
    }

    /// Hard delete a storage location by id
    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), InventoryError> {
        let result = sqlx::query("DELETE FROM storage_locations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete storage location {}: {}", id, e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(InventoryError::NotFound(format!("StorageLocation {}", id)));
        }

        Ok(())
    }
}
