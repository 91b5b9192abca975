// src/db/room_repository.rs
// DOCUMENTATION: Room database operations
// PURPOSE: CRUD plus by-address lookup and batch creation

use crate::errors::InventoryError;
use crate::models::{CreateRoomRequest, Room, UpdateRoomRequest};
use sqlx::PgPool;

pub struct RoomRepository;

impl RoomRepository {
    /// Fetch all rooms
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Room>, InventoryError> {
        let rooms = sqlx::query_as::<_, Room>("SELECT * FROM rooms")
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch rooms: {}", e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        Ok(rooms)
    }

    /// Fetch all rooms belonging to an address (empty vec when none match)
    pub async fn find_by_address(
        pool: &PgPool,
        address_id: i64,
    ) -> Result<Vec<Room>, InventoryError> {
        let rooms = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE address_id = $1")
            .bind(address_id)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch rooms for address {}: {}", address_id, e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        Ok(rooms)
    }

    /// Fetch a single room by id
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Room, InventoryError> {
        let room = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch room {}: {}", id, e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        room.ok_or_else(|| InventoryError::NotFound(format!("Room {}", id)))
    }

    /// Insert a new room
    pub async fn create(pool: &PgPool, req: &CreateRoomRequest) -> Result<Room, InventoryError> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (address_id, name, floor_plan_data, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(req.address_id)
        .bind(&req.name)
        .bind(&req.floor_plan_data)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create room: {}", e);
            InventoryError::DatabaseError(e.to_string())
        })?;

        log::info!("Created room with id: {}", room.id);
        Ok(room)
    }

    /// Insert a batch of rooms inside one transaction
    /// DOCUMENTATION: All-or-nothing; the returned vec preserves input order
    pub async fn create_batch(
        pool: &PgPool,
        reqs: &[CreateRoomRequest],
    ) -> Result<Vec<Room>, InventoryError> {
        let mut tx = pool.begin().await.map_err(|e| {
            log::error!("Failed to begin batch room transaction: {}", e);
            InventoryError::DatabaseError(e.to_string())
        })?;

        let mut rooms = Vec::with_capacity(reqs.len());
        for req in reqs {
            let room = sqlx::query_as::<_, Room>(
                r#"
                INSERT INTO rooms (address_id, name, floor_plan_data, created_at, updated_at)
                VALUES ($1, $2, $3, NOW(), NOW())
                RETURNING *
                "#,
            )
            .bind(req.address_id)
            .bind(&req.name)
            .bind(&req.floor_plan_data)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                log::error!("Failed to create room in batch: {}", e);
                InventoryError::DatabaseError(e.to_string())
            })?;
            rooms.push(room);
        }

        tx.commit().await.map_err(|e| {
            log::error!("Failed to commit batch room transaction: {}", e);
            InventoryError::DatabaseError(e.to_string())
        })?;

        log::info!("Created {} rooms in batch", rooms.len());
        Ok(rooms)
    }

    /// Replace the mutable fields of a room (name, floor_plan_data, address_id)
    pub async fn update(
        pool: &PgPool,
        id: i64,
        req: &UpdateRoomRequest,
    ) -> Result<Room, InventoryError> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            UPDATE rooms
            SET name = $1, floor_plan_data = $2, address_id = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.floor_plan_data)
        .bind(req.address_id)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to update room {}: {}", id, e);
            InventoryError::DatabaseError(e.to_string())
        })?;

        room.ok_or_else(|| InventoryError::NotFound(format!("Room {}", id)))
    }

    /// Hard delete a room by id
    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), InventoryError> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete room {}: {}", id, e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(InventoryError::NotFound(format!("Room {}", id)));
        }

        Ok(())
    }
}
