// src/db/address_repository.rs
// DOCUMENTATION: Address database operations
// PURPOSE: CRUD for the top level of the inventory hierarchy

use crate::errors::InventoryError;
use crate::models::{Address, CreateAddressRequest, UpdateAddressRequest};
use sqlx::PgPool;

pub struct AddressRepository;

impl AddressRepository {
    /// Fetch all addresses
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Address>, InventoryError> {
        let addresses = sqlx::query_as::<_, Address>("SELECT * FROM addresses")
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch addresses: {}", e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        Ok(addresses)
    }

    /// Fetch a single address by id
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Address, InventoryError> {
        let address = sqlx::query_as::<_, Address>("SELECT * FROM addresses WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch address {}: {}", id, e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        address.ok_or_else(|| InventoryError::NotFound(format!("Address {}", id)))
    }

    /// Insert a new address; the store assigns id and created_at
    pub async fn create(
        pool: &PgPool,
        req: &CreateAddressRequest,
    ) -> Result<Address, InventoryError> {
        let address = sqlx::query_as::<_, Address>(
            r#"
            INSERT INTO addresses (name, address, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.address)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create address: {}", e);
            InventoryError::DatabaseError(e.to_string())
        })?;

        log::info!("Created address with id: {}", address.id);
        Ok(address)
    }

    /// Replace the mutable fields of an address
    /// DOCUMENTATION: Only name and address are rewritten; id and created_at
    /// are structurally untouched by the UPDATE statement
    pub async fn update(
        pool: &PgPool,
        id: i64,
        req: &UpdateAddressRequest,
    ) -> Result<Address, InventoryError> {
        let address = sqlx::query_as::<_, Address>(
            r#"
            UPDATE addresses
            SET name = $1, address = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.address)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to update address {}: {}", id, e);
            InventoryError::DatabaseError(e.to_string())
        })?;

        address.ok_or_else(|| InventoryError::NotFound(format!("Address {}", id)))
    }

    /// Hard delete an address by id
    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), InventoryError> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete address {}: {}", id, e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(InventoryError::NotFound(format!("Address {}", id)));
        }

        Ok(())
    }
}
