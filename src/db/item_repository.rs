// src/db/item_repository.rs
// DOCUMENTATION: Item database operations
// PURPOSE: CRUD, by-location lookup, and keyword search over name/description

use crate::errors::InventoryError;
use crate::models::{CreateItemRequest, Item, UpdateItemRequest};
use sqlx::PgPool;

/// Escape LIKE metacharacters so a keyword is matched as a literal substring.
/// `\` must be escaped first, then `%` and `_`.
pub fn escape_like(keyword: &str) -> String {
    keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

pub struct ItemRepository;

impl ItemRepository {
    /// Fetch all items
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Item>, InventoryError> {
        let items = sqlx::query_as::<_, Item>("SELECT * FROM items")
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch items: {}", e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        Ok(items)
    }

    /// Fetch all items in a storage location (empty vec when none match)
    pub async fn find_by_location(
        pool: &PgPool,
        storage_location_id: i64,
    ) -> Result<Vec<Item>, InventoryError> {
        let items = sqlx::query_as::<_, Item>("SELECT * FROM items WHERE storage_location_id = $1")
            .bind(storage_location_id)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!(
                    "Failed to fetch items for storage location {}: {}",
                    storage_location_id,
                    e
                );
                InventoryError::DatabaseError(e.to_string())
            })?;

        Ok(items)
    }

    /// Case-sensitive substring search over item name and description.
    /// DOCUMENTATION: The keyword is escaped so wildcard metacharacters match
    /// literally; an empty keyword matches every row.
    pub async fn search(pool: &PgPool, keyword: &str) -> Result<Vec<Item>, InventoryError> {
        let pattern = format!("%{}%", escape_like(keyword));

        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT * FROM items
            WHERE name LIKE $1 ESCAPE '\'
               OR description LIKE $1 ESCAPE '\'
            "#,
        )
        .bind(&pattern)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to search items with keyword '{}': {}", keyword, e);
            InventoryError::DatabaseError(e.to_string())
        })?;

        Ok(items)
    }

    /// Fetch a single item by id
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Item, InventoryError> {
        let item = sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch item {}: {}", id, e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        item.ok_or_else(|| InventoryError::NotFound(format!("Item {}", id)))
    }

    /// Insert a new item; quantity defaults to 1 when the request omits it
    pub async fn create(pool: &PgPool, req: &CreateItemRequest) -> Result<Item, InventoryError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (storage_location_id, category_id, name, description, quantity, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(req.storage_location_id)
        .bind(req.category_id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.quantity.unwrap_or(1))
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create item: {}", e);
            InventoryError::DatabaseError(e.to_string())
        })?;

        log::info!("Created item with id: {}", item.id);
        Ok(item)
    }

    /// Replace the mutable fields of an item wholesale
    /// DOCUMENTATION: name, description, quantity, category_id and
    /// storage_location_id are rewritten from the request; an absent
    /// category_id clears the category
    pub async fn update(
        pool: &PgPool,
        id: i64,
        req: &UpdateItemRequest,
    ) -> Result<Item, InventoryError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = $1, description = $2, quantity = $3,
                category_id = $4, storage_location_id = $5, updated_at = NOW()
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.quantity)
        .bind(req.category_id)
        .bind(req.storage_location_id)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to update item {}: {}", id, e);
            InventoryError::DatabaseError(e.to_string())
        })?;

        item.ok_or_else(|| InventoryError::NotFound(format!("Item {}", id)))
    }

    /// Hard delete an item by id
    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), InventoryError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete item {}: {}", id, e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(InventoryError::NotFound(format!("Item {}", id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_plain_keyword_unchanged() {
        assert_eq!(escape_like("hammer"), "hammer");
        assert_eq!(escape_like(""), "");
    }

    #[test]
    fn test_escape_like_percent_and_underscore() {
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
    }

    #[test]
    fn test_escape_like_backslash_first() {
        // A literal backslash must not double-escape the added escapes
        assert_eq!(escape_like("a\\b"), "a\\\\b");
        assert_eq!(escape_like("\\%"), "\\\\\\%");
    }
}
