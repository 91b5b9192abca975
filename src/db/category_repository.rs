// src/db/category_repository.rs
// DOCUMENTATION: Category database operations
// PURPOSE: CRUD for item categories; name uniqueness is enforced by the store

use crate::errors::InventoryError;
use crate::models::{Category, CreateCategoryRequest, UpdateCategoryRequest};
use sqlx::PgPool;

pub struct CategoryRepository;

impl CategoryRepository {
    /// Fetch all categories
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Category>, InventoryError> {
        let categories = sqlx::query_as::<_, Category>("SELECT * FROM categories")
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch categories: {}", e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        Ok(categories)
    }

    /// Fetch a single category by id
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Category, InventoryError> {
        let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch category {}: {}", id, e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        category.ok_or_else(|| InventoryError::NotFound(format!("Category {}", id)))
    }

    /// Insert a new category
    pub async fn create(
        pool: &PgPool,
        req: &CreateCategoryRequest,
    ) -> Result<Category, InventoryError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, icon, created_at)
            VALUES ($1, $2, NOW())
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.icon)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create category: {}", e);
            InventoryError::DatabaseError(e.to_string())
        })?;

        log::info!("Created category with id: {}", category.id);
        Ok(category)
    }

    /// Replace the mutable fields of a category (name, icon)
    pub async fn update(
        pool: &PgPool,
        id: i64,
        req: &UpdateCategoryRequest,
    ) -> Result<Category, InventoryError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $1, icon = $2
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.icon)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to update category {}: {}", id, e);
            InventoryError::DatabaseError(e.to_string())
        })?;

        category.ok_or_else(|| InventoryError::NotFound(format!("Category {}", id)))
    }

    /// Hard delete a category by id
    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), InventoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete category {}: {}", id, e);
                InventoryError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(InventoryError::NotFound(format!("Category {}", id)));
        }

        Ok(())
    }
}
