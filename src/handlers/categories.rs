// src/handlers/categories.rs
// DOCUMENTATION: HTTP handlers for category operations

use crate::db::CategoryRepository;
use crate::errors::InventoryError;
use crate::models::{CreateCategoryRequest, UpdateCategoryRequest};
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// GET /api/categories
pub async fn get_all_categories(pool: web::Data<PgPool>) -> Result<impl Responder, InventoryError> {
    let categories = CategoryRepository::find_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// GET /api/categories/{id}
pub async fn get_category_by_id(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, InventoryError> {
    let category = CategoryRepository::find_by_id(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(category))
}

/// POST /api/categories
pub async fn create_category(
    pool: web::Data<PgPool>,
    req: web::Json<CreateCategoryRequest>,
) -> Result<impl Responder, InventoryError> {
    if let Err(e) = req.validate() {
        return Err(InventoryError::ValidationError(e.to_string()));
    }

    let category = CategoryRepository::create(pool.get_ref(), &req.into_inner()).await?;
    Ok(HttpResponse::Created().json(category))
}

/// PUT /api/categories/{id}
pub async fn update_category(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<UpdateCategoryRequest>,
) -> Result<impl Responder, InventoryError> {
    if let Err(e) = req.validate() {
        return Err(InventoryError::ValidationError(e.to_string()));
    }

    let category =
        CategoryRepository::update(pool.get_ref(), path.into_inner(), &req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(category))
}

/// DELETE /api/categories/{id}
pub async fn delete_category(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, InventoryError> {
    CategoryRepository::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for category routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/categories")
            .route("", web::get().to(get_all_categories))
            .route("", web::post().to(create_category))
            .route("/{id}", web::get().to(get_category_by_id))
            .route("/{id}", web::put().to(update_category))
            .route("/{id}", web::delete().to(delete_category)),
    );
}
