// src/handlers/items.rs
// DOCUMENTATION: HTTP handlers for item operations
// PURPOSE: Parse requests, call repositories, return responses

use crate::db::ItemRepository;
use crate::errors::InventoryError;
use crate::models::{CreateItemRequest, SearchQuery, UpdateItemRequest};
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// GET /api/items
pub async fn get_all_items(pool: web::Data<PgPool>) -> Result<impl Responder, InventoryError> {
    let items = ItemRepository::find_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/items/location/{locationId}
pub async fn get_items_by_location(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, InventoryError> {
    let items = ItemRepository::find_by_location(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/items/search?keyword=
/// Case-sensitive substring search over name and description
pub async fn search_items(
    pool: web::Data<PgPool>,
    query: web::Query<SearchQuery>,
) -> Result<impl Responder, InventoryError> {
    let items = ItemRepository::search(pool.get_ref(), &query.keyword).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/items/{id}
pub async fn get_item_by_id(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, InventoryError> {
    let item = ItemRepository::find_by_id(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(item))
}

/// POST /api/items
pub async fn create_item(
    pool: web::Data<PgPool>,
    req: web::Json<CreateItemRequest>,
) -> Result<impl Responder, InventoryError> {
    if let Err(e) = req.validate() {
        return Err(InventoryError::ValidationError(e.to_string()));
    }

    let item = ItemRepository::create(pool.get_ref(), &req.into_inner()).await?;
    Ok(HttpResponse::Created().json(item))
}

/// PUT /api/items/{id}
/// Replaces name, description, quantity, category and storage location
/// wholesale; an omitted category clears the reference
pub async fn update_item(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<UpdateItemRequest>,
) -> Result<impl Responder, InventoryError> {
    if let Err(e) = req.validate() {
        return Err(InventoryError::ValidationError(e.to_string()));
    }

    let item = ItemRepository::update(pool.get_ref(), path.into_inner(), &req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(item))
}

/// DELETE /api/items/{id}
pub async fn delete_item(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, InventoryError> {
    ItemRepository::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for item routes
/// /search and /location must be registered before the parameterized /{id}
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/items")
            .route("", web::get().to(get_all_items))
            .route("", web::post().to(create_item))
            .route("/search", web::get().to(search_items))
            .route("/location/{locationId}", web::get().to(get_items_by_location))
            .route("/{id}", web::get().to(get_item_by_id))
            .route("/{id}", web::put().to(update_item))
            .route("/{id}", web::delete().to(delete_item)),
    );
}
