// src/handlers/storage_locations.rs
// DOCUMENTATION: HTTP handlers for storage location operations
// PURPOSE: Parse requests, call repositories, return responses

use crate::db::StorageLocationRepository;
use crate::errors::InventoryError;
use crate::models::{CreateStorageLocationRequest, UpdateStorageLocationRequest};
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// GET /api/storage-locations
pub async fn get_all_storage_locations(
    pool: web::Data<PgPool>,
) -> Result<impl Responder, InventoryError> {
    let locations = StorageLocationRepository::find_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(locations))
}

/// GET /api/storage-locations/room/{roomId}
pub async fn get_storage_locations_by_room(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, InventoryError> {
    let locations =
        StorageLocationRepository::find_by_room(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(locations))
}

/// GET /api/storage-locations/{id}
pub async fn get_storage_location_by_id(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, InventoryError> {
    let location =
        StorageLocationRepository::find_by_id(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(location))
}

/// POST /api/storage-locations
pub async fn create_storage_location(
    pool: web::Data<PgPool>,
    req: web::Json<CreateStorageLocationRequest>,
) -> Result<impl Responder, InventoryError> {
    if let Err(e) = req.validate() {
        return Err(InventoryError::ValidationError(e.to_string()));
    }

    let location = StorageLocationRepository::create(pool.get_ref(), &req.into_inner()).await?;
    Ok(HttpResponse::Created().json(location))
}

/// POST /api/storage-locations/batch
/// Create several storage locations in one transaction, preserving input order
pub async fn create_storage_locations_batch(
    pool: web::Data<PgPool>,
    req: web::Json<Vec<CreateStorageLocationRequest>>,
) -> Result<impl Responder, InventoryError> {
    for location in req.iter() {
        if let Err(e) = location.validate() {
            return Err(InventoryError::ValidationError(e.to_string()));
        }
    }

    let locations =
        StorageLocationRepository::create_batch(pool.get_ref(), &req.into_inner()).await?;
    Ok(HttpResponse::Created().json(locations))
}

/// PUT /api/storage-locations/{id}
pub async fn update_storage_location(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<UpdateStorageLocationRequest>,
) -> Result<impl Responder, InventoryError> {
    if let Err(e) = req.validate() {
        return Err(InventoryError::ValidationError(e.to_string()));
    }

    let location =
        StorageLocationRepository::update(pool.get_ref(), path.into_inner(), &req.into_inner())
            .await?;
    Ok(HttpResponse::Ok().json(location))
}

/// DELETE /api/storage-locations/{id}
pub async fn delete_storage_location(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, InventoryError> {
    StorageLocationRepository::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for storage location routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/storage-locations")
            .route("", web::get().to(get_all_storage_locations))
            .route("", web::post().to(create_storage_location))
            .route("/batch", web::post().to(create_storage_locations_batch))
            .route("/room/{roomId}", web::get().to(get_storage_locations_by_room))
            .route("/{id}", web::get().to(get_storage_location_by_id))
            .route("/{id}", web::put().to(update_storage_location))
            .route("/{id}", web::delete().to(delete_storage_location)),
    );
}
