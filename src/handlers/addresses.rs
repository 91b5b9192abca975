// src/handlers/addresses.rs
// DOCUMENTATION: HTTP handlers for address operations
// PURPOSE: Parse requests, call repositories, return responses

use crate::db::AddressRepository;
use crate::errors::InventoryError;
use crate::models::{CreateAddressRequest, UpdateAddressRequest};
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// GET /api/addresses
pub async fn get_all_addresses(pool: web::Data<PgPool>) -> Result<impl Responder, InventoryError> {
    let addresses = AddressRepository::find_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(addresses))
}

/// GET /api/addresses/{id}
pub async fn get_address_by_id(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, InventoryError> {
    let address = AddressRepository::find_by_id(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(address))
}

/// POST /api/addresses
pub async fn create_address(
    pool: web::Data<PgPool>,
    req: web::Json<CreateAddressRequest>,
) -> Result<impl Responder, InventoryError> {
    if let Err(e) = req.validate() {
        return Err(InventoryError::ValidationError(e.to_string()));
    }

    let address = AddressRepository::create(pool.get_ref(), &req.into_inner()).await?;
    Ok(HttpResponse::Created().json(address))
}

/// PUT /api/addresses/{id}
pub async fn update_address(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<UpdateAddressRequest>,
) -> Result<impl Responder, InventoryError> {
    if let Err(e) = req.validate() {
        return Err(InventoryError::ValidationError(e.to_string()));
    }

    let address =
        AddressRepository::update(pool.get_ref(), path.into_inner(), &req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(address))
}

/// DELETE /api/addresses/{id}
pub async fn delete_address(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, InventoryError> {
    AddressRepository::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for address routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/addresses")
            .route("", web::get().to(get_all_addresses))
            .route("", web::post().to(create_address))
            .route("/{id}", web::get().to(get_address_by_id))
            .route("/{id}", web::put().to(update_address))
            .route("/{id}", web::delete().to(delete_address)),
    );
}
