// src/handlers/rooms.rs
// DOCUMENTATION: HTTP handlers for room operations
// PURPOSE: Parse requests, call repositories, return responses

use crate::db::RoomRepository;
use crate::errors::InventoryError;
use crate::models::{CreateRoomRequest, UpdateRoomRequest};
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// GET /api/rooms
pub async fn get_all_rooms(pool: web::Data<PgPool>) -> Result<impl Responder, InventoryError> {
    let rooms = RoomRepository::find_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(rooms))
}

/// GET /api/rooms/address/{addressId}
pub async fn get_rooms_by_address(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, InventoryError> {
    let rooms = RoomRepository::find_by_address(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(rooms))
}

/// GET /api/rooms/{id}
pub async fn get_room_by_id(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, InventoryError> {
    let room = RoomRepository::find_by_id(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(room))
}

/// POST /api/rooms
pub async fn create_room(
    pool: web::Data<PgPool>,
    req: web::Json<CreateRoomRequest>,
) -> Result<impl Responder, InventoryError> {
    if let Err(e) = req.validate() {
        return Err(InventoryError::ValidationError(e.to_string()));
    }

    let room = RoomRepository::create(pool.get_ref(), &req.into_inner()).await?;
    Ok(HttpResponse::Created().json(room))
}

/// POST /api/rooms/batch
/// Create several rooms in one transaction, preserving input order
pub async fn create_rooms_batch(
    pool: web::Data<PgPool>,
    req: web::Json<Vec<CreateRoomRequest>>,
) -> Result<impl Responder, InventoryError> {
    for room in req.iter() {
        if let Err(e) = room.validate() {
            return Err(InventoryError::ValidationError(e.to_string()));
        }
    }

    let rooms = RoomRepository::create_batch(pool.get_ref(), &req.into_inner()).await?;
    Ok(HttpResponse::Created().json(rooms))
}

/// PUT /api/rooms/{id}
pub async fn update_room(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<UpdateRoomRequest>,
) -> Result<impl Responder, InventoryError> {
    if let Err(e) = req.validate() {
        return Err(InventoryError::ValidationError(e.to_string()));
    }

    let room = RoomRepository::update(pool.get_ref(), path.into_inner(), &req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(room))
}

/// DELETE /api/rooms/{id}
pub async fn delete_room(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, InventoryError> {
    RoomRepository::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for room routes
/// Literal segments are registered before the parameterized /{id} routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/rooms")
            .route("", web::get().to(get_all_rooms))
            .route("", web::post().to(create_room))
            .route("/batch", web::post().to(create_rooms_batch))
            .route("/address/{addressId}", web::get().to(get_rooms_by_address))
            .route("/{id}", web::get().to(get_room_by_id))
            .route("/{id}", web::put().to(update_room))
            .route("/{id}", web::delete().to(delete_room)),
    );
}
