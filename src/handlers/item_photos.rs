// src/handlers/item_photos.rs
// DOCUMENTATION: HTTP handlers for item photo operations
// PURPOSE: Photo record CRUD plus multipart file upload; file bytes live
// under the configured upload directory, the database stores the filename

use crate::config::Config;
use crate::db::{ItemPhotoRepository, ItemRepository};
use crate::errors::InventoryError;
use crate::models::CreatePhotoRequest;
use crate::services::PhotoStorage;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::TryStreamExt;
use sqlx::PgPool;

/// GET /api/item-photos
pub async fn get_all_photos(pool: web::Data<PgPool>) -> Result<impl Responder, InventoryError> {
    let photos = ItemPhotoRepository::find_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(photos))
}

/// GET /api/item-photos/item/{itemId}
pub async fn get_photos_by_item(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, InventoryError> {
    let photos = ItemPhotoRepository::find_by_item(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(photos))
}

/// GET /api/item-photos/{id}
pub async fn get_photo_by_id(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, InventoryError> {
    let photo = ItemPhotoRepository::find_by_id(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(photo))
}

/// POST /api/item-photos/upload/{itemId}
/// Multipart upload with file field "file"
/// DOCUMENTATION: Non-transactional by design — directory creation, file
/// write and record insert happen in sequence; a crash in between can leave
/// an orphaned file, which is accepted. Concurrent uploads are safe because
/// every upload gets a fresh generated filename.
pub async fn upload_photo(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    path: web::Path<i64>,
    mut payload: Multipart,
) -> Result<impl Responder, InventoryError> {
    let item_id = path.into_inner();

    // Collect the "file" field bytes and the declared filename
    let mut file_bytes: Vec<u8> = Vec::new();
    let mut original_filename: Option<String> = None;

    while let Some(mut field) = payload.try_next().await.map_err(|e| {
        InventoryError::InvalidInput(format!("Failed to parse multipart data: {}", e))
    })? {
        if field.name() != "file" {
            continue;
        }

        original_filename = field
            .content_disposition()
            .get_filename()
            .map(|s| s.to_string());

        while let Some(chunk) = field.try_next().await.map_err(|e| {
            InventoryError::InvalidInput(format!("Failed to read file chunk: {}", e))
        })? {
            file_bytes.extend_from_slice(&chunk);
        }
    }

    if file_bytes.is_empty() {
        return Err(InventoryError::InvalidInput(
            "Please select a file to upload".to_string(),
        ));
    }

    // 404 when the target item does not exist
    let item = ItemRepository::find_by_id(pool.get_ref(), item_id).await?;

    let storage = PhotoStorage::new(&config.upload_dir);
    let filename = PhotoStorage::generate_filename(original_filename.as_deref());

    storage.save(&filename, &file_bytes).await.map_err(|e| {
        log::error!("Failed to write photo for item {}: {}", item.id, e);
        InventoryError::FileStorageError(format!("Failed to upload file: {}", e))
    })?;

    let photo = ItemPhotoRepository::create(
        pool.get_ref(),
        &CreatePhotoRequest {
            item_id: item.id,
            photo_path: filename,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(photo))
}

/// POST /api/item-photos
/// Direct record insert with a caller-supplied photo path (sync tooling)
pub async fn create_photo(
    pool: web::Data<PgPool>,
    req: web::Json<CreatePhotoRequest>,
) -> Result<impl Responder, InventoryError> {
    let photo = ItemPhotoRepository::create(pool.get_ref(), &req.into_inner()).await?;
    Ok(HttpResponse::Created().json(photo))
}

/// DELETE /api/item-photos/{id}
/// DOCUMENTATION: The file delete is best-effort — a missing file or any
/// other filesystem error is logged and the record delete still proceeds
pub async fn delete_photo(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    path: web::Path<i64>,
) -> Result<impl Responder, InventoryError> {
    let id = path.into_inner();
    let photo = ItemPhotoRepository::find_by_id(pool.get_ref(), id).await?;

    let storage = PhotoStorage::new(&config.upload_dir);
    if let Err(e) = storage.remove(&photo.photo_path).await {
        log::error!("Failed to delete file {}: {}", photo.photo_path, e);
    }

    ItemPhotoRepository::delete(pool.get_ref(), id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for item photo routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/item-photos")
            .route("", web::get().to(get_all_photos))
            .route("", web::post().to(create_photo))
            .route("/upload/{itemId}", web::post().to(upload_photo))
            .route("/item/{itemId}", web::get().to(get_photos_by_item))
            .route("/{id}", web::get().to(get_photo_by_id))
            .route("/{id}", web::delete().to(delete_photo)),
    );
}
