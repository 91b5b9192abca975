// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod address_repository;
pub mod category_repository;
pub mod item_repository;
pub mod photo_repository;
pub mod room_repository;
pub mod storage_location_repository;

pub use address_repository::*;
pub use category_repository::*;
pub use item_repository::*;
pub use photo_repository::*;
pub use room_repository::*;
pub use storage_location_repository::*;
