// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod addresses;
pub mod categories;
pub mod health;
pub mod item_photos;
pub mod items;
pub mod rooms;
pub mod storage_locations;

pub use addresses::config as addresses_config;
pub use categories::config as categories_config;
pub use health::config as health_config;
pub use item_photos::config as item_photos_config;
pub use items::config as items_config;
pub use rooms::config as rooms_config;
pub use storage_locations::config as storage_locations_config;
