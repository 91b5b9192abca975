// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod address;
pub mod category;
pub mod item;
pub mod photo;
pub mod room;
pub mod storage_location;

pub use address::*;
pub use category::*;
pub use item::*;
pub use photo::*;
pub use room::*;
pub use storage_location::*;
