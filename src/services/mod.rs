// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod photo_storage;

pub use photo_storage::PhotoStorage;
