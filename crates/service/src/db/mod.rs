//! SeaORM-backed operations, one function per store operation.
pub mod product_service;
pub mod settings_service;
