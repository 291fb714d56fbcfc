//! Record store for the jewelry catalog.
//! - Product CRUD and the settings singleton on top of the `models` entities.
//! - Maps storage outcomes to `ServiceError` (conflict / not found / bad request).

pub mod errors;
pub mod db;
pub mod store;
#[cfg(test)]
pub mod test_support;

pub use store::{RecordStore, SeaOrmRecordStore};
