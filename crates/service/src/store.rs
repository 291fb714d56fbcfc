//! The record store seam the HTTP layer talks to.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::{Product, Settings, SettingsBase};
use crate::{db::{product_service, settings_service}, errors::ServiceError};

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, ServiceError>;
    async fn get_product(&self, id: &str) -> Result<Option<Product>, ServiceError>;
    async fn create_product(&self, product: Product) -> Result<Product, ServiceError>;
    async fn update_product(&self, id: &str, product: Product) -> Result<Product, ServiceError>;
    async fn delete_product(&self, id: &str) -> Result<(), ServiceError>;
    async fn get_settings(&self) -> Result<Settings, ServiceError>;
    async fn upsert_settings(&self, settings: SettingsBase) -> Result<Settings, ServiceError>;
}

/// SeaORM-backed store. Every call checks a connection out of the pool and
/// returns it when the call finishes, successfully or not.
#[derive(Clone)]
pub struct SeaOrmRecordStore {
    pub db: DatabaseConnection,
}

impl SeaOrmRecordStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl RecordStore for SeaOrmRecordStore {
    async fn list_products(&self) -> Result<Vec<Product>, ServiceError> {
        product_service::list_products(&self.db).await
    }

    async fn get_product(&self, id: &str) -> Result<Option<Product>, ServiceError> {
        product_service::get_product(&self.db, id).await
    }

    async fn create_product(&self, product: Product) -> Result<Product, ServiceError> {
        product_service::create_product(&self.db, product).await
    }

    async fn update_product(&self, id: &str, product: Product) -> Result<Product, ServiceError> {
        product_service::update_product(&self.db, id, product).await
    }

    async fn delete_product(&self, id: &str) -> Result<(), ServiceError> {
        product_service::delete_product(&self.db, id).await
    }

    async fn get_settings(&self) -> Result<Settings, ServiceError> {
        settings_service::get_settings(&self.db).await
    }

    async fn upsert_settings(&self, settings: SettingsBase) -> Result<Settings, ServiceError> {
        settings_service::upsert_settings(&self.db, settings).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn store_is_usable_as_trait_object() -> Result<(), anyhow::Error> {
        let (_dir, db) = get_db().await?;
        let store: Arc<dyn RecordStore> = Arc::new(SeaOrmRecordStore::new(db));

        assert!(store.list_products().await?.is_empty());
        assert_eq!(store.get_settings().await?, Settings::default());

        let p = Product {
            id: "cv1".into(),
            name: "Peacock Haram".into(),
            sku: None,
            category: "Covering".into(),
            description: "Gold-plated haram".into(),
            images: vec![],
            video: Some("https://cdn.example.com/haram.mp4".into()),
            price: 3200.0,
            weight: None,
            purity: None,
            stock: None,
            making_charges: None,
            deleted_at: None,
        };
        store.create_product(p.clone()).await?;
        assert_eq!(store.get_product("cv1").await?, Some(p));
        Ok(())
    }
}
