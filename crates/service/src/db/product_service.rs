use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, SqlErr};
use tracing::{info, instrument};

use models::product::{self, Entity as ProductEntity, Product};
use crate::errors::{db_err, ServiceError};

/// List every product, soft-deleted ones included, ordered by id.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<Product>, ServiceError> {
    let rows = ProductEntity::find()
        .order_by_asc(product::Column::Id)
        .all(db)
        .await
        .map_err(db_err)?;
    rows.into_iter().map(|m| Product::try_from(m).map_err(ServiceError::from)).collect()
}

/// Get a product by id.
pub async fn get_product(db: &DatabaseConnection, id: &str) -> Result<Option<Product>, ServiceError> {
    let found = ProductEntity::find_by_id(id.to_string()).one(db).await.map_err(db_err)?;
    Ok(found.map(Product::try_from).transpose()?)
}

/// Insert a new product; `Conflict` if the id is taken.
#[instrument(skip(db, p), fields(id = %p.id))]
pub async fn create_product(db: &DatabaseConnection, p: Product) -> Result<Product, ServiceError> {
    p.validate()?;
    let existing = ProductEntity::find_by_id(p.id.clone()).one(db).await.map_err(db_err)?;
    if existing.is_some() {
        return Err(ServiceError::Conflict("Product with this ID already exists".into()));
    }
    let am = p.to_active_model()?;
    ProductEntity::insert(am)
        .exec_without_returning(db)
        .await
        .map_err(|e| match e.sql_err() {
            // lost a race with a concurrent insert of the same id
            Some(SqlErr::UniqueConstraintViolation(_)) => ServiceError::Conflict("Product with this ID already exists".into()),
            _ => db_err(e),
        })?;
    info!("product created");
    Ok(p)
}

/// Replace every column of an existing product.
///
/// The path id must equal `p.id`; that is checked before the store is touched.
#[instrument(skip(db, p), fields(id = %id))]
pub async fn update_product(db: &DatabaseConnection, id: &str, p: Product) -> Result<Product, ServiceError> {
    if id != p.id {
        return Err(ServiceError::BadRequest("Product ID mismatch".into()));
    }
    p.validate()?;
    let current = ProductEntity::find_by_id(id.to_string()).one(db).await.map_err(db_err)?;
    if current.is_none() {
        return Err(ServiceError::not_found("Product"));
    }
    let updated = p.to_active_model()?.update(db).await.map_err(db_err)?;
    info!("product updated");
    Ok(Product::try_from(updated)?)
}

/// Hard-delete a product; `NotFound` if nothing was removed.
#[instrument(skip(db))]
pub async fn delete_product(db: &DatabaseConnection, id: &str) -> Result<(), ServiceError> {
    let res = ProductEntity::delete_by_id(id.to_string()).exec(db).await.map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Product"));
    }
    info!("product deleted");
    Ok(())
}
