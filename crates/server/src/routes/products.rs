use axum::{extract::{Path, State}, Json};
use tracing::info;

use common::types::Message;
use models::Product;

use crate::{errors::JsonApiError, routes::AppState};

#[utoipa::path(
    get, path = "/products", tag = "products",
    responses(
        (status = 200, description = "Every stored product", body = [crate::openapi::ProductDoc]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, JsonApiError> {
    let list = state.store.list_products().await?;
    info!(count = list.len(), "list products");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/products/{id}", tag = "products",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ProductDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>, JsonApiError> {
    match state.store.get_product(&id).await? {
        Some(p) => Ok(Json(p)),
        None => Err(service::errors::ServiceError::not_found("Product").into()),
    }
}

#[utoipa::path(
    post, path = "/products", tag = "products",
    request_body = crate::openapi::ProductDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ProductDoc),
        (status = 400, description = "Product with this ID already exists"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<Product>) -> Result<Json<Product>, JsonApiError> {
    info!(id = %input.id, category = %input.category, images = input.images.len(), "product_create_request");
    let created = state.store.create_product(input).await?;
    info!(id = %created.id, "created product");
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/products/{id}", tag = "products",
    params(("id" = String, Path, description = "Product ID; must equal the body id")),
    request_body = crate::openapi::ProductDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ProductDoc),
        (status = 400, description = "Product ID mismatch"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(State(state): State<AppState>, Path(id): Path<String>, Json(input): Json<Product>) -> Result<Json<Product>, JsonApiError> {
    let updated = state.store.update_product(&id, input).await?;
    info!(id = %updated.id, archived = updated.deleted_at.is_some(), "updated product");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/products/{id}", tag = "products",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageResponse),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Message>, JsonApiError> {
    state.store.delete_product(&id).await?;
    info!(id = %id, "deleted product");
    Ok(Json(Message::new("Product deleted successfully")))
}
