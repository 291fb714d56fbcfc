use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::{codec, errors};

/// Row of the `products` table. `images` is the JSON-encoded URL list.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub sku: Option<String>,
    pub category: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub images: Option<String>,
    pub video: Option<String>,
    pub price: f64,
    pub weight: Option<f64>,
    pub purity: Option<String>,
    pub stock: Option<i32>,
    #[sea_orm(column_name = "makingCharges")]
    pub making_charges: Option<f64>,
    #[sea_orm(column_name = "deletedAt")]
    pub deleted_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A catalog item as exchanged over HTTP.
///
/// `deleted_at` is a soft-delete marker owned by callers; nothing in the store reads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: Option<String>,
    pub category: String,
    pub description: String,
    pub images: Vec<String>,
    pub video: Option<String>,
    pub price: f64,
    pub weight: Option<f64>,
    pub purity: Option<String>,
    pub stock: Option<i32>,
    pub making_charges: Option<f64>,
    pub deleted_at: Option<String>,
}

pub fn validate_price(price: f64) -> Result<(), errors::ModelError> {
    if !price.is_finite() || price < 0.0 {
        return Err(errors::ModelError::Validation("price must be a non-negative number".into()));
    }
    Ok(())
}

impl Product {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_price(self.price)
    }

    /// Every column set, `images` encoded. Used for both insert and full-row update.
    pub fn to_active_model(&self) -> Result<ActiveModel, errors::ModelError> {
        Ok(ActiveModel {
            id: Set(self.id.clone()),
            name: Set(self.name.clone()),
            sku: Set(self.sku.clone()),
            category: Set(self.category.clone()),
            description: Set(Some(self.description.clone())),
            images: Set(Some(codec::encode(&self.images)?)),
            video: Set(self.video.clone()),
            price: Set(self.price),
            weight: Set(self.weight),
            purity: Set(self.purity.clone()),
            stock: Set(self.stock),
            making_charges: Set(self.making_charges),
            deleted_at: Set(self.deleted_at.clone()),
        })
    }
}

impl TryFrom<Model> for Product {
    type Error = errors::ModelError;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let images = codec::decode(m.images.as_deref())?;
        Ok(Self {
            id: m.id,
            name: m.name,
            sku: m.sku,
            category: m.category,
            description: m.description.unwrap_or_default(),
            images,
            video: m.video,
            price: m.price,
            weight: m.weight,
            purity: m.purity,
            stock: m.stock,
            making_charges: m.making_charges,
            deleted_at: m.deleted_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row() -> Model {
        Model {
            id: "g1".into(),
            name: "Antique Gold Necklace".into(),
            sku: None,
            category: "Gold".into(),
            description: None,
            images: None,
            video: None,
            price: 294386.0,
            weight: Some(45.5),
            purity: Some("22K".into()),
            stock: Some(3),
            making_charges: Some(12.0),
            deleted_at: None,
        }
    }

    #[test]
    fn row_without_images_decodes_to_empty_list() {
        let p = Product::try_from(row()).unwrap();
        assert!(p.images.is_empty());
        assert_eq!(p.description, "");
        assert_eq!(p.making_charges, Some(12.0));
    }

    #[test]
    fn corrupt_images_column_is_an_error() {
        let mut m = row();
        m.images = Some("not json".into());
        assert!(matches!(Product::try_from(m), Err(errors::ModelError::Codec(_))));
    }

    #[test]
    fn json_uses_camel_case_and_optional_fields_default() {
        let p: Product = serde_json::from_value(json!({
            "id": "test_prod_1",
            "name": "Test Product",
            "category": "Gold",
            "description": "A test product",
            "images": ["http://example.com/image.jpg"],
            "price": 1000,
            "stock": 10,
            "makingCharges": 8.5
        }))
        .unwrap();
        assert_eq!(p.stock, Some(10));
        assert_eq!(p.making_charges, Some(8.5));
        assert!(p.sku.is_none());
        assert!(p.deleted_at.is_none());

        let out = serde_json::to_value(&p).unwrap();
        assert_eq!(out["makingCharges"], json!(8.5));
        assert_eq!(out["deletedAt"], serde_json::Value::Null);
        assert!(out.get("making_charges").is_none());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let res: Result<Product, _> = serde_json::from_value(json!({
            "id": "x", "name": "n", "category": "Gold", "description": "d", "images": []
        }));
        assert!(res.is_err());
    }

    #[test]
    fn negative_price_fails_validation() {
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(0.0).is_ok());
    }

    #[test]
    fn active_model_encodes_images() {
        let mut p = Product::try_from(row()).unwrap();
        p.images = vec!["a.jpg".into(), "b.jpg".into()];
        let am = p.to_active_model().unwrap();
        assert_eq!(am.images, Set(Some("[\"a.jpg\",\"b.jpg\"]".to_string())));
        assert_eq!(am.description, Set(Some(String::new())));
    }
}
