#![allow(non_snake_case)]

use std::collections::BTreeMap;

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageResponse { pub message: String }

/// Field names follow the JSON body, hence `makingCharges` / `deletedAt`.
#[derive(ToSchema)]
pub struct ProductDoc {
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
    pub makingCharges: Option<f64>,
    pub deletedAt: Option<String>,
}

#[derive(ToSchema)]
pub struct ShowcaseCategoryDoc { pub name: String, pub image: String }

#[derive(ToSchema)]
pub struct SettingsBaseDoc {
    pub gold_rates: BTreeMap<String, f64>,
    pub silver_rate: f64,
    pub hero_image: String,
    pub categories: Vec<String>,
    pub purities: Vec<String>,
    pub showcase_categories: Vec<ShowcaseCategoryDoc>,
}

#[derive(ToSchema)]
pub struct SettingsDoc {
    pub id: String,
    pub gold_rates: BTreeMap<String, f64>,
    pub silver_rate: f64,
    pub hero_image: String,
    pub categories: Vec<String>,
    pub purities: Vec<String>,
    pub showcase_categories: Vec<ShowcaseCategoryDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::create,
        crate::routes::products::update,
        crate::routes::products::delete,
        crate::routes::settings::get,
        crate::routes::settings::update,
    ),
    components(
        schemas(
            HealthResponse,
            MessageResponse,
            ProductDoc,
            ShowcaseCategoryDoc,
            SettingsBaseDoc,
            SettingsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products"),
        (name = "settings")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for p in ["/health", "/products", "/products/{id}", "/settings"] {
            assert!(paths.iter().any(|k| k.as_str() == p), "missing {p}");
        }
    }
}
