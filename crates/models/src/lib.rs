pub mod errors;
pub mod db;
pub mod codec;
pub mod product;
pub mod settings;

pub use product::Product;
pub use settings::{Settings, SettingsBase, ShowcaseCategory, SETTINGS_ID};

#[cfg(test)]
mod tests;
