use std::collections::BTreeMap;

use sea_orm::{entity::prelude::*, Set};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use crate::{codec, errors};

/// Primary key of the only row the `settings` table ever holds.
pub const SETTINGS_ID: &str = "app_settings";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_type = "Text")]
    pub gold_rates: String,
    pub silver_rate: f64,
    #[sea_orm(column_type = "Text")]
    pub hero_image: String,
    #[sea_orm(column_type = "Text")]
    pub categories: String,
    #[sea_orm(column_type = "Text")]
    pub purities: String,
    #[sea_orm(column_type = "Text")]
    pub showcase_categories: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Purity label (`"22K"`, `"24K"`, ...) to rate per gram.
pub type GoldRates = BTreeMap<String, f64>;

/// Whole rates go out as JSON integers (`6650`, not `6650.0`).
fn serialize_rate<S: Serializer>(rate: &f64, s: S) -> Result<S::Ok, S::Error> {
    if rate.fract() == 0.0 && rate.abs() < 9.0e15 {
        s.serialize_i64(*rate as i64)
    } else {
        s.serialize_f64(*rate)
    }
}

struct Rate(f64);

impl Serialize for Rate {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_rate(&self.0, s)
    }
}

fn serialize_rates<S: Serializer>(rates: &GoldRates, s: S) -> Result<S::Ok, S::Error> {
    let mut map = s.serialize_map(Some(rates.len()))?;
    for (purity, rate) in rates {
        map.serialize_entry(purity, &Rate(*rate))?;
    }
    map.end()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseCategory {
    pub name: String,
    pub image: String,
}

impl ShowcaseCategory {
    fn new(name: &str, image: &str) -> Self {
        Self { name: name.into(), image: image.into() }
    }
}

/// Settings payload without the fixed key; the body of `PUT /settings`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettingsBase {
    #[serde(serialize_with = "serialize_rates")]
    pub gold_rates: GoldRates,
    #[serde(serialize_with = "serialize_rate")]
    pub silver_rate: f64,
    pub hero_image: String,
    pub categories: Vec<String>,
    pub purities: Vec<String>,
    pub showcase_categories: Vec<ShowcaseCategory>,
}

impl Default for SettingsBase {
    /// Served until the first write; never persisted by a read.
    fn default() -> Self {
        Self {
            gold_rates: GoldRates::from([("22K".to_string(), 6650.0), ("24K".to_string(), 7255.0)]),
            silver_rate: 95.0,
            hero_image: "https://picsum.photos/id/13/1920/1080".into(),
            categories: vec!["Gold".into(), "Silver".into(), "Covering".into()],
            purities: vec!["24K".into(), "22K".into(), "92.5 Sterling".into()],
            showcase_categories: vec![
                ShowcaseCategory::new("Gold", "https://picsum.photos/id/1071/500/500"),
                ShowcaseCategory::new("Silver", "https://picsum.photos/id/435/500/500"),
                ShowcaseCategory::new("Covering", "https://picsum.photos/id/659/500/500"),
            ],
        }
    }
}

impl SettingsBase {
    pub fn to_active_model(&self) -> Result<ActiveModel, errors::ModelError> {
        Ok(ActiveModel {
            id: Set(SETTINGS_ID.to_string()),
            gold_rates: Set(codec::encode(&self.gold_rates)?),
            silver_rate: Set(self.silver_rate),
            hero_image: Set(self.hero_image.clone()),
            categories: Set(codec::encode(&self.categories)?),
            purities: Set(codec::encode(&self.purities)?),
            showcase_categories: Set(codec::encode(&self.showcase_categories)?),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub id: String,
    #[serde(flatten)]
    pub base: SettingsBase,
}

impl Settings {
    pub fn from_base(base: SettingsBase) -> Self {
        Self { id: SETTINGS_ID.to_string(), base }
    }

    /// Resolve an optional stored row, falling back to the built-in defaults.
    pub fn from_row(row: Option<Model>) -> Result<Self, errors::ModelError> {
        match row {
            Some(m) => Self::try_from(m),
            None => Ok(Self::default()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_base(SettingsBase::default())
    }
}

impl TryFrom<Model> for Settings {
    type Error = errors::ModelError;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: m.id,
            base: SettingsBase {
                gold_rates: codec::decode(Some(&m.gold_rates))?,
                silver_rate: m.silver_rate,
                hero_image: m.hero_image,
                categories: codec::decode(Some(&m.categories))?,
                purities: codec::decode(Some(&m.purities))?,
                showcase_categories: codec::decode(Some(&m.showcase_categories))?,
            },
        })
    }
}
