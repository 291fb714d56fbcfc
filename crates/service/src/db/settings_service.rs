use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait};
use tracing::{info, instrument};

use models::settings::{self, Entity as SettingsEntity, Settings, SettingsBase, SETTINGS_ID};
use crate::errors::{db_err, ServiceError};

async fn find_row(db: &DatabaseConnection) -> Result<Option<settings::Model>, ServiceError> {
    SettingsEntity::find_by_id(SETTINGS_ID.to_string()).one(db).await.map_err(db_err)
}

/// Stored settings, or the built-in defaults when nothing has been written yet.
/// Never writes.
pub async fn get_settings(db: &DatabaseConnection) -> Result<Settings, ServiceError> {
    let row = find_row(db).await?;
    Ok(Settings::from_row(row)?)
}

/// Insert or replace the singleton row.
///
/// The result is built from `base` itself; a concurrent writer may already have
/// replaced the row by the time this returns.
#[instrument(skip(db, base))]
pub async fn upsert_settings(db: &DatabaseConnection, base: SettingsBase) -> Result<Settings, ServiceError> {
    let am = base.to_active_model()?;
    SettingsEntity::insert(am)
        .on_conflict(
            OnConflict::column(settings::Column::Id)
                .update_columns([
                    settings::Column::GoldRates,
                    settings::Column::SilverRate,
                    settings::Column::HeroImage,
                    settings::Column::Categories,
                    settings::Column::Purities,
                    settings::Column::ShowcaseCategories,
                ])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await
        .map_err(db_err)?;
    info!("settings saved");
    Ok(Settings::from_base(base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::ShowcaseCategory;

    #[tokio::test]
    async fn read_before_write_returns_default_without_persisting() -> Result<(), anyhow::Error> {
        let (_dir, db) = get_db().await?;

        let s = get_settings(&db).await?;
        assert_eq!(s, Settings::default());
        assert_eq!(s.base.gold_rates.get("22K"), Some(&6650.0));
        assert_eq!(s.base.gold_rates.get("24K"), Some(&7255.0));
        assert_eq!(s.base.silver_rate, 95.0);
        assert_eq!(s.base.categories, vec!["Gold", "Silver", "Covering"]);

        assert!(find_row(&db).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn write_then_read_returns_written_values() -> Result<(), anyhow::Error> {
        let (_dir, db) = get_db().await?;

        let mut base = SettingsBase::default();
        base.gold_rates.insert("22K".into(), 6900.0);
        base.silver_rate = 98.25;
        base.hero_image = "https://cdn.example.com/hero.jpg".into();
        base.categories = vec!["Gold".into(), "Silver".into()];
        base.purities = vec!["22K".into()];
        base.showcase_categories = vec![ShowcaseCategory { name: "Gold".into(), image: "https://cdn.example.com/g.jpg".into() }];

        let saved = upsert_settings(&db, base.clone()).await?;
        assert_eq!(saved, Settings::from_base(base.clone()));
        assert_eq!(get_settings(&db).await?, Settings::from_base(base));
        Ok(())
    }

    #[tokio::test]
    async fn second_write_replaces_the_single_row() -> Result<(), anyhow::Error> {
        let (_dir, db) = get_db().await?;

        upsert_settings(&db, SettingsBase::default()).await?;
        let mut next = SettingsBase::default();
        next.silver_rate = 120.0;
        next.categories.clear();
        upsert_settings(&db, next.clone()).await?;

        let rows = SettingsEntity::find().all(&db).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(get_settings(&db).await?.base, next);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_writers_each_get_their_own_values_back() -> Result<(), anyhow::Error> {
        let (_dir, db) = get_db().await?;

        for round in 0..10u32 {
            let mut tasks = Vec::new();
            for writer in 0..4u32 {
                let db = db.clone();
                let rate = f64::from(round * 10 + writer);
                tasks.push(tokio::spawn(async move {
                    let mut base = SettingsBase::default();
                    base.silver_rate = rate;
                    base.hero_image = format!("https://cdn.example.com/hero_{rate}.jpg");
                    let saved = upsert_settings(&db, base.clone()).await?;
                    Ok::<_, ServiceError>((base, saved))
                }));
            }
            for t in tasks {
                let (written, saved) = t.await??;
                assert_eq!(saved, Settings::from_base(written));
            }
        }

        assert_eq!(SettingsEntity::find().all(&db).await?.len(), 1);
        Ok(())
    }
}
