//! Create `settings` table.
//! Holds at most one row, keyed `app_settings`; list and map fields are JSON text.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Settings::Table)
                    .if_not_exists()
                    .col(string(Settings::Id).primary_key())
                    .col(text(Settings::GoldRates))
                    .col(double(Settings::SilverRate))
                    .col(text(Settings::HeroImage))
                    .col(text(Settings::Categories))
                    .col(text(Settings::Purities))
                    .col(text(Settings::ShowcaseCategories))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Settings::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Settings {
    Table,
    Id,
    GoldRates,
    SilverRate,
    HeroImage,
    Categories,
    Purities,
    ShowcaseCategories,
}
