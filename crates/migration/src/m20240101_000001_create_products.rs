//! Create `products` table.
//!
//! `images` holds a JSON array of URLs as text. Column names `makingCharges`
//! and `deletedAt` match databases created before this migration existed.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(string(Products::Id).primary_key())
                    .col(string(Products::Name))
                    .col(string_null(Products::Sku))
                    .col(string(Products::Category))
                    .col(text_null(Products::Description))
                    .col(text_null(Products::Images))
                    .col(string_null(Products::Video))
                    .col(double(Products::Price))
                    .col(double_null(Products::Weight))
                    .col(string_null(Products::Purity))
                    .col(integer_null(Products::Stock))
                    .col(double_null(Products::MakingCharges))
                    .col(string_null(Products::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Products::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Sku,
    Category,
    Description,
    Images,
    Video,
    Price,
    Weight,
    Purity,
    Stock,
    #[sea_orm(iden = "makingCharges")]
    MakingCharges,
    #[sea_orm(iden = "deletedAt")]
    DeletedAt,
}
