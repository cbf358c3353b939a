/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sales::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sales::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sales::ModelId).integer().not_null())
                    .col(ColumnDef::new(Sales::SaleDate).date().not_null())
                    .col(ColumnDef::new(Sales::Quantity).integer().not_null())
                    .col(ColumnDef::new(Sales::Price).decimal_len(12, 2).not_null())
                    .col(ColumnDef::new(Sales::Customer).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sales-model")
                            .from(Sales::Table, Sales::ModelId)
                            .to(Models::Table, Models::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sales::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Sales {
    Table,
    Id,
    ModelId,
    SaleDate,
    Quantity,
    Price,
    Customer,
}

#[derive(DeriveIden)]
enum Models {
    Table,
    Id,
}
