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
                    .table(Components::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Components::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Components::Name).string().not_null())
                    .col(ColumnDef::new(Components::Type).string().not_null())
                    .col(ColumnDef::new(Components::Supplier).string().not_null())
                    .col(
                        ColumnDef::new(Components::Price)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Components::QuantityInStock)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Components::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Components {
    Table,
    Id,
    Name,
    Type,
    Supplier,
    Price,
    QuantityInStock,
}
