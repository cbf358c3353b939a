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
                    .table(Supplies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Supplies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Supplies::ComponentId).integer().not_null())
                    .col(ColumnDef::new(Supplies::Supplier).string().not_null())
                    .col(ColumnDef::new(Supplies::SupplyDate).date().not_null())
                    .col(ColumnDef::new(Supplies::Quantity).integer().not_null())
                    .col(
                        ColumnDef::new(Supplies::Price)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-supplies-component")
                            .from(Supplies::Table, Supplies::ComponentId)
                            .to(Components::Table, Components::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Supplies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Supplies {
    Table,
    Id,
    ComponentId,
    Supplier,
    SupplyDate,
    Quantity,
    Price,
}

#[derive(DeriveIden)]
enum Components {
    Table,
    Id,
}
