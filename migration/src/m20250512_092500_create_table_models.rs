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
                    .table(Models::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Models::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Models::Name).string().not_null())
                    .col(ColumnDef::new(Models::CarTypeId).integer().not_null())
                    .col(ColumnDef::new(Models::EnginePower).integer().not_null())
                    .col(
                        ColumnDef::new(Models::Price)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Models::ProductionYear).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-models-car_type")
                            .from(Models::Table, Models::CarTypeId)
                            .to(CarTypes::Table, CarTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Models::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Models {
    Table,
    Id,
    Name,
    CarTypeId,
    EnginePower,
    Price,
    ProductionYear,
}

#[derive(DeriveIden)]
enum CarTypes {
    Table,
    Id,
}
