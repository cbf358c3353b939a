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
                    .table(CarTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CarTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CarTypes::TypeName).string().not_null())
                    .col(ColumnDef::new(CarTypes::Description).text())
                    .col(ColumnDef::new(CarTypes::Category).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CarTypes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CarTypes {
    Table,
    Id,
    TypeName,
    Description,
    Category,
}
