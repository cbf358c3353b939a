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
                    .table(Production::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Production::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Production::ModelId).integer().not_null())
                    .col(ColumnDef::new(Production::EmployeeId).integer().not_null())
                    .col(ColumnDef::new(Production::ProductionDate).date().not_null())
                    .col(ColumnDef::new(Production::Quantity).integer().not_null())
                    .col(ColumnDef::new(Production::Status).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-production-model")
                            .from(Production::Table, Production::ModelId)
                            .to(Models::Table, Models::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-production-employee")
                            .from(Production::Table, Production::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Production::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Production {
    Table,
    Id,
    ModelId,
    EmployeeId,
    ProductionDate,
    Quantity,
    Status,
}

#[derive(DeriveIden)]
enum Models {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
}
