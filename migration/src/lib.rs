/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250512_090000_create_table_roles;
mod m20250512_090500_create_table_users;
mod m20250512_091000_create_table_permissions;
mod m20250512_091500_create_table_role_permissions;
mod m20250512_092000_create_table_car_types;
mod m20250512_092500_create_table_models;
mod m20250512_093000_create_table_employees;
mod m20250512_093500_create_table_components;
mod m20250512_094000_create_table_production;
mod m20250512_094500_create_table_sales;
mod m20250512_095000_create_table_supplies;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250512_090000_create_table_roles::Migration),
            Box::new(m20250512_090500_create_table_users::Migration),
            Box::new(m20250512_091000_create_table_permissions::Migration),
            Box::new(m20250512_091500_create_table_role_permissions::Migration),
            Box::new(m20250512_092000_create_table_car_types::Migration),
            Box::new(m20250512_092500_create_table_models::Migration),
            Box::new(m20250512_093000_create_table_employees::Migration),
            Box::new(m20250512_093500_create_table_components::Migration),
            Box::new(m20250512_094000_create_table_production::Migration),
            Box::new(m20250512_094500_create_table_sales::Migration),
            Box::new(m20250512_095000_create_table_supplies::Migration),
        ]
    }
}
