/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use entity::role_permission;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QuerySelect, RelationTrait,
};

use super::error::CoreError;
use super::store::Resource;
use super::types::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    View,
    Add,
    Edit,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::View, Action::Add, Action::Edit, Action::Delete];

    /// The permission name gating this action on this resource. Fixed
    /// here rather than assembled from strings at call time.
    pub fn permission_name(self, resource: Resource) -> &'static str {
        match (self, resource) {
            (Action::View, Resource::Employees) => "view_employees",
            (Action::Add, Resource::Employees) => "add_employees",
            (Action::Edit, Resource::Employees) => "edit_employees",
            (Action::Delete, Resource::Employees) => "delete_employees",
            (Action::View, Resource::Production) => "view_production",
            (Action::Add, Resource::Production) => "add_production",
            (Action::Edit, Resource::Production) => "edit_production",
            (Action::Delete, Resource::Production) => "delete_production",
            (Action::View, Resource::Components) => "view_components",
            (Action::Add, Resource::Components) => "add_components",
            (Action::Edit, Resource::Components) => "edit_components",
            (Action::Delete, Resource::Components) => "delete_components",
            (Action::View, Resource::Sales) => "view_sales",
            (Action::Add, Resource::Sales) => "add_sales",
            (Action::Edit, Resource::Sales) => "edit_sales",
            (Action::Delete, Resource::Sales) => "delete_sales",
            (Action::View, Resource::Models) => "view_models",
            (Action::Add, Resource::Models) => "add_models",
            (Action::Edit, Resource::Models) => "edit_models",
            (Action::Delete, Resource::Models) => "delete_models",
            (Action::View, Resource::Supplies) => "view_supplies",
            (Action::Add, Resource::Supplies) => "add_supplies",
            (Action::Edit, Resource::Supplies) => "edit_supplies",
            (Action::Delete, Resource::Supplies) => "delete_supplies",
            (Action::View, Resource::CarTypes) => "view_car_types",
            (Action::Add, Resource::CarTypes) => "add_car_types",
            (Action::Edit, Resource::CarTypes) => "edit_car_types",
            (Action::Delete, Resource::CarTypes) => "delete_car_types",
        }
    }
}

/// True iff the role currently holds the permission. Every call goes to
/// the backend; a grant revoked between two calls is gone on the second.
/// When the backend cannot answer, access is denied.
pub async fn has_permission(db: &DatabaseConnection, role: &str, permission: &str) -> bool {
    match count_grants(db, role, permission).await {
        Ok(count) => count > 0,
        Err(err) => {
            tracing::warn!(
                "Permission check for '{}' failed, denying: {}",
                permission,
                err
            );
            false
        }
    }
}

async fn count_grants(
    db: &DatabaseConnection,
    role: &str,
    permission: &str,
) -> Result<u64, DbErr> {
    ERolePermission::find()
        .join(JoinType::InnerJoin, role_permission::Relation::Role.def())
        .join(
            JoinType::InnerJoin,
            role_permission::Relation::Permission.def(),
        )
        .filter(CRole::RoleName.eq(role))
        .filter(CPermission::PermissionName.eq(permission))
        .count(db)
        .await
}

pub async fn require_permission(
    db: &DatabaseConnection,
    role: &str,
    permission: &str,
) -> Result<(), CoreError> {
    if has_permission(db, role, permission).await {
        Ok(())
    } else {
        Err(CoreError::PermissionDenied(permission.to_string()))
    }
}
