/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use clap::ValueEnum;
use sea_orm::sea_query::{Alias, Expr, Order, Query, SimpleExpr};
use sea_orm::{ConnectionTrait, DatabaseConnection};

use super::error::CoreError;
use super::permission::{require_permission, Action};
use super::types::Session;

/// The seven record kinds the store manages. Table and column names only
/// ever originate here, so no caller-supplied identifier can reach the
/// query text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Resource {
    Employees,
    Production,
    Components,
    Sales,
    Models,
    Supplies,
    #[value(name = "car_types")]
    CarTypes,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Integer,
    Decimal,
    Date,
}

impl FieldType {
    fn sql_type(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Integer => "integer",
            FieldType::Decimal => "numeric",
            FieldType::Date => "date",
        }
    }
}

/// One record, every column rendered to text, aligned with
/// `Resource::header()`.
pub type Row = Vec<Option<String>>;

impl Resource {
    pub const ALL: [Resource; 7] = [
        Resource::Employees,
        Resource::Production,
        Resource::Components,
        Resource::Sales,
        Resource::Models,
        Resource::Supplies,
        Resource::CarTypes,
    ];

    pub fn table(self) -> &'static str {
        match self {
            Resource::Employees => "employees",
            Resource::Production => "production",
            Resource::Components => "components",
            Resource::Sales => "sales",
            Resource::Models => "models",
            Resource::Supplies => "supplies",
            Resource::CarTypes => "car_types",
        }
    }

    /// Data columns in insert/update order with their backend types.
    /// `id` is backend-assigned and not part of this list.
    pub fn fields(self) -> &'static [(&'static str, FieldType)] {
        match self {
            Resource::Employees => &[
                ("name", FieldType::Text),
                ("position", FieldType::Text),
                ("department", FieldType::Text),
                ("hire_date", FieldType::Date),
                ("salary", FieldType::Decimal),
            ],
            Resource::Production => &[
                ("model_id", FieldType::Integer),
                ("employee_id", FieldType::Integer),
                ("production_date", FieldType::Date),
                ("quantity", FieldType::Integer),
                ("status", FieldType::Text),
            ],
            Resource::Components => &[
                ("name", FieldType::Text),
                ("type", FieldType::Text),
                ("supplier", FieldType::Text),
                ("price", FieldType::Decimal),
                ("quantity_in_stock", FieldType::Integer),
            ],
            Resource::Sales => &[
                ("model_id", FieldType::Integer),
                ("sale_date", FieldType::Date),
                ("quantity", FieldType::Integer),
                ("price", FieldType::Decimal),
                ("customer", FieldType::Text),
            ],
            Resource::Models => &[
                ("name", FieldType::Text),
                ("car_type_id", FieldType::Integer),
                ("engine_power", FieldType::Integer),
                ("price", FieldType::Decimal),
                ("production_year", FieldType::Integer),
            ],
            Resource::Supplies => &[
                ("component_id", FieldType::Integer),
                ("supplier", FieldType::Text),
                ("supply_date", FieldType::Date),
                ("quantity", FieldType::Integer),
                ("price", FieldType::Decimal),
            ],
            Resource::CarTypes => &[
                ("type_name", FieldType::Text),
                ("description", FieldType::Text),
                ("category", FieldType::Text),
            ],
        }
    }

    /// Display columns, `id` first.
    pub fn header(self) -> Vec<&'static str> {
        let mut columns = vec!["id"];
        columns.extend(self.fields().iter().map(|(name, _)| *name));
        columns
    }

    /// The allow-list gate for externally supplied resource names.
    pub fn from_name(name: &str) -> Option<Resource> {
        Resource::ALL.into_iter().find(|r| r.table() == name)
    }

    /// Coarse permission gating the resource's top-level menu section.
    pub fn menu_permission(self) -> &'static str {
        match self {
            Resource::Employees => "manage_employees",
            Resource::Production => "view_production",
            Resource::Components => "manage_components",
            Resource::Sales => "view_sales",
            Resource::Models => "view_models",
            Resource::Supplies => "manage_supplies",
            Resource::CarTypes => "manage_car_types",
        }
    }
}

fn check_arity(resource: Resource, values: &[String]) -> Result<(), CoreError> {
    let expected = resource.fields().len();
    if values.len() != expected {
        return Err(CoreError::InvalidInput(format!(
            "{} takes {} values, got {}",
            resource.table(),
            expected,
            values.len()
        )));
    }
    Ok(())
}

// Values arrive as text and are cast to the column's declared type
// inside the statement, so the backend's typing accepts or rejects them.
fn cast_value(value: &str, field_type: FieldType) -> SimpleExpr {
    Expr::val(value).cast_as(Alias::new(field_type.sql_type()))
}

/// All rows of the resource, every column rendered to text, ordered by
/// id. Each call re-queries; the result is a snapshot, not a cursor.
pub async fn list(
    db: &DatabaseConnection,
    session: &Session,
    resource: Resource,
) -> Result<Vec<Row>, CoreError> {
    require_permission(db, &session.role, Action::View.permission_name(resource)).await?;

    let header = resource.header();
    let mut query = Query::select();
    query.from(Alias::new(resource.table()));
    for column in &header {
        query.expr_as(
            Expr::col(Alias::new(*column)).cast_as(Alias::new("text")),
            Alias::new(*column),
        );
    }
    query.order_by(Alias::new("id"), Order::Asc);

    let backend = db.get_database_backend();
    let results = db
        .query_all(backend.build(&query))
        .await
        .map_err(CoreError::from_query)?;

    let mut rows = Vec::with_capacity(results.len());
    for result in results {
        let mut row = Vec::with_capacity(header.len());
        for column in &header {
            row.push(
                result
                    .try_get::<Option<String>>("", column)
                    .map_err(CoreError::from_query)?,
            );
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Insert one row; values correspond positionally to
/// `resource.fields()`, the id is backend-assigned.
pub async fn insert(
    db: &DatabaseConnection,
    session: &Session,
    resource: Resource,
    values: &[String],
) -> Result<(), CoreError> {
    require_permission(db, &session.role, Action::Add.permission_name(resource)).await?;
    check_arity(resource, values)?;

    let mut query = Query::insert();
    query
        .into_table(Alias::new(resource.table()))
        .columns(resource.fields().iter().map(|(name, _)| Alias::new(*name)));
    query
        .values(
            resource
                .fields()
                .iter()
                .zip(values)
                .map(|((_, field_type), value)| cast_value(value, *field_type)),
        )
        .map_err(|err| CoreError::InvalidInput(err.to_string()))?;

    let backend = db.get_database_backend();
    db.execute(backend.build(&query))
        .await
        .map_err(CoreError::from_exec)?;

    Ok(())
}

/// Set every data column of the row matching `id`. Returns the number of
/// affected rows; a missing id affects zero rows and is not an error.
pub async fn update(
    db: &DatabaseConnection,
    session: &Session,
    resource: Resource,
    values: &[String],
    id: i64,
) -> Result<u64, CoreError> {
    require_permission(db, &session.role, Action::Edit.permission_name(resource)).await?;
    check_arity(resource, values)?;

    let mut query = Query::update();
    query.table(Alias::new(resource.table()));
    for ((name, field_type), value) in resource.fields().iter().zip(values) {
        query.value(Alias::new(*name), cast_value(value, *field_type));
    }
    query.and_where(Expr::col(Alias::new("id")).eq(id));

    let backend = db.get_database_backend();
    let result = db
        .execute(backend.build(&query))
        .await
        .map_err(CoreError::from_exec)?;

    Ok(result.rows_affected())
}

/// Delete the row matching `id`. Returns the number of affected rows; a
/// missing id affects zero rows and is not an error.
pub async fn delete(
    db: &DatabaseConnection,
    session: &Session,
    resource: Resource,
    id: i64,
) -> Result<u64, CoreError> {
    require_permission(db, &session.role, Action::Delete.permission_name(resource)).await?;

    let mut query = Query::delete();
    query
        .from_table(Alias::new(resource.table()))
        .and_where(Expr::col(Alias::new("id")).eq(id));

    let backend = db.get_database_backend();
    let result = db
        .execute(backend.build(&query))
        .await
        .map_err(CoreError::from_exec)?;

    Ok(result.rows_affected())
}
