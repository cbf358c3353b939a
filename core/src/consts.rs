/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const ADMIN_ROLE_NAME: &str = "Administrator";

/// Every permission name the system knows. The first 28 gate the four
/// record actions per resource; the manage_* tail gates top-level menu
/// sections (production, sales and models reuse their view_* names for
/// menu gating).
pub const PERMISSION_NAMES: [&str; 32] = [
    "view_employees",
    "add_employees",
    "edit_employees",
    "delete_employees",
    "view_production",
    "add_production",
    "edit_production",
    "delete_production",
    "view_components",
    "add_components",
    "edit_components",
    "delete_components",
    "view_sales",
    "add_sales",
    "edit_sales",
    "delete_sales",
    "view_models",
    "add_models",
    "edit_models",
    "delete_models",
    "view_supplies",
    "add_supplies",
    "edit_supplies",
    "delete_supplies",
    "view_car_types",
    "add_car_types",
    "edit_car_types",
    "delete_car_types",
    "manage_employees",
    "manage_components",
    "manage_supplies",
    "manage_car_types",
];
