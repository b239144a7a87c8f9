use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::manufacturer::Manufacturer;
use crate::schema::manufacturers;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = manufacturers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ManufacturerRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub phone_number: String,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert/replace payload. `id` is omitted from the INSERT when `None` so the
/// sequence assigns one.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = manufacturers)]
pub struct ManufacturerWriteRow {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub phone_number: String,
    pub deleted: bool,
}

impl From<ManufacturerRow> for Manufacturer {
    fn from(row: ManufacturerRow) -> Self {
        Manufacturer {
            id: Some(row.id),
            name: row.name,
            description: row.description,
            phone_number: row.phone_number,
            deleted: row.deleted,
        }
    }
}

impl From<Manufacturer> for ManufacturerWriteRow {
    fn from(m: Manufacturer) -> Self {
        ManufacturerWriteRow {
            id: m.id,
            name: m.name,
            description: m.description,
            phone_number: m.phone_number,
            deleted: m.deleted,
        }
    }
}
