use chrono::Utc;
use diesel::pg::Pg;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::manufacturer::{
    Manufacturer, ManufacturerFilter, ManufacturerId, Page, PageRequest,
};
use crate::domain::ports::ManufacturerRepository;
use crate::schema::manufacturers;

use super::models::{ManufacturerRow, ManufacturerWriteRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselManufacturerRepository {
    pool: DbPool,
}

impl DieselManufacturerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn find_one<F>(&self, filter: F) -> Result<Option<Manufacturer>, DomainError>
    where
        F: FnOnce(manufacturers::BoxedQuery<'static, Pg>) -> manufacturers::BoxedQuery<'static, Pg>,
    {
        let mut conn = self.pool.get()?;

        let row = filter(manufacturers::table.into_boxed())
            .select(ManufacturerRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Manufacturer::from))
    }
}

fn filtered(filter: ManufacturerFilter) -> manufacturers::BoxedQuery<'static, Pg> {
    let query = manufacturers::table.into_boxed();
    match filter {
        ManufacturerFilter::All => query,
        ManufacturerFilter::NotDeleted => query.filter(manufacturers::deleted.eq(false)),
    }
}

impl ManufacturerRepository for DieselManufacturerRepository {
    fn find_by_id(&self, id: ManufacturerId) -> Result<Option<Manufacturer>, DomainError> {
        self.find_one(|q| q.filter(manufacturers::id.eq(id)))
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Manufacturer>, DomainError> {
        let name = name.to_string();
        self.find_one(move |q| q.filter(manufacturers::name.eq(name)))
    }

    fn find_by_phone_number(
        &self,
        phone_number: &str,
    ) -> Result<Option<Manufacturer>, DomainError> {
        let phone_number = phone_number.to_string();
        self.find_one(move |q| q.filter(manufacturers::phone_number.eq(phone_number)))
    }

    fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;
        let exists = diesel::select(diesel::dsl::exists(
            manufacturers::table.filter(manufacturers::name.eq(name)),
        ))
        .get_result(&mut conn)?;
        Ok(exists)
    }

    fn exists_by_phone_number(&self, phone_number: &str) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;
        let exists = diesel::select(diesel::dsl::exists(
            manufacturers::table.filter(manufacturers::phone_number.eq(phone_number)),
        ))
        .get_result(&mut conn)?;
        Ok(exists)
    }

    fn save(&self, manufacturer: Manufacturer) -> Result<Manufacturer, DomainError> {
        let mut conn = self.pool.get()?;
        let row = ManufacturerWriteRow::from(manufacturer);

        let saved = if row.id.is_none() {
            diesel::insert_into(manufacturers::table)
                .values(&row)
                .returning(ManufacturerRow::as_returning())
                .get_result(&mut conn)?
        } else {
            diesel::insert_into(manufacturers::table)
                .values(&row)
                .on_conflict(manufacturers::id)
                .do_update()
                .set((&row, manufacturers::updated_at.eq(Utc::now())))
                .returning(ManufacturerRow::as_returning())
                .get_result(&mut conn)?
        };

        Ok(saved.into())
    }

    fn find_all(
        &self,
        filter: ManufacturerFilter,
        page: PageRequest,
    ) -> Result<Page<Manufacturer>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let total: i64 = filtered(filter).count().get_result(conn)?;

            let rows = filtered(filter)
                .select(ManufacturerRow::as_select())
                .order(manufacturers::id.asc())
                .limit(page.size)
                .offset(page.offset())
                .load(conn)?;

            Ok(Page::new(
                rows.into_iter().map(Manufacturer::from).collect(),
                page,
                total,
            ))
        })
    }
}
