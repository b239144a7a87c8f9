use super::errors::DomainError;
use super::manufacturer::{Manufacturer, ManufacturerFilter, ManufacturerId, Page, PageRequest};

/// Persistence contract for manufacturer records.
///
/// Name and phone lookups see every record, soft-deleted ones included.
#[cfg_attr(test, mockall::automock)]
pub trait ManufacturerRepository: Send + Sync + 'static {
    fn find_by_id(&self, id: ManufacturerId) -> Result<Option<Manufacturer>, DomainError>;
    fn find_by_name(&self, name: &str) -> Result<Option<Manufacturer>, DomainError>;
    fn find_by_phone_number(&self, phone_number: &str)
        -> Result<Option<Manufacturer>, DomainError>;
    fn exists_by_name(&self, name: &str) -> Result<bool, DomainError>;
    fn exists_by_phone_number(&self, phone_number: &str) -> Result<bool, DomainError>;
    /// Inserts when `id` is `None`, otherwise replaces the record with that id.
    fn save(&self, manufacturer: Manufacturer) -> Result<Manufacturer, DomainError>;
    /// Returns matching records ordered by id.
    fn find_all(
        &self,
        filter: ManufacturerFilter,
        page: PageRequest,
    ) -> Result<Page<Manufacturer>, DomainError>;
}

impl<R: ManufacturerRepository + ?Sized> ManufacturerRepository for Box<R> {
    fn find_by_id(&self, id: ManufacturerId) -> Result<Option<Manufacturer>, DomainError> {
        (**self).find_by_id(id)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Manufacturer>, DomainError> {
        (**self).find_by_name(name)
    }

    fn find_by_phone_number(
        &self,
        phone_number: &str,
    ) -> Result<Option<Manufacturer>, DomainError> {
        (**self).find_by_phone_number(phone_number)
    }

    fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        (**self).exists_by_name(name)
    }

    fn exists_by_phone_number(&self, phone_number: &str) -> Result<bool, DomainError> {
        (**self).exists_by_phone_number(phone_number)
    }

    fn save(&self, manufacturer: Manufacturer) -> Result<Manufacturer, DomainError> {
        (**self).save(manufacturer)
    }

    fn find_all(
        &self,
        filter: ManufacturerFilter,
        page: PageRequest,
    ) -> Result<Page<Manufacturer>, DomainError> {
        (**self).find_all(filter, page)
    }
}
