use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::errors::DomainError;
use crate::domain::manufacturer::{
    Manufacturer, ManufacturerFilter, ManufacturerId, Page, PageRequest,
};
use crate::domain::ports::ManufacturerRepository;

#[derive(Debug, Default)]
struct Store {
    records: BTreeMap<ManufacturerId, Manufacturer>,
    last_id: ManufacturerId,
}

/// Process-local store used when no database is configured, and in tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryManufacturerRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryManufacturerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Store>, DomainError> {
        self.store
            .read()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Store>, DomainError> {
        self.store
            .write()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    fn find_first<P>(&self, predicate: P) -> Result<Option<Manufacturer>, DomainError>
    where
        P: Fn(&Manufacturer) -> bool,
    {
        Ok(self.read()?.records.values().find(|m| predicate(m)).cloned())
    }
}

impl ManufacturerRepository for InMemoryManufacturerRepository {
    fn find_by_id(&self, id: ManufacturerId) -> Result<Option<Manufacturer>, DomainError> {
        Ok(self.read()?.records.get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Manufacturer>, DomainError> {
        self.find_first(|m| m.name == name)
    }

    fn find_by_phone_number(
        &self,
        phone_number: &str,
    ) -> Result<Option<Manufacturer>, DomainError> {
        self.find_first(|m| m.phone_number == phone_number)
    }

    fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_name(name)?.is_some())
    }

    fn exists_by_phone_number(&self, phone_number: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_phone_number(phone_number)?.is_some())
    }

    fn save(&self, manufacturer: Manufacturer) -> Result<Manufacturer, DomainError> {
        let mut store = self.write()?;

        let id = match manufacturer.id {
            Some(id) => {
                store.last_id = store.last_id.max(id);
                id
            }
            None => {
                store.last_id += 1;
                store.last_id
            }
        };
        let saved = Manufacturer {
            id: Some(id),
            ..manufacturer
        };
        store.records.insert(id, saved.clone());

        log::debug!("Stored manufacturer {} in memory", id);
        Ok(saved)
    }

    fn find_all(
        &self,
        filter: ManufacturerFilter,
        page: PageRequest,
    ) -> Result<Page<Manufacturer>, DomainError> {
        let store = self.read()?;

        let matching: Vec<&Manufacturer> = store
            .records
            .values()
            .filter(|m| filter.matches(m))
            .collect();
        let total = matching.len() as i64;

        let content = matching
            .into_iter()
            .skip(page.offset().max(0) as usize)
            .take(page.size.max(0) as usize)
            .cloned()
            .collect();

        Ok(Page::new(content, page, total))
    }
}
