use crate::domain::errors::DomainError;
use crate::domain::manufacturer::{
    Manufacturer, ManufacturerDto, ManufacturerFilter, ManufacturerId, Page, PageRequest,
};
use crate::domain::mapper::{to_dto, to_entity};
use crate::domain::ports::ManufacturerRepository;

/// Business rules for the manufacturer catalog.
///
/// Holds no state besides the repository. Existence checks and the following
/// `save` are separate store calls, so two concurrent writers can both pass a
/// uniqueness check; the store's own constraints have the final word.
pub struct ManufacturerService<R> {
    repo: R,
}

impl<R: ManufacturerRepository> ManufacturerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn find_by_id(&self, id: ManufacturerId) -> Result<ManufacturerDto, DomainError> {
        log::debug!("Looking up manufacturer {}", id);
        self.repo
            .find_by_id(id)?
            .map(|m| to_dto(&m))
            .ok_or(DomainError::NotFound(id))
    }

    pub fn find_all_active(
        &self,
        page: i64,
        size: i64,
    ) -> Result<Page<ManufacturerDto>, DomainError> {
        log::debug!("Listing active manufacturers, page {} size {}", page, size);
        let records = self
            .repo
            .find_all(ManufacturerFilter::is_not_deleted(), PageRequest::of(page, size))?;
        Ok(records.map(|m| to_dto(&m)))
    }

    /// Name is checked before phone number; the first conflict wins.
    pub fn create(&self, dto: ManufacturerDto) -> Result<ManufacturerDto, DomainError> {
        if self.repo.exists_by_name(&dto.name)? {
            log::warn!("Rejecting create: name '{}' is taken", dto.name);
            return Err(DomainError::ExistsByName(dto.name));
        }
        if self.repo.exists_by_phone_number(&dto.phone_number)? {
            log::warn!("Rejecting create: phone '{}' is taken", dto.phone_number);
            return Err(DomainError::ExistsByPhone(dto.phone_number));
        }

        let record = Manufacturer {
            id: None,
            ..to_entity(&dto)
        };
        let saved = self.repo.save(record)?;
        log::info!("Created manufacturer {:?} '{}'", saved.id, saved.name);
        Ok(to_dto(&saved))
    }

    /// Replaces the business fields of `id`. A name or phone number already
    /// held by `id` itself is not a conflict. The deleted flag is kept.
    pub fn update(
        &self,
        id: ManufacturerId,
        dto: ManufacturerDto,
    ) -> Result<ManufacturerDto, DomainError> {
        let current = self
            .repo
            .find_by_id(id)?
            .ok_or(DomainError::NotFoundWhileUpdating(id))?;

        if let Some(holder) = self.repo.find_by_name(&dto.name)? {
            if holder.id != Some(id) {
                log::warn!(
                    "Rejecting update of {}: name '{}' belongs to {:?}",
                    id,
                    dto.name,
                    holder.id
                );
                return Err(DomainError::ExistsByName(dto.name));
            }
        }
        if let Some(holder) = self.repo.find_by_phone_number(&dto.phone_number)? {
            if holder.id != Some(id) {
                log::warn!(
                    "Rejecting update of {}: phone '{}' belongs to {:?}",
                    id,
                    dto.phone_number,
                    holder.id
                );
                return Err(DomainError::ExistsByPhone(dto.phone_number));
            }
        }

        let replacement = Manufacturer {
            id: Some(id),
            deleted: current.deleted,
            ..to_entity(&dto)
        };
        let saved = self.repo.save(replacement)?;
        log::info!("Updated manufacturer {}", id);
        Ok(to_dto(&saved))
    }

    /// Soft delete: the record stays in the store with `deleted` set.
    pub fn delete_by_id(&self, id: ManufacturerId) -> Result<(), DomainError> {
        let current = self.repo.find_by_id(id)?.ok_or(DomainError::NotFound(id))?;

        self.repo.save(Manufacturer {
            deleted: true,
            ..current
        })?;
        log::info!("Soft-deleted manufacturer {}", id);
        Ok(())
    }
}
