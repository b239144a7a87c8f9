//! Conversion between the persisted record and the caller-facing view.

use super::manufacturer::{Manufacturer, ManufacturerDto};

/// Builds a record from a representation. The result is never flagged as deleted.
pub fn to_entity(dto: &ManufacturerDto) -> Manufacturer {
    Manufacturer {
        id: dto.id,
        name: dto.name.clone(),
        description: dto.description.clone(),
        phone_number: dto.phone_number.clone(),
        deleted: false,
    }
}

pub fn to_dto(manufacturer: &Manufacturer) -> ManufacturerDto {
    ManufacturerDto {
        id: manufacturer.id,
        name: manufacturer.name.clone(),
        description: manufacturer.description.clone(),
        phone_number: manufacturer.phone_number.clone(),
    }
}

impl From<&Manufacturer> for ManufacturerDto {
    fn from(manufacturer: &Manufacturer) -> Self {
        to_dto(manufacturer)
    }
}
