use thiserror::Error;

use super::manufacturer::ManufacturerId;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Manufacturer with id {0} not found")]
    NotFound(ManufacturerId),
    #[error("Manufacturer with id {0} not found while updating")]
    NotFoundWhileUpdating(ManufacturerId),
    #[error("Manufacturer with name '{0}' already exists")]
    ExistsByName(String),
    #[error("Manufacturer with phone number '{0}' already exists")]
    ExistsByPhone(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
