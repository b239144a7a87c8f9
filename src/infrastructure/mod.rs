pub mod manufacturer_repo;
pub mod memory_repo;
pub mod models;
