pub mod manufacturer_service;
