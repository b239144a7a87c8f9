pub mod errors;
pub mod manufacturer;
pub mod mapper;
pub mod ports;
