pub mod catalog;
pub mod migrations;
pub mod models;
pub mod services;

pub use models::DoctorError;
pub use services::DoctorService;
