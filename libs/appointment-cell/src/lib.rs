pub mod models;
pub mod services;

pub use models::{AppointmentError, AppointmentFilters, AppointmentStats, ExistingCheck};
pub use services::availability::{AvailabilityService, TimeSlot, TIME_SLOTS};
pub use services::booking::AppointmentService;
