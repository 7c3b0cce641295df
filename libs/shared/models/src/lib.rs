pub mod appointment;
pub mod auth;
pub mod backup;
pub mod doctor;
pub mod validation;

pub use appointment::{
    Appointment, AppointmentPatch, AppointmentStatus, CreateAppointmentRequest, Period,
};
pub use auth::{AdminCredentials, Session, SessionUser};
pub use backup::{BackupDocument, RestoreReport, BACKUP_VERSION};
pub use doctor::{CreateDoctorRequest, Doctor, DoctorPatch, DoctorType};
pub use validation::ValidationError;
