use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::{Appointment, AppointmentStatus, ValidationError};
use shared_storage::StorageError;

#[derive(Debug, Error)]
pub enum AppointmentError {
    /// Same phone + date + time as an existing non-cancelled appointment.
    /// Carries the colliding id so the UI can offer an "edit existing"
    /// affordance instead of a generic failure.
    #[error(
        "You already have an appointment booked for this date and time. \
         Please choose a different time or contact us to modify your existing appointment."
    )]
    DuplicateBooking { existing_appointment_id: i64 },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentFilters {
    pub status: Option<AppointmentStatus>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AppointmentStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub cancelled: usize,
    pub completed: usize,
}

/// Result of the pre-submit duplicate lookup (debounced in the UI).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingCheck {
    pub has_existing: bool,
    pub appointment: Option<Appointment>,
}
