use chrono::Utc;
use tracing::{debug, info, warn};

use shared_models::{
    Appointment, AppointmentPatch, AppointmentStatus, CreateAppointmentRequest, Period,
};
use shared_storage::{keys, Store};

use crate::models::{AppointmentError, AppointmentFilters, AppointmentStats, ExistingCheck};

pub struct AppointmentService {
    store: Store,
}

impl AppointmentService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    fn load(&self) -> Vec<Appointment> {
        self.store.get_document(keys::APPOINTMENTS, Vec::new())
    }

    fn save(&self, appointments: &[Appointment]) -> Result<(), AppointmentError> {
        self.store.set_document(keys::APPOINTMENTS, &appointments)?;
        Ok(())
    }

    /// List appointments, optionally filtered by status and/or date, newest
    /// created first.
    pub fn list_appointments(&self, filters: &AppointmentFilters) -> Vec<Appointment> {
        let mut appointments = self.load();
        if let Some(status) = filters.status {
            appointments.retain(|apt| apt.status == status);
        }
        if let Some(date) = &filters.date {
            appointments.retain(|apt| &apt.date == date);
        }
        appointments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        appointments
    }

    pub fn get_appointment(&self, id: i64) -> Option<Appointment> {
        self.load().into_iter().find(|apt| apt.id == id)
    }

    /// Create an appointment. Rejects a duplicate of an existing
    /// non-cancelled booking with the same phone, date and time; cancelled
    /// appointments do not block rebooking.
    pub fn create_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let mut appointments = self.load();

        if let Some(existing) = appointments.iter().find(|apt| {
            apt.phone == request.phone
                && apt.date == request.date
                && apt.time == request.time
                && apt.status != AppointmentStatus::Cancelled
        }) {
            warn!(
                "duplicate booking attempt for {} on {} {} (existing id {})",
                request.phone, request.date, request.time, existing.id
            );
            return Err(AppointmentError::DuplicateBooking {
                existing_appointment_id: existing.id,
            });
        }

        let id = self.store.next_id(keys::NEXT_APPOINTMENT_ID)?;
        let now = Utc::now();
        let period = request
            .period
            .unwrap_or_else(|| Period::from_time(&request.time));
        let appointment = Appointment {
            id,
            name: request.name,
            phone: request.phone,
            email: request.email,
            service: request.service,
            date: request.date.clone(),
            time: request.time.clone(),
            period,
            date_time: format!("{} {} {}", request.date, request.time, period),
            message: request.message,
            status: request.status.unwrap_or(AppointmentStatus::Pending),
            notes: request.notes,
            created_at: now,
            updated_at: now,
        };
        appointments.push(appointment.clone());
        self.save(&appointments)?;
        info!("appointment {} created for {}", id, appointment.date);
        Ok(appointment)
    }

    /// Look up an existing non-cancelled booking for a phone and date,
    /// optionally narrowed to a specific time. Backs the debounced
    /// "you may already have a booking" hint while the patient types.
    pub fn check_appointment(&self, phone: &str, date: &str, time: Option<&str>) -> ExistingCheck {
        let existing = self.load().into_iter().find(|apt| {
            apt.phone == phone
                && apt.date == date
                && time.map_or(true, |time| apt.time == time)
                && apt.status != AppointmentStatus::Cancelled
        });
        ExistingCheck {
            has_existing: existing.is_some(),
            appointment: existing,
        }
    }

    /// Merge a patch into the appointment with this id, refreshing
    /// `updated_at`; `None` when absent. Admin edits are trusted: no
    /// duplicate guard here.
    pub fn update_appointment(
        &self,
        id: i64,
        patch: AppointmentPatch,
    ) -> Result<Option<Appointment>, AppointmentError> {
        let mut appointments = self.load();
        let Some(appointment) = appointments.iter_mut().find(|apt| apt.id == id) else {
            return Ok(None);
        };
        appointment.apply(patch);
        appointment.updated_at = Utc::now();
        let updated = appointment.clone();
        self.save(&appointments)?;
        debug!("appointment {} updated", id);
        Ok(Some(updated))
    }

    /// Remove the appointment with this id; `false` when absent.
    pub fn delete_appointment(&self, id: i64) -> Result<bool, AppointmentError> {
        let mut appointments = self.load();
        let before = appointments.len();
        appointments.retain(|apt| apt.id != id);
        if appointments.len() == before {
            return Ok(false);
        }
        self.save(&appointments)?;
        debug!("appointment {} deleted", id);
        Ok(true)
    }

    /// Status counts over the whole collection, ignoring any list filters.
    pub fn stats(&self) -> AppointmentStats {
        let appointments = self.load();
        let count = |status: AppointmentStatus| {
            appointments.iter().filter(|apt| apt.status == status).count()
        };
        AppointmentStats {
            total: appointments.len(),
            pending: count(AppointmentStatus::Pending),
            confirmed: count(AppointmentStatus::Confirmed),
            cancelled: count(AppointmentStatus::Cancelled),
            completed: count(AppointmentStatus::Completed),
        }
    }
}
