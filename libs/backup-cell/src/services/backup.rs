//! Full snapshot export and restore, for moving the whole data set between
//! store instances. Restore replaces collections, it never merges.

use chrono::Utc;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use doctor_cell::{DoctorError, DoctorService};
use shared_models::{
    AdminCredentials, Appointment, BackupDocument, Doctor, RestoreReport, BACKUP_VERSION,
};
use shared_storage::{keys, StorageError, Store};

#[derive(Debug, Error)]
pub enum BackupError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Doctor(#[from] DoctorError),
}

pub struct BackupService {
    store: Store,
    doctors: DoctorService,
}

impl BackupService {
    pub fn new(store: Store) -> Self {
        let doctors = DoctorService::new(store.clone());
        Self { store, doctors }
    }

    /// Snapshot everything the store holds. Reading doctors through the
    /// repository means an untouched store exports the seeded defaults
    /// rather than an empty list.
    pub fn export_backup(&self) -> Result<BackupDocument, BackupError> {
        let appointments: Vec<Appointment> = self.store.get_document(keys::APPOINTMENTS, Vec::new());
        let doctors = self.doctors.list_doctors()?;
        Ok(BackupDocument {
            version: BACKUP_VERSION,
            exported_at: Utc::now(),
            appointments,
            doctors,
            next_appointment_id: self.store.get_document(keys::NEXT_APPOINTMENT_ID, 1),
            next_doctor_id: self.store.get_document(keys::NEXT_DOCTOR_ID, 1),
            admin_credentials: self
                .store
                .get_document::<Option<AdminCredentials>>(keys::ADMIN_CREDENTIALS, None),
        })
    }

    /// Restore from the JSON text of a backup file. Appointments are always
    /// replaced; doctors, counters, and the credential override only when
    /// the document carries them. Any parse or shape problem aborts before
    /// the first write.
    pub fn import_backup(&self, text: &str) -> RestoreReport {
        if text.trim().is_empty() {
            return RestoreReport::failure("File is empty", "empty");
        }
        let data: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(err) => {
                warn!("backup restore failed to parse: {}", err);
                return RestoreReport::failure(
                    "Invalid or corrupted backup file. Use a JSON file from a full backup export.",
                    err.to_string(),
                );
            }
        };
        if !data.is_object() {
            return RestoreReport::failure("Invalid backup format", "invalid");
        }

        let appointments: Vec<Appointment> = data
            .get("appointments")
            .filter(|value| value.is_array())
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or_default();
        let doctors: Option<Vec<Doctor>> = data
            .get("doctors")
            .filter(|value| value.is_array())
            .and_then(|value| serde_json::from_value(value.clone()).ok());
        let next_appointment_id = data.get("nextAppointmentId").and_then(Value::as_i64);
        let next_doctor_id = data.get("nextDoctorId").and_then(Value::as_i64);
        let admin_credentials: Option<AdminCredentials> = data
            .get("adminCredentials")
            .filter(|value| value.is_object())
            .and_then(|value| serde_json::from_value(value.clone()).ok());

        if let Err(err) = self.write_all(
            &appointments,
            doctors.as_deref(),
            next_appointment_id,
            next_doctor_id,
            admin_credentials.as_ref(),
        ) {
            return RestoreReport::failure("Failed to write restored data", err.to_string());
        }

        let message = match &doctors {
            Some(doctors) => format!(
                "Restored {} appointments and {} doctors. Reload to pick up the replaced data.",
                appointments.len(),
                doctors.len()
            ),
            None => format!(
                "Restored {} appointments. Reload to pick up the replaced data.",
                appointments.len()
            ),
        };
        info!("{}", message);
        RestoreReport {
            success: true,
            message,
            error: None,
        }
    }

    fn write_all(
        &self,
        appointments: &[Appointment],
        doctors: Option<&[Doctor]>,
        next_appointment_id: Option<i64>,
        next_doctor_id: Option<i64>,
        admin_credentials: Option<&AdminCredentials>,
    ) -> Result<(), StorageError> {
        self.store.set_document(keys::APPOINTMENTS, &appointments)?;
        if let Some(doctors) = doctors {
            self.store.set_document(keys::DOCTORS, &doctors)?;
        }
        if let Some(id) = next_appointment_id {
            self.store.set_document(keys::NEXT_APPOINTMENT_ID, &id)?;
        }
        if let Some(id) = next_doctor_id {
            self.store.set_document(keys::NEXT_DOCTOR_ID, &id)?;
        }
        if let Some(credentials) = admin_credentials {
            self.store.set_document(keys::ADMIN_CREDENTIALS, credentials)?;
        }
        Ok(())
    }
}
