use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::appointment::Appointment;
use crate::auth::AdminCredentials;
use crate::doctor::Doctor;

pub const BACKUP_VERSION: u32 = 1;

/// Versioned envelope carrying the whole persisted data set, used to move
/// data between store instances (e.g. browser/device switches).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    pub appointments: Vec<Appointment>,
    pub doctors: Vec<Doctor>,
    pub next_appointment_id: i64,
    pub next_doctor_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_credentials: Option<AdminCredentials>,
}

/// Outcome of a restore attempt. Parse and shape failures come back as a
/// failed report with a diagnostic, never as a panic or partial write.
#[derive(Debug, Clone, Serialize)]
pub struct RestoreReport {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RestoreReport {
    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: Some(error.into()),
        }
    }
}
