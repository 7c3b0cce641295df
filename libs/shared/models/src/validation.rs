use chrono::{Local, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::appointment::{AppointmentPatch, CreateAppointmentRequest};

/// Form-level rejection, raised before a request reaches the repositories.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

// Letters, spaces, and the Devanagari block (patient names are often Hindi).
fn name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z\s\x{0900}-\x{097F}]+$").expect("valid regex"))
}

fn phone_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9+\-\s()]+$").expect("valid regex"))
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"))
}

/// Patient-facing booking form rules. Admin walk-ins use
/// [`validate_admin_create`], which permits back-dated entries.
pub fn validate_booking(request: &CreateAppointmentRequest) -> Result<(), ValidationError> {
    validate_booking_at(request, Local::now().date_naive())
}

pub fn validate_booking_at(
    request: &CreateAppointmentRequest,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    validate_patient_fields(request)?;
    if request.date.is_empty() {
        return Err(ValidationError::new("date", "Please select a date"));
    }
    let date = NaiveDate::parse_from_str(&request.date, "%Y-%m-%d")
        .map_err(|_| ValidationError::new("date", "Please select a valid date"))?;
    if date < today {
        return Err(ValidationError::new(
            "date",
            "Date must be today or in the future",
        ));
    }
    if request.time.is_empty() {
        return Err(ValidationError::new("time", "Please select a time"));
    }
    Ok(())
}

/// Admin create rules: same field shapes, any date allowed (walk-ins and
/// back-dated entries).
pub fn validate_admin_create(request: &CreateAppointmentRequest) -> Result<(), ValidationError> {
    validate_patient_fields(request)?;
    if request.date.is_empty() {
        return Err(ValidationError::new("date", "Please select a date"));
    }
    if request.time.is_empty() {
        return Err(ValidationError::new("time", "Please select a time"));
    }
    if request.notes.chars().count() > 1000 {
        return Err(ValidationError::new(
            "notes",
            "Notes must not exceed 1000 characters",
        ));
    }
    Ok(())
}

/// Admin edit-modal rules: everything optional, but a supplied date must be
/// today or later.
pub fn validate_admin_update(patch: &AppointmentPatch) -> Result<(), ValidationError> {
    validate_admin_update_at(patch, Local::now().date_naive())
}

pub fn validate_admin_update_at(
    patch: &AppointmentPatch,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if let Some(date) = &patch.date {
        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ValidationError::new("date", "Please select a valid date"))?;
        if parsed < today {
            return Err(ValidationError::new(
                "date",
                "Date must be today or in the future",
            ));
        }
    }
    if let Some(notes) = &patch.notes {
        if notes.chars().count() > 1000 {
            return Err(ValidationError::new(
                "notes",
                "Notes must not exceed 1000 characters",
            ));
        }
    }
    Ok(())
}

fn validate_patient_fields(request: &CreateAppointmentRequest) -> Result<(), ValidationError> {
    let name_len = request.name.chars().count();
    if name_len < 2 {
        return Err(ValidationError::new(
            "name",
            "Name must be at least 2 characters",
        ));
    }
    if name_len > 100 {
        return Err(ValidationError::new(
            "name",
            "Name must not exceed 100 characters",
        ));
    }
    if !name_pattern().is_match(&request.name) {
        return Err(ValidationError::new(
            "name",
            "Name should only contain letters and spaces",
        ));
    }

    let phone_len = request.phone.chars().count();
    if phone_len < 10 {
        return Err(ValidationError::new(
            "phone",
            "Phone number must be at least 10 digits",
        ));
    }
    if phone_len > 15 {
        return Err(ValidationError::new(
            "phone",
            "Phone number must not exceed 15 digits",
        ));
    }
    if !phone_pattern().is_match(&request.phone) {
        return Err(ValidationError::new(
            "phone",
            "Phone number should only contain digits and valid characters",
        ));
    }

    if !request.email.is_empty() && !email_pattern().is_match(&request.email) {
        return Err(ValidationError::new(
            "email",
            "Please enter a valid email address",
        ));
    }

    if request.service.is_empty() {
        return Err(ValidationError::new("service", "Please select a service"));
    }

    if request.message.chars().count() > 500 {
        return Err(ValidationError::new(
            "message",
            "Message must not exceed 500 characters",
        ));
    }

    Ok(())
}
