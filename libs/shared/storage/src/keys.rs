//! Document names used by the store. One file per logical collection.

pub const APPOINTMENTS: &str = "appointments";
pub const DOCTORS: &str = "doctors";
pub const ADMIN_CREDENTIALS: &str = "admin_credentials";
pub const NEXT_APPOINTMENT_ID: &str = "next_appointment_id";
pub const NEXT_DOCTOR_ID: &str = "next_doctor_id";

/// Documents holding patient or admin data, encrypted at rest.
pub const ENCRYPTED: &[&str] = &[APPOINTMENTS, DOCTORS, ADMIN_CREDENTIALS];

pub fn is_encrypted(name: &str) -> bool {
    ENCRYPTED.contains(&name)
}
