//! Slot availability engine. The day is a fixed, hand-authored catalog of
//! time points (15-minute stride through the morning and early afternoon,
//! 30-minute stride later); availability is the catalog minus slots already
//! booked for the requested doctor type, minus past times on same-day
//! requests.

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;
use tracing::debug;

use doctor_cell::catalog::resolve_doctor_type;
use shared_models::{Appointment, AppointmentStatus, DoctorType};
use shared_storage::{keys, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub value: &'static str,
    pub label: &'static str,
    pub hour: u32,
    pub minute: u32,
}

const fn slot(value: &'static str, label: &'static str, hour: u32, minute: u32) -> TimeSlot {
    TimeSlot {
        value,
        label,
        hour,
        minute,
    }
}

/// The bookable day. This exact list is an external contract shared with
/// previously stored data; do not edit entries in place.
pub const TIME_SLOTS: [TimeSlot; 35] = [
    slot("09:00", "9:00 AM", 9, 0),
    slot("09:15", "9:15 AM", 9, 15),
    slot("09:30", "9:30 AM", 9, 30),
    slot("09:45", "9:45 AM", 9, 45),
    slot("10:00", "10:00 AM", 10, 0),
    slot("10:15", "10:15 AM", 10, 15),
    slot("10:30", "10:30 AM", 10, 30),
    slot("10:45", "10:45 AM", 10, 45),
    slot("11:00", "11:00 AM", 11, 0),
    slot("11:15", "11:15 AM", 11, 15),
    slot("11:30", "11:30 AM", 11, 30),
    slot("12:00", "12:00 PM (Noon)", 12, 0),
    slot("12:15", "12:15 PM", 12, 15),
    slot("12:30", "12:30 PM", 12, 30),
    slot("12:45", "12:45 PM", 12, 45),
    slot("13:00", "1:00 PM", 13, 0),
    slot("13:15", "1:15 PM", 13, 15),
    slot("13:30", "1:30 PM", 13, 30),
    slot("13:45", "1:45 PM", 13, 45),
    slot("14:00", "2:00 PM", 14, 0),
    slot("14:15", "2:15 PM", 14, 15),
    slot("14:30", "2:30 PM", 14, 30),
    slot("15:00", "3:00 PM", 15, 0),
    slot("15:15", "3:15 PM", 15, 15),
    slot("15:30", "3:30 PM", 15, 30),
    slot("15:45", "3:45 PM", 15, 45),
    slot("16:00", "4:00 PM", 16, 0),
    slot("16:15", "4:15 PM", 16, 15),
    slot("16:30", "4:30 PM", 16, 30),
    slot("16:45", "4:45 PM", 16, 45),
    slot("17:00", "5:00 PM", 17, 0),
    slot("17:15", "5:15 PM", 17, 15),
    slot("17:30", "5:30 PM", 17, 30),
    slot("17:45", "5:45 PM", 17, 45),
    slot("18:00", "6:00 PM", 18, 0),
];

pub struct AvailabilityService {
    store: Store,
}

impl AvailabilityService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Times already taken for a doctor type on a date. Cancelled
    /// appointments and the appointment being edited (if any) do not count;
    /// each doctor type has its own slot pool.
    pub fn booked_slots_for_doctor_type(
        &self,
        date: &str,
        doctor_type: DoctorType,
        exclude_appointment_id: Option<i64>,
    ) -> Vec<String> {
        if date.is_empty() {
            return Vec::new();
        }
        let appointments: Vec<Appointment> = self.store.get_document(keys::APPOINTMENTS, Vec::new());
        appointments
            .into_iter()
            .filter(|apt| {
                apt.date == date
                    && apt.status != AppointmentStatus::Cancelled
                    && !apt.time.is_empty()
                    && resolve_doctor_type(&apt.service) == Some(doctor_type)
                    && exclude_appointment_id != Some(apt.id)
            })
            .map(|apt| apt.time)
            .collect()
    }

    /// Valid slots for a date and doctor type, in catalog order. An empty
    /// result means "no slots available", not an error. `exclude_appointment_id`
    /// keeps an appointment's own time selectable while editing it.
    pub fn available_slots(
        &self,
        date: Option<&str>,
        doctor_type: Option<DoctorType>,
        exclude_appointment_id: Option<i64>,
    ) -> Vec<TimeSlot> {
        self.available_slots_at(
            date,
            doctor_type,
            exclude_appointment_id,
            Local::now().naive_local(),
        )
    }

    /// Same as [`available_slots`](Self::available_slots) with an explicit
    /// wall clock.
    pub fn available_slots_at(
        &self,
        date: Option<&str>,
        doctor_type: Option<DoctorType>,
        exclude_appointment_id: Option<i64>,
        now: NaiveDateTime,
    ) -> Vec<TimeSlot> {
        let Some(date) = date.filter(|date| !date.is_empty()) else {
            return TIME_SLOTS.to_vec();
        };

        let booked = match doctor_type {
            Some(doctor_type) => {
                self.booked_slots_for_doctor_type(date, doctor_type, exclude_appointment_id)
            }
            None => Vec::new(),
        };
        let mut candidates: Vec<TimeSlot> = TIME_SLOTS
            .iter()
            .filter(|slot| !booked.iter().any(|taken| taken == slot.value))
            .copied()
            .collect();

        let Ok(requested) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
            // Unparseable dates behave like any other non-today date.
            return candidates;
        };
        if requested != now.date() {
            // Future and past dates both get the booking-filtered catalog;
            // past-date lockout belongs to booking validation, not here.
            return candidates;
        }

        let (current_hour, current_minute) = (now.hour(), now.minute());
        if current_hour >= 12 {
            // Clinic rule: once past noon, the whole morning block is gone,
            // not just the elapsed part of it.
            candidates.retain(|slot| slot.hour >= 12);
        } else {
            candidates.retain(|slot| {
                slot.hour > current_hour
                    || (slot.hour == current_hour && slot.minute >= current_minute)
            });
        }
        debug!(
            "{} slot(s) available on {} at {:02}:{:02}",
            candidates.len(),
            date,
            current_hour,
            current_minute
        );
        candidates
    }
}
