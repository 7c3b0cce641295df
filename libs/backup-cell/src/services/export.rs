//! Date-wise tabular export of the appointment book. The output is a
//! workbook model (named sheets of string rows, one sheet per date) that the
//! presentation layer renders to an actual spreadsheet file.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use shared_models::{Appointment, AppointmentStatus};
use shared_storage::{keys, Store};

pub const EXPORT_HEADER: [&str; 13] = [
    "ID",
    "Name",
    "Phone",
    "Email",
    "Service",
    "Date",
    "Time",
    "Period",
    "Status",
    "Notes",
    "Message",
    "Created At",
    "Updated At",
];

/// Sheet names in most spreadsheet formats are capped at 31 characters.
const SHEET_NAME_LIMIT: usize = 31;
const FALLBACK_SHEET_NAME: &str = "Appointments";

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFilters {
    pub status: Option<AppointmentStatus>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl ExportFilters {
    /// Day-wise backup: only the given `YYYY-MM-DD`.
    pub fn day_range(date: &str) -> Self {
        Self {
            status: None,
            date_from: Some(date.to_string()),
            date_to: Some(date.to_string()),
        }
    }

    /// Month-wise backup: the whole calendar month. `None` for an invalid
    /// year/month pair.
    pub fn month_range(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let last = next_month.pred_opt()?;
        Some(Self {
            status: None,
            date_from: Some(first.format("%Y-%m-%d").to_string()),
            date_to: Some(last.format("%Y-%m-%d").to_string()),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

pub struct ExportService {
    store: Store,
}

impl ExportService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Project the appointment book into a workbook: one sheet per distinct
    /// date (ascending), each starting with the fixed header row. A filter
    /// matching nothing still yields one placeholder sheet, since an empty
    /// workbook is typically an invalid document.
    pub fn export_appointments(&self, filters: &ExportFilters) -> Workbook {
        let mut appointments: Vec<Appointment> =
            self.store.get_document(keys::APPOINTMENTS, Vec::new());
        if let Some(status) = filters.status {
            appointments.retain(|apt| apt.status == status);
        }
        if let Some(from) = &filters.date_from {
            appointments.retain(|apt| &apt.date >= from);
        }
        if let Some(to) = &filters.date_to {
            appointments.retain(|apt| &apt.date <= to);
        }

        // BTreeMap keeps the sheets date-sorted.
        let mut grouped: BTreeMap<String, Vec<Appointment>> = BTreeMap::new();
        for appointment in appointments {
            let date = if appointment.date.is_empty() {
                "Unknown".to_string()
            } else {
                appointment.date.clone()
            };
            grouped.entry(date).or_default().push(appointment);
        }

        if grouped.is_empty() {
            let mut placeholder = vec![String::new(); EXPORT_HEADER.len()];
            placeholder[1] = "No appointments found for the selected period".to_string();
            return Workbook {
                sheets: vec![Sheet {
                    name: FALLBACK_SHEET_NAME.to_string(),
                    rows: vec![header_row(), placeholder],
                }],
            };
        }

        let sheets = grouped
            .into_iter()
            .map(|(date, appointments)| {
                let mut rows = vec![header_row()];
                rows.extend(appointments.iter().map(appointment_row));
                Sheet {
                    name: sanitize_sheet_name(&date),
                    rows,
                }
            })
            .collect::<Vec<_>>();
        debug!("exported {} sheet(s)", sheets.len());
        Workbook { sheets }
    }
}

fn header_row() -> Vec<String> {
    EXPORT_HEADER.iter().map(|cell| cell.to_string()).collect()
}

fn appointment_row(appointment: &Appointment) -> Vec<String> {
    vec![
        appointment.id.to_string(),
        appointment.name.clone(),
        appointment.phone.clone(),
        appointment.email.clone(),
        appointment.service.clone(),
        appointment.date.clone(),
        appointment.time.clone(),
        appointment.period.to_string(),
        appointment.status.to_string(),
        appointment.notes.clone(),
        appointment.message.clone(),
        appointment.created_at.to_rfc3339(),
        appointment.updated_at.to_rfc3339(),
    ]
}

/// Replace characters spreadsheet formats forbid in sheet names and enforce
/// the length cap.
fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | '*' | '?' | ':' | '[' | ']' => '-',
            other => other,
        })
        .take(SHEET_NAME_LIMIT)
        .collect();
    if cleaned.is_empty() {
        FALLBACK_SHEET_NAME.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_names_are_sanitized_and_capped() {
        assert_eq!(sanitize_sheet_name("2027-01-10"), "2027-01-10");
        assert_eq!(sanitize_sheet_name("10/01\\2027*?"), "10-01-2027--");
        assert_eq!(sanitize_sheet_name(""), "Appointments");
        let long = "x".repeat(40);
        assert_eq!(sanitize_sheet_name(&long).chars().count(), 31);
    }

    #[test]
    fn month_range_handles_month_ends() {
        let feb = ExportFilters::month_range(2028, 2).unwrap();
        assert_eq!(feb.date_from.as_deref(), Some("2028-02-01"));
        assert_eq!(feb.date_to.as_deref(), Some("2028-02-29")); // leap year

        let dec = ExportFilters::month_range(2027, 12).unwrap();
        assert_eq!(dec.date_to.as_deref(), Some("2027-12-31"));

        assert!(ExportFilters::month_range(2027, 13).is_none());
    }

    #[test]
    fn day_range_covers_exactly_one_date() {
        let day = ExportFilters::day_range("2027-01-10");
        assert_eq!(day.date_from, day.date_to);
    }
}
