use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A booked (or requested) appointment. Field names serialize in camelCase so
/// persisted documents and backup envelopes stay compatible with data written
/// by earlier deployments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub service: String,
    /// Calendar date as `YYYY-MM-DD`, empty when never scheduled.
    #[serde(default)]
    pub date: String,
    /// 24-hour `HH:MM`, empty when no slot was picked.
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub period: Period,
    /// Denormalized "date time period" display string.
    #[serde(default)]
    pub date_time: String,
    #[serde(default)]
    pub message: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::Completed => write!(f, "completed"),
        }
    }
}

impl AppointmentStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(AppointmentStatus::Pending),
            "confirmed" => Some(AppointmentStatus::Confirmed),
            "cancelled" => Some(AppointmentStatus::Cancelled),
            "completed" => Some(AppointmentStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Period {
    #[default]
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Period {
    /// Derive the period from an `HH:MM` string; empty or malformed times
    /// default to AM.
    pub fn from_time(time: &str) -> Self {
        let hour = time
            .split(':')
            .next()
            .and_then(|h| h.parse::<u32>().ok())
            .unwrap_or(0);
        if hour >= 12 {
            Period::Pm
        } else {
            Period::Am
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "AM" => Some(Period::Am),
            "PM" => Some(Period::Pm),
            _ => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Am => write!(f, "AM"),
            Period::Pm => write!(f, "PM"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub service: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub period: Option<Period>,
    #[serde(default)]
    pub message: String,
    /// Admin walk-ins may set an initial status and notes; the public booking
    /// form leaves these empty.
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
}

/// Partial update merged over an existing appointment by the admin panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub service: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub period: Option<Period>,
    pub message: Option<String>,
    pub status: Option<AppointmentStatus>,
    pub notes: Option<String>,
}

impl Appointment {
    /// Merge a patch into this appointment. The caller refreshes `updated_at`.
    pub fn apply(&mut self, patch: AppointmentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(service) = patch.service {
            self.service = service;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(period) = patch.period {
            self.period = period;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        self.date_time = format!("{} {} {}", self.date, self.time, self.period);
    }
}
