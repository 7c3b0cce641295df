use serde::{Deserialize, Serialize};
use std::fmt;

/// A doctor profile. `doctor_type` is an open set of specialty categories;
/// the two seeded ones partition the appointment slot pools.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub english_name: String,
    #[serde(default)]
    pub qualifications: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub doctor_type: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub image: String,
}

/// Specialty category used to partition slot pools. Doctors whose `type`
/// string is outside this set simply never share a pool.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DoctorType {
    Endocrinologist,
    Dermatologist,
}

impl fmt::Display for DoctorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoctorType::Endocrinologist => write!(f, "Endocrinologist"),
            DoctorType::Dermatologist => write!(f, "Dermatologist"),
        }
    }
}

impl DoctorType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Endocrinologist" => Some(DoctorType::Endocrinologist),
            "Dermatologist" => Some(DoctorType::Dermatologist),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDoctorRequest {
    pub name: String,
    pub english_name: String,
    #[serde(default)]
    pub qualifications: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub doctor_type: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorPatch {
    pub name: Option<String>,
    pub english_name: Option<String>,
    pub qualifications: Option<String>,
    pub specialization: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub doctor_type: Option<String>,
    pub experience: Option<String>,
    pub image: Option<String>,
}

impl Doctor {
    pub fn apply(&mut self, patch: DoctorPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(english_name) = patch.english_name {
            self.english_name = english_name;
        }
        if let Some(qualifications) = patch.qualifications {
            self.qualifications = qualifications;
        }
        if let Some(specialization) = patch.specialization {
            self.specialization = specialization;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(doctor_type) = patch.doctor_type {
            self.doctor_type = doctor_type;
        }
        if let Some(experience) = patch.experience {
            self.experience = experience;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
    }
}
