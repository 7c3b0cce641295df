use tracing::{debug, info};

use shared_models::{CreateDoctorRequest, Doctor, DoctorPatch};
use shared_storage::{keys, Store};

use crate::catalog;
use crate::models::DoctorError;

pub struct DoctorService {
    store: Store,
}

impl DoctorService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Read the doctor list, seeding the curated defaults into an empty
    /// store on first access. Seeding also primes the id counter past the
    /// seeded profiles.
    pub fn list_doctors(&self) -> Result<Vec<Doctor>, DoctorError> {
        let stored: Vec<Doctor> = self.store.get_document(keys::DOCTORS, Vec::new());
        if !stored.is_empty() {
            return Ok(stored);
        }

        let defaults = catalog::default_doctors();
        self.store.set_document(keys::DOCTORS, &defaults)?;
        self.store
            .set_document(keys::NEXT_DOCTOR_ID, &(defaults.len() as i64 + 1))?;
        info!("seeded {} default doctor profiles", defaults.len());
        Ok(defaults)
    }

    pub fn create_doctor(&self, request: CreateDoctorRequest) -> Result<Doctor, DoctorError> {
        if request.name.trim().is_empty() {
            return Err(DoctorError::Validation("name is required".to_string()));
        }
        if request.english_name.trim().is_empty() {
            return Err(DoctorError::Validation(
                "englishName is required".to_string(),
            ));
        }

        let mut doctors = self.list_doctors()?;
        let id = self.store.next_id(keys::NEXT_DOCTOR_ID)?;
        let doctor = Doctor {
            id,
            name: request.name,
            english_name: request.english_name,
            qualifications: request.qualifications,
            specialization: request.specialization,
            title: request.title,
            doctor_type: request.doctor_type,
            experience: request.experience,
            image: request.image,
        };
        doctors.push(doctor.clone());
        self.store.set_document(keys::DOCTORS, &doctors)?;
        debug!("created doctor {} ({})", doctor.id, doctor.english_name);
        Ok(doctor)
    }

    /// Merge a patch into the doctor with this id; `None` when absent.
    pub fn update_doctor(
        &self,
        id: i64,
        patch: DoctorPatch,
    ) -> Result<Option<Doctor>, DoctorError> {
        let mut doctors = self.list_doctors()?;
        let Some(doctor) = doctors.iter_mut().find(|doctor| doctor.id == id) else {
            return Ok(None);
        };
        doctor.apply(patch);
        let updated = doctor.clone();
        self.store.set_document(keys::DOCTORS, &doctors)?;
        Ok(Some(updated))
    }

    /// Remove the doctor with this id; `false` when absent.
    pub fn delete_doctor(&self, id: i64) -> Result<bool, DoctorError> {
        let mut doctors = self.list_doctors()?;
        let before = doctors.len();
        doctors.retain(|doctor| doctor.id != id);
        if doctors.len() == before {
            return Ok(false);
        }
        self.store.set_document(keys::DOCTORS, &doctors)?;
        debug!("deleted doctor {}", id);
        Ok(true)
    }
}
