//! One-time repairs run at startup, before any reads are served.

use std::collections::HashMap;

use tracing::info;

use shared_models::Doctor;
use shared_storage::{keys, StorageError, Store};

fn is_placeholder(url: &str) -> bool {
    url.is_empty() || url.contains("dummyimage.com")
}

/// Backfill profile images for stored doctors that predate the bundled
/// images (empty or placeholder URLs), matching by id against the seeded
/// defaults. Returns how many profiles were repaired.
pub fn backfill_doctor_images(store: &Store) -> Result<usize, StorageError> {
    let mut doctors: Vec<Doctor> = store.get_document(keys::DOCTORS, Vec::new());
    if doctors.is_empty() {
        return Ok(0);
    }

    let defaults: HashMap<i64, Doctor> = crate::catalog::default_doctors()
        .into_iter()
        .map(|doctor| (doctor.id, doctor))
        .collect();

    let mut repaired = 0;
    for doctor in &mut doctors {
        if let Some(default) = defaults.get(&doctor.id) {
            if is_placeholder(&doctor.image) && !default.image.is_empty() {
                doctor.image = default.image.clone();
                repaired += 1;
            }
        }
    }

    if repaired > 0 {
        store.set_document(keys::DOCTORS, &doctors)?;
        info!("backfilled images for {} doctor profile(s)", repaired);
    }
    Ok(repaired)
}
