use thiserror::Error;

use shared_storage::StorageError;

#[derive(Debug, Error)]
pub enum DoctorError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
