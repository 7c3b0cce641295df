use std::env;
use std::path::PathBuf;
use tracing::warn;

/// Fallback passphrase for data at rest. Anyone with the source can decrypt
/// stored data unless CLINIC_ENCRYPTION_KEY is set to a real secret.
pub const DEFAULT_ENCRYPTION_KEY: &str = "satva-clinic-patient-data-2026";

const DEFAULT_DATA_DIR: &str = "./clinic-data";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub encryption_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            data_dir: env::var("CLINIC_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!("CLINIC_DATA_DIR not set, using {}", DEFAULT_DATA_DIR);
                    PathBuf::from(DEFAULT_DATA_DIR)
                }),
            encryption_key: env::var("CLINIC_ENCRYPTION_KEY").unwrap_or_else(|_| {
                warn!("CLINIC_ENCRYPTION_KEY not set, using built-in fallback key");
                DEFAULT_ENCRYPTION_KEY.to_string()
            }),
        };

        if !config.is_hardened() {
            warn!("Running with the built-in encryption key - stored data is not confidential");
        }

        config
    }

    /// Build a config pointing at an explicit directory, used by tests to get
    /// isolated store instances.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            encryption_key: DEFAULT_ENCRYPTION_KEY.to_string(),
        }
    }

    pub fn is_hardened(&self) -> bool {
        self.encryption_key != DEFAULT_ENCRYPTION_KEY
    }
}
