//! Local-only admin session handling. There is no server to mint real
//! tokens; a prefixed opaque string marks a logged-in admin in this store
//! instance. The default credential pair is a seed, not a security boundary.

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};

use shared_models::{AdminCredentials, Session, SessionUser};
use shared_storage::{keys, Store};

const LOCAL_ADMIN_TOKEN_PREFIX: &str = "satva_local_admin_token";

const DEFAULT_ADMIN_USERNAME: &str = "adminSatva";
const DEFAULT_ADMIN_PASSWORD: &str = "satva#2026";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired session token")]
    InvalidToken,
}

pub struct AuthService {
    store: Store,
}

impl AuthService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Stored override (restored from a backup, or set by hand) or the
    /// built-in default pair.
    fn credentials(&self) -> AdminCredentials {
        self.store
            .get_document::<Option<AdminCredentials>>(keys::ADMIN_CREDENTIALS, None)
            .unwrap_or(AdminCredentials {
                username: DEFAULT_ADMIN_USERNAME.to_string(),
                password: DEFAULT_ADMIN_PASSWORD.to_string(),
            })
    }

    pub fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let expected = self.credentials();
        if username != expected.username || password != expected.password {
            warn!("failed admin login attempt for '{}'", username);
            return Err(AuthError::InvalidCredentials);
        }
        debug!("admin '{}' logged in", username);
        Ok(Session {
            token: format!(
                "{}_{}",
                LOCAL_ADMIN_TOKEN_PREFIX,
                Utc::now().timestamp_millis()
            ),
            user: SessionUser {
                username: expected.username,
                role: "admin".to_string(),
            },
        })
    }

    pub fn verify(&self, token: &str) -> Result<SessionUser, AuthError> {
        if !token.starts_with(LOCAL_ADMIN_TOKEN_PREFIX) {
            return Err(AuthError::InvalidToken);
        }
        Ok(SessionUser {
            username: self.credentials().username,
            role: "admin".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use shared_config::AppConfig;
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> AuthService {
        AuthService::new(Store::open(&AppConfig::with_data_dir(dir.path())).unwrap())
    }

    #[test]
    fn default_credentials_log_in_and_token_verifies() {
        let dir = TempDir::new().unwrap();
        let auth = service(&dir);

        let session = auth.login(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD).unwrap();
        assert_eq!(session.user.role, "admin");
        let user = auth.verify(&session.token).unwrap();
        assert_eq!(user.username, DEFAULT_ADMIN_USERNAME);
    }

    #[test]
    fn wrong_password_is_rejected() {
        let dir = TempDir::new().unwrap();
        let auth = service(&dir);
        assert_matches!(
            auth.login(DEFAULT_ADMIN_USERNAME, "nope"),
            Err(AuthError::InvalidCredentials)
        );
        assert_matches!(auth.verify("some_other_token"), Err(AuthError::InvalidToken));
    }

    #[test]
    fn stored_override_replaces_the_default_pair() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(&AppConfig::with_data_dir(dir.path())).unwrap();
        store
            .set_document(
                keys::ADMIN_CREDENTIALS,
                &AdminCredentials {
                    username: "drpatidar".to_string(),
                    password: "better-secret".to_string(),
                },
            )
            .unwrap();

        let auth = AuthService::new(store);
        assert_matches!(
            auth.login(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD),
            Err(AuthError::InvalidCredentials)
        );
        assert!(auth.login("drpatidar", "better-secret").is_ok());
    }
}
