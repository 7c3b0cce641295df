pub mod services;

pub use services::auth::{AuthError, AuthService};
