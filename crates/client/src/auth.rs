//! Credential provider
//!
//! Resolves the PCO application id and shared secret from the process
//! environment, with an optional `.env` fallback. Values already present in
//! the environment always win over file contents (non-overriding merge).
//! No network I/O happens here.

use std::fmt;

use pcokit_domain::constants::{API_ROOT, ENV_API_ROOT, ENV_APPLICATION_ID, ENV_SECRET};
use pcokit_domain::{PcoError, Result};

/// Immutable basic-auth credentials, resolved once and injected into every
/// client instance.
#[derive(Clone)]
pub struct Credentials {
    app_id: String,
    secret: String,
}

impl Credentials {
    /// Create credentials from explicit values.
    ///
    /// # Errors
    /// Returns `PcoError::Config` if either value is empty; credentials are
    /// never silently defaulted.
    pub fn new(app_id: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        let app_id = app_id.into();
        let secret = secret.into();
        if app_id.is_empty() || secret.is_empty() {
            return Err(PcoError::Config(
                "application id and secret must both be non-empty".to_string(),
            ));
        }
        Ok(Self { app_id, secret })
    }

    /// Resolve credentials from `PCO_APPLICATION_ID` / `PCO_SECRET`.
    ///
    /// A `.env` file in the working directory (or any parent) is merged in
    /// first, without overriding variables that are already set.
    ///
    /// # Errors
    /// Returns `PcoError::Config` when either variable is missing or empty.
    pub fn from_env() -> Result<Self> {
        // dotenvy never overwrites existing process variables; a missing
        // .env file is not an error.
        let _ = dotenvy::dotenv();

        let app_id = std::env::var(ENV_APPLICATION_ID).unwrap_or_default();
        let secret = std::env::var(ENV_SECRET).unwrap_or_default();

        if app_id.is_empty() || secret.is_empty() {
            return Err(PcoError::Config(format!(
                "{} and {} must be set in the environment or a .env file",
                ENV_APPLICATION_ID, ENV_SECRET
            )));
        }

        Ok(Self { app_id, secret })
    }

    /// The application id (basic-auth username).
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// The shared secret (basic-auth password).
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never log the secret.
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// The API root, honoring the `PCO_API_ROOT` override.
pub fn api_root() -> String {
    std::env::var(ENV_API_ROOT)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| API_ROOT.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use once_cell::sync::Lazy;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    #[test]
    fn from_env_reads_both_variables() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var(ENV_APPLICATION_ID, "app-123");
        std::env::set_var(ENV_SECRET, "s3cret");

        let credentials = Credentials::from_env().expect("credentials");
        assert_eq!(credentials.app_id(), "app-123");
        assert_eq!(credentials.secret(), "s3cret");

        std::env::remove_var(ENV_APPLICATION_ID);
        std::env::remove_var(ENV_SECRET);
    }

    #[test]
    fn from_env_fails_when_secret_missing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var(ENV_APPLICATION_ID, "app-123");
        std::env::remove_var(ENV_SECRET);

        let result = Credentials::from_env();
        assert!(matches!(result, Err(PcoError::Config(_))));

        std::env::remove_var(ENV_APPLICATION_ID);
    }

    #[test]
    fn empty_values_are_rejected() {
        assert!(matches!(Credentials::new("", "secret"), Err(PcoError::Config(_))));
        assert!(matches!(Credentials::new("app", ""), Err(PcoError::Config(_))));
        assert!(Credentials::new("app", "secret").is_ok());
    }

    #[test]
    fn api_root_honors_override() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::remove_var(ENV_API_ROOT);
        assert_eq!(api_root(), API_ROOT);

        std::env::set_var(ENV_API_ROOT, "http://localhost:8080");
        assert_eq!(api_root(), "http://localhost:8080");

        std::env::remove_var(ENV_API_ROOT);
    }

    #[test]
    fn debug_output_redacts_secret() {
        let credentials = Credentials::new("app-123", "s3cret").expect("credentials");
        let output = format!("{:?}", credentials);
        assert!(output.contains("app-123"));
        assert!(!output.contains("s3cret"));
    }
}
