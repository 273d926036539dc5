//! Credential management for Bleutrade API authentication.

use secrecy::{ExposeSecret, SecretString};

/// Default environment variable holding the API key.
pub const API_KEY_VAR: &str = "BLEUTRADE_API_KEY";
/// Default environment variable holding the API secret.
pub const API_SECRET_VAR: &str = "BLEUTRADE_API_SECRET";

/// API credentials containing the key and secret.
#[derive(Clone)]
pub struct Credentials {
    /// The API key, sent as the `apikey` query parameter.
    pub api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }

    /// Whether both the key and the secret are non-empty.
    ///
    /// Private endpoints refuse to run with incomplete credentials.
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.expose_secret().is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `BLEUTRADE_API_KEY` and `BLEUTRADE_API_SECRET`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    ///
    /// # Panics
    ///
    /// Panics if the environment variables are not set.
    pub fn from_env() -> Self {
        Self::from_env_vars(API_KEY_VAR, API_SECRET_VAR)
    }

    /// Create credentials from custom environment variable names.
    ///
    /// # Panics
    ///
    /// Panics if the environment variables are not set.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Self {
        Self::try_from_env_vars(key_var, secret_var)
            .unwrap_or_else(|| panic!("Environment variables {key_var} and {secret_var} must be set"))
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if either variable is missing.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(API_KEY_VAR, API_SECRET_VAR)
    }

    /// Try to create credentials from custom environment variable names.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str) -> Option<Self> {
        let api_key = std::env::var(key_var).ok()?;
        let api_secret = std::env::var(secret_var).ok()?;

        Some(Self {
            credentials: Credentials::new(api_key, api_secret),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
