use std::env;

pub const ENV_SECRET: &str = "SECRET";
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// Source of the shared secret and the database URL it guards.
///
/// The handler only sees this trait, so tests can inject fixed values and
/// production reads the environment. Lookups happen on every request, which
/// means a changed secret takes effect on the next request without a restart.
pub trait SecretStore: Send + Sync {
    /// The expected bearer token, if one is configured.
    fn secret(&self) -> Option<String>;

    /// The guarded database URL, if one is configured.
    fn database_url(&self) -> Option<String>;
}

/// Environment-backed [`SecretStore`]. An unset variable and an empty string
/// are both treated as absent.
pub struct EnvSecrets {
    secret_key: String,
    database_url_key: String,
}

impl EnvSecrets {
    pub fn new() -> Self {
        Self::with_keys(ENV_SECRET, ENV_DATABASE_URL)
    }

    /// Read from non-standard variable names. Lets tests use uniquely-named
    /// variables instead of fighting over the process-wide `SECRET`.
    pub fn with_keys(secret_key: impl Into<String>, database_url_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            database_url_key: database_url_key.into(),
        }
    }
}

impl Default for EnvSecrets {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretStore for EnvSecrets {
    fn secret(&self) -> Option<String> {
        read_non_empty(&self.secret_key)
    }

    fn database_url(&self) -> Option<String> {
        read_non_empty(&self.database_url_key)
    }
}

fn read_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
