use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use common::StorageConfig;

use crate::auth::DEFAULT_ADMIN_PASSWORD;

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Shared admin secret. Default: "admin123".
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

fn default_admin_password() -> String {
    DEFAULT_ADMIN_PASSWORD.into()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_password: default_admin_password(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from `path` (or `config/config`), then environment
    /// overrides such as `SYLLABUS__STORAGE__DATA_DIR`.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("storage.backend", "filesystem")?
            .set_default("storage.data_dir", "./data")?
            .set_default("storage.max_value_bytes", 5_i64 * 1024 * 1024)?
            .set_default("auth.admin_password", DEFAULT_ADMIN_PASSWORD)?
            .add_source(File::with_name(path.unwrap_or("config/config")).required(false))
            .add_source(Environment::with_prefix("SYLLABUS").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
