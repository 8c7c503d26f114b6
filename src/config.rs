use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@taskmanagement.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,

    // First-run admin account
    pub default_admin_password: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &self.data_dir)
            .field("log_dir", &self.log_dir)
            .field("default_admin_password", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            data_dir: env::var("DATA_DIR")
                .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string())
                .into(),
            log_dir: env::var("LOG_DIR")
                .unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string())
                .into(),
            default_admin_password: env::var("DEFAULT_ADMIN_PASSWORD")
                .ok()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()),
        }
    }

    /// Config rooted at an explicit data directory, everything else defaulted.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            log_dir: DEFAULT_LOG_DIR.into(),
            default_admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}
