//! Rota root handle: configuration and roster access.

use std::path::PathBuf;

use config::{Config, File};

use crate::error::{RotaError, RotaResult};
use crate::rota_config::RotaConfig;
use crate::user::User;

#[derive(Debug, Clone)]
pub struct Rota {
    config: RotaConfig,
}

impl Rota {
    pub fn load() -> RotaResult<Self> {
        let config_path = RotaConfig::config_path()?;

        if !config_path.exists() {
            RotaConfig::create_default_config(&config_path)?;
        }

        let config: RotaConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| RotaError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RotaError::Config(e.to_string()))?;

        Ok(Rota { config })
    }

    /// Build a handle from an explicit config, bypassing the config file.
    pub fn with_config(config: RotaConfig) -> Rota {
        Rota { config }
    }

    /// Path of the schedule blob, with `~` expanded.
    pub fn schedule_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.schedule_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the schedule path in display-friendly form, keeping `~`
    /// instead of expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.config.schedule_file.clone()
    }

    pub fn users(&self) -> &[User] {
        &self.config.users
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.config.users.iter().find(|u| u.id == id)
    }

    /// Display name for a user id. Stale ids left in stored signups fall
    /// back to the raw id rather than failing.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.user(id).map(|u| u.name.as_str()).unwrap_or(id)
    }
}
