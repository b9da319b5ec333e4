//! Global rota configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{RotaError, RotaResult};
use crate::user::{User, default_roster};

static DEFAULT_SCHEDULE_PATH: &str = "~/.rota/schedule.json";

fn default_schedule_path() -> PathBuf {
    PathBuf::from(DEFAULT_SCHEDULE_PATH)
}

fn is_default_schedule_path(p: &PathBuf) -> bool {
    *p == default_schedule_path()
}

/// Global configuration at ~/.config/rota/config.toml
///
/// Holds where the schedule blob lives and the user roster shown on the
/// login screen. The roster is the full set of identities signups can
/// carry; removing an entry does not touch existing signups.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RotaConfig {
    #[serde(
        default = "default_schedule_path",
        skip_serializing_if = "is_default_schedule_path"
    )]
    pub schedule_file: PathBuf,

    #[serde(default = "default_roster")]
    pub users: Vec<User>,
}

impl Default for RotaConfig {
    fn default() -> Self {
        RotaConfig {
            schedule_file: default_schedule_path(),
            users: default_roster(),
        }
    }
}

impl RotaConfig {
    pub fn config_path() -> RotaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RotaError::Config("Could not determine config directory".into()))?
            .join("rota");

        Ok(config_dir.join("config.toml"))
    }

    /// Create a default config file: options commented out, the default
    /// roster written out so it's obvious where to edit it.
    pub fn create_default_config(path: &std::path::Path) -> RotaResult<()> {
        #[derive(Serialize)]
        struct RosterSection {
            users: Vec<User>,
        }

        let roster = toml::to_string_pretty(&RosterSection {
            users: default_roster(),
        })
        .map_err(|e| RotaError::Config(e.to_string()))?;

        let contents = format!(
            "\
# rota configuration

# Where the schedule lives:
# schedule_file = \"{}\"

# Who can sign up:
{}",
            DEFAULT_SCHEDULE_PATH, roster
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RotaError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| RotaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_template_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        RotaConfig::create_default_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let config: RotaConfig = toml::from_str(&content).unwrap();
        assert_eq!(config.users, default_roster());
        assert_eq!(config.schedule_file, default_schedule_path());
    }
}
