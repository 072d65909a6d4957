//! Settings resolution: built-in defaults, then `config.toml`, then the
//! environment.

use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::constants::UPDATE_CHECK_INTERVAL_HOURS;

pub const APP_DIR: &str = "rn-advisor";
pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_UPDATE_REPO: &str = "rn-advisor/rn-advisor";

pub const ENV_STATE_DIR: &str = "RN_ADVISOR_STATE_DIR";
pub const ENV_UPDATE_REPO: &str = "RN_ADVISOR_UPDATE_REPO";
pub const ENV_CHECK_INTERVAL_HOURS: &str = "RN_ADVISOR_CHECK_INTERVAL_HOURS";

/// Upper bound on the update-check interval (one year).
pub const MAX_CHECK_INTERVAL_HOURS: u64 = 24 * 365;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {name}: '{value}'")]
    InvalidEnv { name: &'static str, value: String },

    #[error("update_repo must look like 'owner/name', got '{0}'")]
    InvalidRepo(String),

    #[error("check_interval_hours must be at most {max}, got {0}", max = MAX_CHECK_INTERVAL_HOURS)]
    InvalidInterval(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory for state kept between runs (the update-check timestamp).
    pub state_dir: PathBuf,
    /// GitHub repository consulted by the update check, `owner/name`.
    pub update_repo: String,
    pub check_interval_hours: u64,
}

/// Shape of `config.toml`; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    state_dir: Option<PathBuf>,
    update_repo: Option<String>,
    check_interval_hours: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        let state_dir = dirs::data_local_dir()
            .unwrap_or_else(env::temp_dir)
            .join(APP_DIR);
        Self {
            state_dir,
            update_repo: DEFAULT_UPDATE_REPO.to_string(),
            check_interval_hours: UPDATE_CHECK_INTERVAL_HOURS.unsigned_abs(),
        }
    }
}

impl Settings {
    /// `<config_dir>/rn-advisor/config.toml`, when the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Resolve settings from the default config file and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::default_config_path().as_deref())
    }

    /// Resolve settings from `config_path` (if given and present) and the
    /// process environment.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = Self::default();
        if let Some(path) = config_path {
            settings.apply_file(path)?;
        }
        settings.apply_env(|name| env::var(name).ok())?;
        settings.validate()?;
        Ok(settings)
    }

    /// Overlay values from a TOML file. A missing file changes nothing.
    pub fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file");
                return Ok(());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let file: FileSettings = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(state_dir) = file.state_dir {
            self.state_dir = state_dir;
        }
        if let Some(repo) = file.update_repo {
            self.update_repo = repo;
        }
        if let Some(hours) = file.check_interval_hours {
            self.check_interval_hours = hours;
        }
        Ok(())
    }

    /// Overlay values from environment variables, looked up through `lookup`.
    /// Empty values are ignored.
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(dir) = get(ENV_STATE_DIR) {
            self.state_dir = PathBuf::from(dir);
        }
        if let Some(repo) = get(ENV_UPDATE_REPO) {
            self.update_repo = repo.trim().to_string();
        }
        if let Some(hours) = get(ENV_CHECK_INTERVAL_HOURS) {
            self.check_interval_hours =
                hours.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                    name: ENV_CHECK_INTERVAL_HOURS,
                    value: hours.clone(),
                })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut parts = self.update_repo.split('/');
        let well_formed = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
        );
        if !well_formed {
            return Err(ConfigError::InvalidRepo(self.update_repo.clone()));
        }
        if self.check_interval_hours > MAX_CHECK_INTERVAL_HOURS {
            return Err(ConfigError::InvalidInterval(self.check_interval_hours));
        }
        Ok(())
    }

    pub fn check_interval(&self) -> chrono::Duration {
        // Bounded by validate(), so the conversion cannot overflow
        chrono::Duration::hours(self.check_interval_hours.min(MAX_CHECK_INTERVAL_HOURS) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.update_repo, DEFAULT_UPDATE_REPO);
        assert_eq!(settings.check_interval_hours, 24);
        assert!(settings.state_dir.ends_with(APP_DIR));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "state_dir = \"/tmp/rn-state\"\ncheck_interval_hours = 6\n",
        )
        .unwrap();

        let mut settings = Settings::default();
        settings.apply_file(&path).unwrap();
        assert_eq!(settings.state_dir, PathBuf::from("/tmp/rn-state"));
        assert_eq!(settings.check_interval_hours, 6);
        assert_eq!(settings.update_repo, DEFAULT_UPDATE_REPO);
    }

    #[test]
    fn test_missing_file_is_ignored() {
        let temp = TempDir::new().unwrap();
        let mut settings = Settings::default();
        settings.apply_file(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "check_interval_hours = \"soon\"").unwrap();

        let err = Settings::default().apply_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }

    #[test]
    fn test_unknown_key_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "colour = \"blue\"").unwrap();

        assert!(Settings::default().apply_file(&path).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut settings = Settings::default();
        settings
            .apply_env(lookup(&[
                (ENV_STATE_DIR, "/var/lib/rn"),
                (ENV_UPDATE_REPO, " acme/advisor "),
                (ENV_CHECK_INTERVAL_HOURS, "48"),
            ]))
            .unwrap();

        assert_eq!(settings.state_dir, PathBuf::from("/var/lib/rn"));
        assert_eq!(settings.update_repo, "acme/advisor");
        assert_eq!(settings.check_interval_hours, 48);
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let mut settings = Settings::default();
        settings
            .apply_env(lookup(&[(ENV_UPDATE_REPO, "  ")]))
            .unwrap();
        assert_eq!(settings.update_repo, DEFAULT_UPDATE_REPO);
    }

    #[test]
    fn test_invalid_env_interval() {
        let err = Settings::default()
            .apply_env(lookup(&[(ENV_CHECK_INTERVAL_HOURS, "daily")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv {
                name: ENV_CHECK_INTERVAL_HOURS,
                ..
            }
        ));
    }

    #[test]
    fn test_validate_repo_and_interval() {
        let mut settings = Settings::default();
        settings.update_repo = "no-slash".into();
        assert!(matches!(settings.validate(), Err(ConfigError::InvalidRepo(_))));

        settings.update_repo = "a/b/c".into();
        assert!(settings.validate().is_err());

        settings.update_repo = "a/b".into();
        settings.check_interval_hours = MAX_CHECK_INTERVAL_HOURS + 1;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidInterval(_))
        ));
    }

    #[test]
    fn test_interval_error_message() {
        let err = ConfigError::InvalidInterval(9_000_000);
        assert_eq!(
            err.to_string(),
            format!("check_interval_hours must be at most {MAX_CHECK_INTERVAL_HOURS}, got 9000000")
        );
    }

    #[test]
    fn test_check_interval_duration() {
        let settings = Settings {
            check_interval_hours: 3,
            ..Settings::default()
        };
        assert_eq!(settings.check_interval(), chrono::Duration::hours(3));
    }

    #[test]
    #[serial]
    fn test_load_from_reads_process_env() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "check_interval_hours = 6\n").unwrap();

        std::env::set_var(ENV_CHECK_INTERVAL_HOURS, "12");
        let result = Settings::load_from(Some(&path));
        std::env::remove_var(ENV_CHECK_INTERVAL_HOURS);

        // Environment wins over the file
        assert_eq!(result.unwrap().check_interval_hours, 12);
    }
}
