use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use super::Config;
use crate::errors::ConfigError;

/// Overrides the directory holding the tracker's configuration.
pub const HOME_ENV: &str = "EXPENSE_TRACKER_HOME";

const APP_DIR: &str = "expense-tracker";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Resolves the config location from `EXPENSE_TRACKER_HOME`, falling back
    /// to the platform config directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = match env::var_os(HOME_ENV) {
            Some(home) => PathBuf::from(home),
            None => dirs::config_dir()
                .ok_or(ConfigError::NoConfigDir)?
                .join(APP_DIR),
        };
        Self::with_base_dir(base)
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.config_path)?;
        let mut config: Config = serde_json::from_str(&data)?;
        for key in config.sanitize() {
            warn!(key, path = %self.config_path.display(), "invalid preference reset");
        }
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.config_path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        debug!(path = %self.config_path.display(), "config saved");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn tmp_path_appends_suffix() {
        let tmp = tmp_path(Path::new("/a/config.json"));
        assert_eq!(tmp, PathBuf::from("/a/config.json.tmp"));
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        manager.save(&Config::default()).unwrap();
        assert!(manager.config_path().exists());
        assert!(!tmp_path(manager.config_path()).exists());
    }

    #[test]
    fn load_repairs_hand_edited_values() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(
            manager.config_path(),
            r#"{"fallback_category":"Nowhere","chart_width":65535}"#,
        )
        .unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.fallback_category, "Other");
        assert_eq!(config.chart_width, Some(200));
    }
}
