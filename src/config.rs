use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::constants::DEFAULT_API_URL;
use crate::questionnaire::{DisplayMode, QuestionSet};

/// Environment variable overriding `api.url`
pub const ENV_API_URL: &str = "UXHF_API_URL";
/// Environment variable overriding `display.mode`
pub const ENV_DISPLAY_MODE: &str = "UXHF_DISPLAY_MODE";
/// Environment variable overriding `display.questions_file`
pub const ENV_QUESTIONS_FILE: &str = "UXHF_QUESTIONS_FILE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_api_url")]
    pub url: String,
    /// Request timeout; absent means wait indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Connection timeout; absent leaves it to the OS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,
    #[serde(default = "default_request_logging")]
    pub request_logging: bool,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_request_logging() -> bool {
    true
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            timeout_secs: None,
            connect_timeout_secs: None,
            request_logging: default_request_logging(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default)]
    pub mode: DisplayMode,
    #[serde(default = "default_front_page")]
    pub front_page: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions_file: Option<PathBuf>,
}

fn default_front_page() -> bool {
    true
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            mode: DisplayMode::default(),
            front_page: default_front_page(),
            questions_file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Config {
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("uxhf-questionnaire")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".uxhf-questionnaire")
        };

        Ok(config_dir)
    }

    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }

    /// Load the config file (or defaults), then apply `.env` and environment overrides
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = Self::get_config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load from a specific path; a missing file yields the defaults
    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using default config");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!(
            "Loaded config: endpoint {}, {} mode",
            config.api.url, config.display.mode
        );
        Ok(config)
    }

    /// Apply overrides looked up by variable name
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            debug!("Overriding api.url from {}", ENV_API_URL);
            self.api.url = url;
        }

        if let Some(mode) = lookup(ENV_DISPLAY_MODE).filter(|v| !v.trim().is_empty()) {
            self.display.mode = mode
                .parse()
                .map_err(|e: String| anyhow::anyhow!("{}: {}", ENV_DISPLAY_MODE, e))?;
            debug!("Overriding display.mode from {}", ENV_DISPLAY_MODE);
        }

        if let Some(path) = lookup(ENV_QUESTIONS_FILE).filter(|v| !v.trim().is_empty()) {
            debug!("Overriding display.questions_file from {}", ENV_QUESTIONS_FILE);
            self.display.questions_file = Some(PathBuf::from(path));
        }

        Ok(())
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", config_path);

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir).with_context(|| {
                    format!("Failed to create config directory: {:?}", config_dir)
                })?;
                info!("Created config directory: {:?}", config_dir);
            }
        }

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    /// Write a default config to `config_path` without reading what is there.
    /// An existing file, parseable or not, is only replaced when `force` is set.
    pub fn init_at(config_path: &Path, force: bool) -> Result<()> {
        if config_path.exists() && !force {
            anyhow::bail!(
                "Config file already exists: {} (use --force to overwrite)",
                config_path.display()
            );
        }

        Self::default().save_to(config_path)
    }

    /// The configured question set, or the built-in one
    pub fn question_set(&self) -> Result<QuestionSet> {
        match &self.display.questions_file {
            Some(path) => QuestionSet::load(path)
                .with_context(|| format!("Failed to load questions from {}", path.display())),
            None => Ok(QuestionSet::builtin()),
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }

    pub fn warn_on_insecure_endpoint(&self) {
        if self.api.url.starts_with("http://") {
            warn!("Analysis endpoint is not using TLS: {}", self.api.url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.url, DEFAULT_API_URL);
        assert_eq!(config.api.timeout_secs, None);
        assert_eq!(config.api.connect_timeout_secs, None);
        assert_eq!(config.display.mode, DisplayMode::Wizard);
        assert!(config.display.front_page);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[api]\ntimeout_secs = 45\nconnect_timeout_secs = 3\n\n[display]\nmode = \"single-page\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api.url, DEFAULT_API_URL);
        assert_eq!(config.api.timeout_secs, Some(45));
        assert_eq!(config.api.connect_timeout_secs, Some(3));
        assert_eq!(config.display.mode, DisplayMode::SinglePage);
        assert!(config.display.front_page);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.api.url = "http://localhost:8080/analyze".to_string();
        config.display.front_page = false;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_init_replaces_malformed_file_only_with_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[display]\nmode = 3\n").unwrap();
        assert!(Config::load_from(&path).is_err());

        assert!(Config::init_at(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[display]\nmode = 3\n");

        Config::init_at(&path, true).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fresh").join("config.toml");

        Config::init_at(&path, false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_API_URL, "http://127.0.0.1:9000/analyze"),
            (ENV_DISPLAY_MODE, "single-page"),
            (ENV_QUESTIONS_FILE, "/tmp/questions.toml"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.api.url, "http://127.0.0.1:9000/analyze");
        assert_eq!(config.display.mode, DisplayMode::SinglePage);
        assert_eq!(
            config.display.questions_file,
            Some(PathBuf::from("/tmp/questions.toml"))
        );
    }

    #[test]
    fn test_bad_mode_override() {
        let mut config = Config::default();
        let result = config.apply_overrides(|key| {
            (key == ENV_DISPLAY_MODE).then(|| "sideways".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_question_set_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("questions.toml");
        fs::write(
            &path,
            "[[questions]]\nprompt = \"Q1\"\noptions = [\"A\", \"B\"]\n",
        )
        .unwrap();

        let mut config = Config::default();
        assert_eq!(config.question_set().unwrap().len(), 30);

        config.display.questions_file = Some(path);
        assert_eq!(config.question_set().unwrap().len(), 1);
    }
}
