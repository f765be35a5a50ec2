use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use gatekeep_types::{
    AuthDelay, Captions, FormSettings, NonEmptyString, RetriggerPolicy, ui::UiOptions,
};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "GATEKEEP_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct GatekeepConfig {
    pub app: Option<AppConfig>,
    pub form: Option<FormConfig>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable spinner animation.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct FormConfig {
    /// Caption the email label shows before any interaction.
    pub email_caption: Option<NonEmptyString>,
    /// Caption the password label shows before any interaction.
    pub password_caption: Option<NonEmptyString>,
    /// Simulated round-trip length in milliseconds.
    pub auth_delay_ms: Option<AuthDelay>,
    pub retrigger: Option<RetriggerPolicy>,
}

impl GatekeepConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }

    /// Resolve the `[form]` table, filling gaps with defaults.
    #[must_use]
    pub fn form_settings(&self) -> FormSettings {
        let Some(form) = self.form.as_ref() else {
            return FormSettings::default();
        };
        let defaults = Captions::default();
        FormSettings {
            captions: Captions {
                email: form.email_caption.clone().unwrap_or(defaults.email),
                password: form.password_caption.clone().unwrap_or(defaults.password),
            },
            auth_delay: form.auth_delay_ms.unwrap_or_default(),
            retrigger: form.retrigger.unwrap_or_default(),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(raw) = env::var_os(CONFIG_PATH_ENV)
        && !raw.is_empty()
    {
        return Some(PathBuf::from(raw));
    }
    dirs::home_dir().map(|home| home.join(".gatekeep").join("config.toml"))
}
