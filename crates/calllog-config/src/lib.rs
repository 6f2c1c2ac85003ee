use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use calllog_core::rules::PageSize;
use calllog_core::time::DisplayZone;
use calllog_core::view::ViewOptions;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "calllog";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub default_page_size: PageSize,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub timezone: DisplayTimezone,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTimezone {
    #[default]
    Local,
    Utc,
}

impl DisplayTimezone {
    pub fn zone(self) -> DisplayZone {
        match self {
            DisplayTimezone::Local => DisplayZone::Local,
            DisplayTimezone::Utc => DisplayZone::utc(),
        }
    }
}

impl AppConfig {
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            zone: self.display.timezone.zone(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_page_size: PageSize::default(),
            display: DisplayConfig {
                timezone: DisplayTimezone::default(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid default_page_size value: {0} (expected 25, 50, 100 or 200)")]
    InvalidPageSize(u32),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_page_size: Option<u32>,
    display: Option<DisplayFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DisplayFile {
    timezone: Option<DisplayTimezone>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(size) = parsed.default_page_size {
        config.default_page_size =
            PageSize::try_from(size).map_err(|_| ConfigError::InvalidPageSize(size))?;
    }

    if let Some(display) = parsed.display {
        if let Some(timezone) = display.timezone {
            config.display.timezone = timezone;
        }
    }

    Ok(config)
}
