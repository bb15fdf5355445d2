use std::path::Path;

use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Looked up in the working directory when `--config` is not given.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["reqgate.toml", "reqgate.json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn for_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some(ext) => Err(ConfigError::UnsupportedExtension {
                ext: ext.to_owned(),
            }),
            None => Err(ConfigError::MissingExtension),
        }
    }

    fn parse(self, path: &Path, content: &str) -> Result<ConfigFile, ConfigError> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|err| ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            }),
            Self::Json => serde_json::from_str(content).map_err(|err| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            }),
        }
    }
}

impl ConfigFile {
    /// Reads and parses `path`, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown extension, an unreadable file or
    /// malformed content.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let format = ConfigFormat::for_path(path).map_err(AppError::config)?;
        let content = std::fs::read_to_string(path).map_err(|err| {
            AppError::config(ConfigError::ReadConfig {
                path: path.to_path_buf(),
                source: err,
            })
        })?;
        format.parse(path, &content).map_err(AppError::config)
    }
}

/// Loads the explicit config file, or the first default file that exists.
/// Without either, the CLI values stand alone.
///
/// # Errors
///
/// Returns an error when the chosen file cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> AppResult<Option<ConfigFile>> {
    let chosen = match path {
        Some(path) => Some(Path::new(path)),
        None => DEFAULT_CONFIG_FILES
            .iter()
            .map(Path::new)
            .find(|candidate| candidate.exists()),
    };
    chosen.map(ConfigFile::from_path).transpose()
}
