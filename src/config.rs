// src/config.rs
use std::{
    fs,
    path::Path,
};

use batch_filesize_domain::{ScanConfig, ScanSettings};
use batch_filesize_shared_kernel::{ConfigError, ConfigResult};

use crate::args::Args;

/// Resolve the run configuration: command line over config file over defaults.
pub fn resolve(args: &Args) -> ConfigResult<ScanConfig> {
    let file_settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => ScanSettings::default(),
    };
    file_settings.overlay(args.settings()).into_config()
}

/// Load partial settings from a JSON or YAML file, chosen by extension.
pub fn load_settings(path: &Path) -> ConfigResult<ScanSettings> {
    let format = SettingsFormat::from_path(path)?;
    let text = fs::read_to_string(path)
        .map_err(|source| ConfigError::FileRead { path: path.to_path_buf(), source })?;
    let mut settings = format.parse(path, &text)?;
    anchor_relative_paths(&mut settings, path);
    log::debug!("loaded settings from {}: {settings:?}", path.display());
    Ok(settings)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsFormat {
    Json,
    Yaml,
}

impl SettingsFormat {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(ConfigError::UnsupportedFormat { path: path.to_path_buf() }),
        }
    }

    fn parse(self, path: &Path, text: &str) -> ConfigResult<ScanSettings> {
        match self {
            Self::Json => serde_json::from_str(text).map_err(|e| ConfigError::json(path, &e)),
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| ConfigError::yaml(path, &e)),
        }
    }
}

// Paths inside a config file are relative to the file, not to the working directory.
fn anchor_relative_paths(settings: &mut ScanSettings, config_path: &Path) {
    let Some(base) = config_path.parent() else {
        return;
    };
    for path in [settings.root.as_mut(), settings.output.as_mut()].into_iter().flatten() {
        if path.is_relative() {
            *path = base.join(&*path);
        }
    }
}
