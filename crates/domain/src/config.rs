// crates/domain/src/config.rs
use std::path::{Path, PathBuf};

use batch_filesize_shared_kernel::{ConfigError, ConfigResult};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

pub const DEFAULT_EXTENSION: &str = ".mp4";
pub const DEFAULT_ROOT: &str = ".";

/// Resolved configuration of a single report run, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), build_fn(private, name = "build_unchecked"))]
pub struct ScanConfig {
    /// Directory scanned recursively.
    #[builder(default = "PathBuf::from(DEFAULT_ROOT)")]
    pub root: PathBuf,
    /// Target file name suffix, leading dot included.
    #[builder(default = "DEFAULT_EXTENSION.to_string()")]
    pub extension: String,
    /// Report destination. `None` means [`ScanConfig::default_output`].
    #[builder(default)]
    pub output: Option<PathBuf>,
    #[builder(default)]
    pub include_hidden: bool,
    #[builder(default = "true")]
    pub follow_links: bool,
    #[builder(default)]
    pub sort: bool,
    #[builder(default)]
    pub quiet: bool,
}

impl ScanConfigBuilder {
    /// Build and validate the configuration.
    pub fn build(&self) -> ConfigResult<ScanConfig> {
        let config = self.build_unchecked().map_err(|e| ConfigError::Build(e.to_string()))?;
        validate_extension(&config.extension)?;
        Ok(config)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            output: None,
            include_hidden: false,
            follow_links: true,
            sort: false,
            quiet: false,
        }
    }
}

impl ScanConfig {
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// `log-size-<ext>.csv` in the working directory, `<ext>` being the extension without its dot.
    pub fn default_output(extension: &str) -> PathBuf {
        PathBuf::from(format!("log-size-{}.csv", extension.trim_start_matches('.')))
    }

    pub fn report_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| Self::default_output(&self.extension))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Extensions are matched as plain name suffixes, so they must look like one.
pub fn validate_extension(extension: &str) -> ConfigResult<()> {
    let invalid = |reason: &str| ConfigError::InvalidExtension {
        extension: extension.to_string(),
        reason: reason.to_string(),
    };

    if extension.len() < 2 {
        return Err(invalid("must contain at least one character after the dot"));
    }
    if !extension.starts_with('.') {
        return Err(invalid("must start with '.'"));
    }
    if extension.contains(['/', '\\']) {
        return Err(invalid("must not contain a path separator"));
    }
    Ok(())
}

/// Partially specified configuration, as read from a config file or the command line.
///
/// Layers are merged with [`ScanSettings::overlay`]; unset fields fall back to the
/// [`ScanConfig`] defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "snake_case")]
pub struct ScanSettings {
    pub root: Option<PathBuf>,
    pub extension: Option<String>,
    pub output: Option<PathBuf>,
    pub include_hidden: Option<bool>,
    pub follow_links: Option<bool>,
    pub sort: Option<bool>,
    pub quiet: Option<bool>,
}

impl ScanSettings {
    /// Fields set in `upper` win over the ones in `self`.
    #[must_use]
    pub fn overlay(self, upper: Self) -> Self {
        Self {
            root: upper.root.or(self.root),
            extension: upper.extension.or(self.extension),
            output: upper.output.or(self.output),
            include_hidden: upper.include_hidden.or(self.include_hidden),
            follow_links: upper.follow_links.or(self.follow_links),
            sort: upper.sort.or(self.sort),
            quiet: upper.quiet.or(self.quiet),
        }
    }

    pub fn into_config(self) -> ConfigResult<ScanConfig> {
        let mut builder = ScanConfig::builder();
        if let Some(root) = self.root {
            builder.root(root);
        }
        if let Some(extension) = self.extension {
            builder.extension(extension);
        }
        builder.output(self.output);
        if let Some(hidden) = self.include_hidden {
            builder.include_hidden(hidden);
        }
        if let Some(follow) = self.follow_links {
            builder.follow_links(follow);
        }
        if let Some(sort) = self.sort {
            builder.sort(sort);
        }
        if let Some(quiet) = self.quiet {
            builder.quiet(quiet);
        }
        builder.build()
    }
}
