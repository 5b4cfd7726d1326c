// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum BatchFilesizeError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<BatchFilesizeError>,
    },

    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, BatchFilesizeError>;

/// Every filesystem failure of a run. None of them is recoverable: the batch aborts.
#[derive(Debug, Error)]
pub enum FilesystemError {
    #[error("Scan root '{path}' is not accessible: {source}")]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Scan root '{path}' is not a directory")]
    RootNotDirectory { path: PathBuf },

    #[error("Failed to traverse '{path}': {source}")]
    Traverse {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to stat '{path}': {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create report '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FilesystemError {
    /// Path the failing operation was acting on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::RootInaccessible { path, .. }
            | Self::RootNotDirectory { path }
            | Self::Traverse { path, .. }
            | Self::Stat { path, .. }
            | Self::Create { path, .. }
            | Self::Write { path, .. } => path,
        }
    }
}

pub type FsResult<T> = std::result::Result<T, FilesystemError>;

/// Errors raised while assembling the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid extension '{extension}': {reason}")]
    InvalidExtension { extension: String, reason: String },

    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config '{path}': {details}")]
    Parse {
        format: String,
        path: PathBuf,
        details: String,
    },

    #[error("Unsupported config file format: '{path}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Configuration building failed: {0}")]
    Build(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    pub fn json(path: impl Into<PathBuf>, err: &serde_json::Error) -> Self {
        Self::Parse { format: "JSON".to_string(), path: path.into(), details: err.to_string() }
    }

    pub fn yaml(path: impl Into<PathBuf>, err: &serde_yaml::Error) -> Self {
        Self::Parse { format: "YAML".to_string(), path: path.into(), details: err.to_string() }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<BatchFilesizeError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| BatchFilesizeError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| BatchFilesizeError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
