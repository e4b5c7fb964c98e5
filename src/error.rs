use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a generation run once usage has been checked.
#[derive(Debug, Error)]
pub enum PomError {
    #[error("invalid project name {0:?}: project name must have letters, numbers or dash")]
    InvalidProjectName(String),

    #[error("malformed dependency field {field:?} in {descriptor:?}, expected key=value")]
    MalformedDependency { descriptor: String, field: String },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Io,
    Config,
}

impl PomError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PomError::InvalidProjectName(_) | PomError::MalformedDependency { .. } => {
                ErrorKind::Validation
            }
            PomError::CreateDir { .. } | PomError::Io { .. } => ErrorKind::Io,
            PomError::ConfigRead { .. } | PomError::ConfigParse { .. } => ErrorKind::Config,
        }
    }
}

pub type PomResult<T> = Result<T, PomError>;
