use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error("{what} not found: {}", path.display())]
    MissingInput { what: &'static str, path: PathBuf },

    #[error("Malformed metadata in {}: {reason}", path.display())]
    MalformedMetadata { path: PathBuf, reason: String },

    #[error("Invalid {what} '{value}': must be a single non-empty path component")]
    InvalidName { what: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

impl Error {
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        Error::Custom(msg.into())
    }

    pub fn missing<P: Into<PathBuf>>(what: &'static str, path: P) -> Self {
        Error::MissingInput {
            what,
            path: path.into(),
        }
    }

    pub fn malformed<P: Into<PathBuf>, R: Into<String>>(path: P, reason: R) -> Self {
        Error::MalformedMetadata {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
