use crate::models::PlatformKind;

#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("Unknown platform: {0:?}")]
    UnknownPlatform(String),

    /// The registry has no driver for a platform it was expected to cover.
    #[error("Unsupported database platform: {0}")]
    UnsupportedPlatform(PlatformKind),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to read .env file: {0}")]
    Env(#[from] dotenvy::Error),
}

pub type Result<T> = std::result::Result<T, DataSourceError>;
