use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarpentryError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CarpentryError>;

// Helper conversions
impl From<config::ConfigError> for CarpentryError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
