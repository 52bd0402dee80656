use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No command bound to the remote control")]
    NoCommandBound,

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CatalogError {
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Returns true for the invalid-argument family of failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
