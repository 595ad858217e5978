use thiserror::Error;

/// Canonical result for the workspace edges.
pub type Result<T> = std::result::Result<T, Error>;

/// Sequences themselves never fail; these cover configuration and bounded
/// materialization.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid value for environment variable {var}: '{value}'")]
    Env { var: &'static str, value: String },

    #[error("materialization limit of {limit} elements exceeded")]
    MaterializeLimit { limit: usize },
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
