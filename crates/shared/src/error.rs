use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config field `{0}` is missing or empty")]
    Empty(&'static str),
    #[error("Config field `logLevel` has an unknown level: {0}")]
    LogLevel(String),
    #[error("Config object could not be deserialized: {0}")]
    Deserialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Push data is not a valid payload: {0}")]
    Json(#[from] serde_json::Error),
}
