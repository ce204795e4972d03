//! Error type shared by the configuration layer and the frame driver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// The host handed `tick` a negative or non-finite elapsed time
    #[error("invalid elapsed time {0}: must be finite and non-negative")]
    InvalidElapsed(f64),

    #[error("invalid scenario configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse scenario YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
