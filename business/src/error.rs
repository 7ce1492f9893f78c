use thiserror::Error;

/// Rejected table configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("page size must be greater than zero")]
    ZeroPageSize,
    #[error("page size options must not be empty")]
    EmptyPageSizeOptions,
    #[error("page size option at position {index} is zero")]
    ZeroPageSizeOption { index: usize },
    #[error("failed to parse table config: {0}")]
    Parse(#[from] serde_json::Error),
}
