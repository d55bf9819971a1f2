//! Error types for the adapter crate.

use thiserror::Error;

use crate::config::LayoutId;

/// Errors that can occur while mutating, querying or rendering an adapter.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// A position outside `[0, len)` was passed to a positional operation.
    #[error("position {position} out of bounds for list of length {len}")]
    OutOfBounds { position: usize, len: usize },

    /// The builder was finished without a renderer factory.
    #[error("no row renderer factory supplied")]
    MissingRendererFactory,

    /// A configured layout id is not usable.
    #[error("invalid layout id {0}")]
    InvalidLayout(LayoutId),

    /// Adapter configuration could not be parsed.
    #[error("failed to parse adapter config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Adapter configuration file could not be read.
    #[error("failed to read adapter config: {0}")]
    ConfigIo(#[from] std::io::Error),
}

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;
