//! Error types for the Pokédex CLI
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokédex CLI.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache constructed with a zero TTL
    #[error("cache TTL must be greater than zero")]
    InvalidTtl,

    /// HTTP request failed before a response arrived
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("request to {url} failed with status {status}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Response body could not be decoded
    #[error("could not parse response: {0}")]
    Json(#[from] serde_json::Error),

    /// Input line did not start with a known command
    #[error("unknown command '{0}', type 'help' for usage")]
    UnknownCommand(String),

    /// Command needs an argument that was not given
    #[error("usage: {0}")]
    MissingArgument(&'static str),

    /// Reading from or writing to the terminal failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokédex CLI.
pub type Result<T> = std::result::Result<T, PokedexError>;
