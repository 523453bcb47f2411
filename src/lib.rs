//! Pokedex - An interactive Pokédex CLI backed by a TTL-expiring response cache
//!
//! Browses the remote catalog with `map`/`explore`, catches and inspects
//! pokemon, and memoizes every page it renders.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
mod tasks;

pub use cache::{CachedResponse, TimedCache};
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::AppState;
