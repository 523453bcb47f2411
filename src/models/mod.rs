//! Response models for the remote catalog API
//!
//! This module defines the serde schemas used to decode the JSON bodies the
//! remote API returns, and the rendering of each into terminal lines.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, StatSlot, TypeSlot};
