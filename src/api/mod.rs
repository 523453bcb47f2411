//! API Module
//!
//! HTTP client for the remote catalog API.
//!
//! # Endpoints
//! - `GET /location-area/?offset=N&limit=N` - Paginated location-area listing
//! - `GET /location-area/{name}` - Encounters in one location area
//! - `GET /pokemon/{name}` - One pokemon record

mod client;

pub use client::{PokeApiClient, DEFAULT_BASE_URL};
