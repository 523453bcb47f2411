//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the cache.
//!
//! # Tasks
//! - TTL Sweep: Removes expired cache entries once per period

mod sweep;

pub(crate) use sweep::spawn_sweep_task;
