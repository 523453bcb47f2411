//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Weak;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheState;

/// Spawns a background task that evicts aged cache entries once per `period`.
///
/// The task holds only a `Weak` back-reference to the cache state, so it
/// never keeps the cache alive on its own: once every handle is dropped the
/// next tick fails to upgrade and the loop exits. Callers can also stop it
/// early by aborting the returned handle.
///
/// # Arguments
/// * `state` - Weak reference to the shared cache state
/// * `period` - Time between sweep runs, normally equal to the TTL
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during shutdown.
pub(crate) fn spawn_sweep_task(state: Weak<CacheState>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting TTL sweep task with period of {:?}", period);

        let mut ticker = tokio::time::interval(period);
        // The first tick completes immediately; consume it so the first real
        // sweep lands one full period after construction.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let Some(state) = state.upgrade() else {
                info!("Cache dropped, stopping TTL sweep task");
                break;
            };

            let removed = state.remove_expired().await;

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
