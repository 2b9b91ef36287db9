// Immutable per-pool snapshot records captured at query time.
use serde::{Deserialize, Serialize};

use crate::core::engine::PoolCounters;

/// Point-in-time statistics for one memory-mapped window pool.
///
/// Every field is copied at the instant of aggregation; a snapshot never
/// changes after construction and never reflects pool activity occurring
/// after the query returned. Counters are cumulative since pool creation,
/// not since the last query.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct WindowPoolSnapshot {
    /// Store file the pool backs. Unique within one query result, not across
    /// time if files are renamed.
    pub name: String,
    pub available_memory: u64,
    pub used_memory: u64,
    pub window_count: u64,
    pub window_size: u64,
    pub hit_count: u64,
    pub miss_count: u64,
    pub oom_count: u64,
}

impl WindowPoolSnapshot {
    /// Copies the current counter values into an immutable record.
    pub fn capture(counters: &dyn PoolCounters) -> Self {
        Self {
            name: counters.name().to_string(),
            available_memory: counters.available_memory(),
            used_memory: counters.used_memory(),
            window_count: counters.window_count(),
            window_size: counters.window_size(),
            hit_count: counters.hit_count(),
            miss_count: counters.miss_count(),
            oom_count: counters.oom_count(),
        }
    }
}
