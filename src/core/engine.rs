//! Purpose: Define the engine-side contract the monitoring facade consumes.
//! Exports: `PoolCounters`, `PoolStatsSource`, `DataSource`, `DataSourceManager`,
//! `TransactionModule`, `EngineContext`, `EngineHandle`, `CANONICAL_STORE`.
//! Role: Capability seam between the live storage engine and the facade.
//! Invariants: All traits are read-only views; implementations must be safe for concurrent reads.
//! Invariants: Dropping the engine's `Arc<dyn PoolStatsSource>` is the teardown signal.

use std::sync::Arc;

/// Well-known logical name the canonical record store's data source is
/// registered under.
pub const CANONICAL_STORE: &str = "recordstore";

/// The statistics handle both binding modes converge on.
pub type EngineHandle = Arc<dyn PoolStatsSource>;

/// Live counters for one store file's pool of memory-mapped windows.
///
/// Counters are cumulative since pool creation; the engine keeps advancing
/// them while application traffic touches the store. Accessors read the
/// current value and must be safe to call concurrently with engine writes.
pub trait PoolCounters: Send + Sync {
    /// Store file this pool backs.
    fn name(&self) -> &str;

    /// Memory budget not currently occupied by mapped windows, in bytes.
    fn available_memory(&self) -> u64;

    /// Memory currently occupied by mapped windows, in bytes.
    fn used_memory(&self) -> u64;

    /// Number of windows currently mapped.
    fn window_count(&self) -> u64;

    /// Size of each window in bytes; pools use a uniform window size.
    fn window_size(&self) -> u64;

    /// Accesses satisfied by an already-mapped window.
    fn hit_count(&self) -> u64;

    /// Accesses that required a new mapping.
    fn miss_count(&self) -> u64;

    /// Attempted mappings that failed due to memory exhaustion.
    fn oom_count(&self) -> u64;
}

/// The engine's live registry of window pools for one data source.
pub trait PoolStatsSource: Send + Sync + std::fmt::Debug {
    /// Current pool counter collection, in source iteration order.
    fn window_pool_stats(&self) -> Vec<Arc<dyn PoolCounters>>;
}

/// One data source registered with the engine.
pub trait DataSource: Send + Sync {
    /// Logical name the source is registered under.
    fn name(&self) -> &str;

    /// Capability probe: `Some` when this source manages memory-mapped store
    /// files and can report window-pool statistics, `None` otherwise.
    fn pool_stats(&self) -> Option<EngineHandle>;
}

/// The transaction module's registry of data sources.
pub trait DataSourceManager: Send + Sync {
    fn data_sources(&self) -> Vec<Arc<dyn DataSource>>;
}

/// Engine-internal transaction module.
pub trait TransactionModule: Send + Sync {
    fn data_source_manager(&self) -> Arc<dyn DataSourceManager>;
}

/// Explicit handle to the running engine kernel.
///
/// Passed to the facade at construction instead of the facade reaching into
/// ambient global state.
pub trait EngineContext: Send + Sync {
    /// Data sources visible through the standard registration path.
    fn data_sources(&self) -> Vec<Arc<dyn DataSource>>;

    /// `None` while the transactional subsystem is still starting.
    fn transaction_module(&self) -> Option<Arc<dyn TransactionModule>>;
}
