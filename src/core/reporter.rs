//! Purpose: Produce ordered, immutable window-pool snapshot sequences on demand.
//! Exports: `PoolReporter`.
//! Role: The facade's single read operation over the bound engine handle.
//! Invariants: Output order and length match the source collection at call time.
//! Invariants: Every query is a fresh read; nothing is cached across calls.

use std::sync::Arc;

use crate::core::binding::EngineBinding;
use crate::core::engine::EngineContext;
use crate::core::error::Error;
use crate::core::snapshot::WindowPoolSnapshot;

/// Read-only reporter republishing the engine's live pool counters as
/// immutable snapshot records.
pub struct PoolReporter {
    binding: EngineBinding,
}

impl std::fmt::Debug for PoolReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoolReporter")
            .field("binding", &self.binding)
            .finish()
    }
}

impl PoolReporter {
    pub fn new(binding: EngineBinding) -> Self {
        Self { binding }
    }

    /// Standard registration path; fails fast when the engine does not
    /// expose a compliant statistics source.
    pub fn standard(context: Arc<dyn EngineContext>) -> Result<Self, Error> {
        Ok(Self::new(EngineBinding::standard(context)?))
    }

    /// Management-extension path; the engine is bound on the first query.
    pub fn direct_manager_lookup(context: Arc<dyn EngineContext>) -> Self {
        Self::new(EngineBinding::direct_manager_lookup(context))
    }

    pub fn binding(&self) -> &EngineBinding {
        &self.binding
    }

    /// Returns one snapshot for each pool of memory-mapped regions from
    /// store files with memory mapping enabled.
    ///
    /// The sequence preserves the source collection's iteration order at the
    /// moment of the call: no pool is synthesized, merged, or dropped, and an
    /// engine reporting no pools yields an empty sequence. A binding whose
    /// source is gone fails with `SourceUnavailable` rather than returning
    /// partial or stale data.
    pub fn pools(&self) -> Result<Vec<WindowPoolSnapshot>, Error> {
        let source = self.binding.source()?;
        let stats = source.window_pool_stats();
        Ok(stats
            .iter()
            .map(|counters| WindowPoolSnapshot::capture(counters.as_ref()))
            .collect())
    }
}
