//! Purpose: Resolve and hold the facade's reference to the engine's statistics source.
//! Exports: `BindMode`, `BindState`, `EngineBinding`.
//! Role: Lazy, write-once binding between the monitoring facade and the engine kernel.
//! Invariants: The resolved handle is written once and reused; a torn-down source never rebinds.
//! Invariants: Zero, duplicate, and capability-less canonical matches are the same failure.

use std::sync::{Arc, OnceLock, Weak};

use crate::core::engine::{
    CANONICAL_STORE, DataSource, EngineContext, EngineHandle, PoolStatsSource,
};
use crate::core::error::{Error, ErrorKind};

/// Lookup strategy for locating the canonical data source.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BindMode {
    /// Resolve through the standard registration view of the kernel context.
    Standard,
    /// Traverse the transaction module's data-source manager directly.
    DirectManagerLookup,
}

/// Facade-level binding state: `Unbound` until the first successful
/// resolution, `Bound` while the source is alive, `Unavailable` once the
/// bound source has been torn down. `Unavailable` is terminal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BindState {
    Unbound,
    Bound,
    Unavailable,
}

/// Holds at most one reference to the active engine's statistics source.
///
/// The handle is retained weakly so the binding never keeps a shut-down
/// engine alive; the engine dropping its source is exactly the
/// `SourceUnavailable` condition.
pub struct EngineBinding {
    context: Arc<dyn EngineContext>,
    mode: BindMode,
    handle: OnceLock<Weak<dyn PoolStatsSource>>,
}

impl std::fmt::Debug for EngineBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineBinding")
            .field("mode", &self.mode)
            .field("state", &self.state())
            .finish()
    }
}

impl EngineBinding {
    /// Binds through the standard registration path, resolving eagerly and
    /// failing fast when the engine does not expose a compliant source.
    pub fn standard(context: Arc<dyn EngineContext>) -> Result<Self, Error> {
        let binding = Self::unresolved(context, BindMode::Standard);
        binding.source()?;
        Ok(binding)
    }

    /// Binds by direct manager lookup. Construction always succeeds;
    /// resolution is deferred to the first statistics query, so the binding
    /// can be created before the transactional subsystem is available.
    pub fn direct_manager_lookup(context: Arc<dyn EngineContext>) -> Self {
        Self::unresolved(context, BindMode::DirectManagerLookup)
    }

    fn unresolved(context: Arc<dyn EngineContext>, mode: BindMode) -> Self {
        Self {
            context,
            mode,
            handle: OnceLock::new(),
        }
    }

    pub fn mode(&self) -> BindMode {
        self.mode
    }

    pub fn state(&self) -> BindState {
        match self.handle.get() {
            None => BindState::Unbound,
            Some(bound) if bound.strong_count() == 0 => BindState::Unavailable,
            Some(_) => BindState::Bound,
        }
    }

    /// Returns the live engine handle, resolving it on first use.
    ///
    /// A failed resolution leaves the binding unbound, so the next query
    /// re-attempts the lookup. Once bound, a source that has since been torn
    /// down reports `SourceUnavailable` on every call; the binding never
    /// resolves a replacement.
    pub fn source(&self) -> Result<EngineHandle, Error> {
        if let Some(bound) = self.handle.get() {
            return upgrade(bound);
        }
        let resolved = resolve(self.context.as_ref(), self.mode)?;
        let bound = self.handle.get_or_init(|| Arc::downgrade(&resolved));
        upgrade(bound)
    }
}

fn upgrade(bound: &Weak<dyn PoolStatsSource>) -> Result<EngineHandle, Error> {
    bound.upgrade().ok_or_else(|| {
        Error::new(ErrorKind::SourceUnavailable)
            .with_message("bound statistics source has been torn down")
            .with_data_source(CANONICAL_STORE)
    })
}

fn resolve(context: &dyn EngineContext, mode: BindMode) -> Result<EngineHandle, Error> {
    let candidates = match mode {
        BindMode::Standard => context.data_sources(),
        BindMode::DirectManagerLookup => context
            .transaction_module()
            .ok_or_else(|| {
                Error::new(ErrorKind::NoSuchDataSource)
                    .with_message("transaction module is not available")
                    .with_data_source(CANONICAL_STORE)
            })?
            .data_source_manager()
            .data_sources(),
    };

    let matched: Vec<Arc<dyn DataSource>> = candidates
        .into_iter()
        .filter(|source| source.name() == CANONICAL_STORE)
        .collect();

    let canonical = match matched.as_slice() {
        [canonical] => Arc::clone(canonical),
        _ => {
            return Err(Error::new(ErrorKind::NoSuchDataSource)
                .with_message("expected exactly one canonical data source")
                .with_data_source(CANONICAL_STORE)
                .with_matches(matched.len()));
        }
    };

    canonical.pool_stats().ok_or_else(|| {
        Error::new(ErrorKind::NoSuchDataSource)
            .with_message("canonical data source does not expose window pool statistics")
            .with_data_source(CANONICAL_STORE)
    })
}
