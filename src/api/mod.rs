//! Purpose: Define the stable public API boundary for Mapsight.
//! Exports: Engine contract traits, binding, reporter, snapshot, and JSON envelopes.
//! Role: Public, additive-only surface; the supported path to the facade.
//! Invariants: Consumers depend on these names, not on `core` module paths.
//! Invariants: JSON envelope shapes are stable once published; fields are additive-only.

mod json;

pub use crate::core::binding::{BindMode, BindState, EngineBinding};
pub use crate::core::engine::{
    CANONICAL_STORE, DataSource, DataSourceManager, EngineContext, EngineHandle, PoolCounters,
    PoolStatsSource, TransactionModule,
};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::reporter::PoolReporter;
pub use crate::core::snapshot::WindowPoolSnapshot;
pub use json::{snapshot_json, snapshots_json};

pub type ApiResult<T> = Result<T, Error>;
