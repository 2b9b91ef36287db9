//! Purpose: Shared library crate for the Mapsight window-pool monitoring facade.
//! Exports: `api` (stable public boundary) and `core` (engine contract, binding, reporting).
//! Role: Read-only statistics facade over a storage engine's memory-mapped store files.
//! Invariants: The facade never mutates engine state and never caches query results.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod api;
pub mod core;
