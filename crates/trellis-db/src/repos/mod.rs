//! Repository modules.
//!
//! Each module adds methods to `TrellisDb` via `impl TrellisDb` blocks.

pub mod audit_logs;
