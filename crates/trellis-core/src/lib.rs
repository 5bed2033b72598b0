//! # trellis-core
//!
//! Core types shared across all Trellis crates.
//!
//! - Action and entity type enums recorded in the audit log
//! - Audit log entities (stored record and recorder input)
//! - Tenant-scoped request identity and the actor resolution capability
//! - Cross-cutting error types and RPC error codes
//! - The activity feed message formatter

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod message;

pub use message::generate_log_message;
