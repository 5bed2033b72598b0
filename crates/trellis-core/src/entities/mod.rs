//! Entity structs for Trellis audit logging.
//!
//! `AuditLog` maps to the `audit_logs` table. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON output and schema validation.

mod audit_log;

pub use audit_log::{AuditLog, NewAuditLog};
