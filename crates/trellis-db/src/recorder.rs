//! Audit log recording.
//!
//! [`AuditRecorder`] is the single write path for audit entries. The caller
//! supplies what happened (org, action, entity); who did it always comes from
//! the injected [`IdentityResolver`], resolved before anything is written.

use thiserror::Error;
use trellis_core::entities::{AuditLog, NewAuditLog};
use trellis_core::errors::{CoreError, ErrorCode};
use trellis_core::identity::IdentityResolver;

use crate::TrellisDb;
use crate::error::DatabaseError;
use crate::repos::audit_logs::AuditLogRow;

/// Errors from recording an audit entry.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The entry itself is unusable (no organization, unknown action).
    #[error("invalid audit log entry: {0}")]
    InvalidEntry(#[from] CoreError),

    /// Nobody is signed in for the current request.
    #[error("user not authenticated")]
    UnauthenticatedActor,

    /// The identity provider failed while resolving the actor.
    #[error("identity lookup failed: {0}")]
    IdentityLookup(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The store rejected or failed the insert.
    #[error("failed to persist audit log: {0}")]
    Persistence(#[from] DatabaseError),
}

impl AuditError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidEntry(_) => ErrorCode::BadRequest,
            Self::UnauthenticatedActor => ErrorCode::Unauthorized,
            Self::IdentityLookup(_) | Self::Persistence(_) => ErrorCode::InternalServerError,
        }
    }
}

/// Records audit entries attributed to the resolved actor.
pub struct AuditRecorder<'a, R> {
    db: &'a TrellisDb,
    resolver: R,
}

impl<'a, R: IdentityResolver> AuditRecorder<'a, R> {
    pub const fn new(db: &'a TrellisDb, resolver: R) -> Self {
        Self { db, resolver }
    }

    /// Validate, attribute and persist one audit entry.
    ///
    /// Failures are logged and returned unchanged; nothing is written unless
    /// an actor was resolved.
    ///
    /// # Errors
    ///
    /// - `AuditError::InvalidEntry` if the entry has no org id or an unknown action.
    /// - `AuditError::IdentityLookup` if the identity provider fails.
    /// - `AuditError::UnauthenticatedActor` if nobody is signed in.
    /// - `AuditError::Persistence` if the insert fails.
    pub async fn record(&self, entry: NewAuditLog) -> Result<AuditLog, AuditError> {
        match self.try_record(&entry).await {
            Ok(log) => {
                tracing::debug!(
                    id = log.id,
                    org_id = %log.org_id,
                    action = %log.action,
                    entity_type = %log.entity_type,
                    entity_id = log.entity_id,
                    "recorded audit log"
                );
                Ok(log)
            }
            Err(error) => {
                tracing::error!(
                    %error,
                    org_id = %entry.org_id,
                    action = %entry.action,
                    entity_type = %entry.entity_type,
                    entity_id = entry.entity_id,
                    "audit log error"
                );
                Err(error)
            }
        }
    }

    async fn try_record(&self, entry: &NewAuditLog) -> Result<AuditLog, AuditError> {
        entry.validate()?;

        let actor = self
            .resolver
            .current_user()
            .await
            .map_err(|e| AuditError::IdentityLookup(Box::new(e)))?
            .ok_or(AuditError::UnauthenticatedActor)?;

        let row = AuditLogRow::new(entry, &actor);
        Ok(self.db.insert_audit_log(&row).await?)
    }
}
