use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Action, EntityType};
use crate::errors::CoreError;

/// An immutable audit log entry as stored, including the actor snapshot taken
/// at write time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditLog {
    pub id: i64,
    pub org_id: String,
    #[schemars(with = "String")]
    pub action: Action,
    pub entity_id: i64,
    pub entity_type: EntityType,
    pub entity_title: String,
    pub user_id: String,
    pub user_image: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

impl AuditLog {
    /// One-line activity feed message, e.g. `created board "Roadmap"`.
    #[must_use]
    pub fn message(&self) -> String {
        crate::message::generate_log_message(self)
    }
}

/// Input for recording an audit entry.
///
/// Carries no actor fields: the recorder resolves who performed the action.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewAuditLog {
    pub org_id: String,
    #[schemars(with = "String")]
    pub action: Action,
    pub entity_id: i64,
    pub entity_type: EntityType,
    pub entity_title: String,
}

impl NewAuditLog {
    #[must_use]
    pub fn new(
        org_id: impl Into<String>,
        action: Action,
        entity_id: i64,
        entity_type: EntityType,
        entity_title: impl Into<String>,
    ) -> Self {
        Self {
            org_id: org_id.into(),
            action,
            entity_id,
            entity_type,
            entity_title: entity_title.into(),
        }
    }

    /// Check the entry can be persisted: scoped to an organization and
    /// describing a known action.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `org_id` is empty or the action is
    /// not one of the known mutations.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.org_id.is_empty() {
            return Err(CoreError::Validation(
                "audit log entry requires an organization id".into(),
            ));
        }
        if !self.action.is_known() {
            return Err(CoreError::Validation(format!(
                "'{}' is not a recordable audit action",
                self.action
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewAuditLog {
        NewAuditLog::new("org_abc", Action::Create, 7, EntityType::Board, "Roadmap")
    }

    #[test]
    fn valid_entry_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn empty_org_is_rejected() {
        let entry = NewAuditLog {
            org_id: String::new(),
            ..sample()
        };
        let err = entry.validate().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn org_id_is_accepted_verbatim() {
        let entry = NewAuditLog {
            org_id: "   ".into(),
            ..sample()
        };
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn unrecognized_action_is_rejected() {
        let entry = NewAuditLog {
            action: Action::from("ARCHIVE"),
            ..sample()
        };
        let err = entry.validate().unwrap_err();
        assert!(err.to_string().contains("ARCHIVE"));
    }

    #[test]
    fn message_delegates_to_formatter() {
        let log = AuditLog {
            id: 1,
            org_id: "org_abc".into(),
            action: Action::Update,
            entity_id: 3,
            entity_type: EntityType::List,
            entity_title: "Backlog".into(),
            user_id: "user_1".into(),
            user_image: String::new(),
            user_name: "Ada Lovelace".into(),
            created_at: Utc::now(),
        };
        assert_eq!(log.message(), "updated list \"Backlog\"");
    }
}
