//! Audit log repository.
//!
//! Append-only: entries are inserted once and read back, never updated or
//! deleted through this crate. Every read is scoped to one organization.

use trellis_core::entities::{AuditLog, NewAuditLog};
use trellis_core::enums::{Action, EntityType};
use trellis_core::identity::CurrentUser;

use crate::TrellisDb;
use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};

const DEFAULT_LIMIT: u32 = 100;

const SELECT_COLUMNS: &str = "id, org_id, action, entity_id, entity_type, entity_title, \
                              user_id, user_image, user_name, created_at";

/// Filter criteria for audit log listings within an organization.
#[derive(Debug, Default, Clone)]
pub struct AuditLogFilter {
    pub entity_type: Option<EntityType>,
    pub entity_id: Option<i64>,
    pub action: Option<Action>,
    pub limit: Option<u32>,
}

impl AuditLogFilter {
    /// Entries for one entity, e.g. the activity panel of a single card.
    #[must_use]
    pub const fn for_entity(entity_type: EntityType, entity_id: i64) -> Self {
        Self {
            entity_type: Some(entity_type),
            entity_id: Some(entity_id),
            action: None,
            limit: None,
        }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A fully attributed row ready for insertion.
///
/// Only constructible from a recorder input plus a resolved actor, so the
/// actor columns never come from the caller.
#[derive(Debug, Clone)]
pub(crate) struct AuditLogRow<'a> {
    entry: &'a NewAuditLog,
    user_id: &'a str,
    user_image: &'a str,
    user_name: String,
}

impl<'a> AuditLogRow<'a> {
    pub(crate) fn new(entry: &'a NewAuditLog, actor: &'a CurrentUser) -> Self {
        Self {
            entry,
            user_id: &actor.id,
            user_image: &actor.image_url,
            user_name: actor.display_name(),
        }
    }
}

fn row_to_audit_log(row: &libsql::Row) -> Result<AuditLog, DatabaseError> {
    Ok(AuditLog {
        id: row.get::<i64>(0)?,
        org_id: row.get::<String>(1)?,
        action: Action::from(row.get::<String>(2)?),
        entity_id: row.get::<i64>(3)?,
        entity_type: parse_enum(&row.get::<String>(4)?)?,
        entity_title: row.get::<String>(5)?,
        user_id: row.get::<String>(6)?,
        user_image: row.get::<String>(7)?,
        user_name: row.get::<String>(8)?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

impl TrellisDb {
    /// Insert one audit row and return it with the store-assigned id and timestamp.
    pub(crate) async fn insert_audit_log(
        &self,
        row: &AuditLogRow<'_>,
    ) -> Result<AuditLog, DatabaseError> {
        let sql = format!(
            "INSERT INTO audit_logs (org_id, action, entity_id, entity_type, entity_title, user_id, user_image, user_name)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             RETURNING {SELECT_COLUMNS}"
        );
        let mut rows = self
            .conn()
            .query(
                &sql,
                libsql::params![
                    row.entry.org_id.as_str(),
                    row.entry.action.as_str(),
                    row.entry.entity_id,
                    row.entry.entity_type.as_str(),
                    row.entry.entity_title.as_str(),
                    row.user_id,
                    row.user_image,
                    row.user_name.as_str()
                ],
            )
            .await?;

        let stored = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_audit_log(&stored)
    }

    /// Fetch one entry by id within an organization.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the entry does not exist or belongs
    /// to another organization.
    pub async fn get_audit_log(&self, org_id: &str, id: i64) -> Result<AuditLog, DatabaseError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM audit_logs WHERE org_id = ?1 AND id = ?2");
        let mut rows = self.conn().query(&sql, libsql::params![org_id, id]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_audit_log(&row)
    }

    /// List an organization's entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a stored row cannot be parsed.
    pub async fn list_audit_logs(
        &self,
        org_id: &str,
        filter: &AuditLogFilter,
    ) -> Result<Vec<AuditLog>, DatabaseError> {
        let mut conditions = vec!["org_id = ?1".to_string()];
        let mut params: Vec<libsql::Value> = vec![org_id.into()];

        if let Some(et) = filter.entity_type {
            params.push(et.as_str().into());
            conditions.push(format!("entity_type = ?{}", params.len()));
        }
        if let Some(eid) = filter.entity_id {
            params.push(eid.into());
            conditions.push(format!("entity_id = ?{}", params.len()));
        }
        if let Some(ref action) = filter.action {
            params.push(action.as_str().into());
            conditions.push(format!("action = ?{}", params.len()));
        }

        let limit = filter.limit.unwrap_or(DEFAULT_LIMIT);
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM audit_logs WHERE {}
             ORDER BY created_at DESC, id DESC LIMIT {limit}",
            conditions.join(" AND ")
        );

        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_audit_log(&row)?);
        }
        Ok(entries)
    }
}
