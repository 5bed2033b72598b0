//! Audit recorder integration tests.
//!
//! Exercises the public API only: recording through an injected resolver,
//! reading back across a reopen of an on-disk database, and org scoping.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

use trellis_auth::validate_org_id;
use trellis_core::entities::NewAuditLog;
use trellis_core::enums::{Action, EntityType};
use trellis_core::errors::ErrorCode;
use trellis_core::identity::{AuthIdentity, CurrentUser, IdentityResolver, RequestContext};
use trellis_db::error::DatabaseError;
use trellis_db::{AuditError, AuditLogFilter, AuditRecorder, TrellisDb};

/// Resolver standing in for the session user of one request.
struct SessionUser(Option<CurrentUser>);

impl IdentityResolver for SessionUser {
    type Error = std::convert::Infallible;

    async fn current_user(&self) -> Result<Option<CurrentUser>, Self::Error> {
        Ok(self.0.clone())
    }
}

fn user(id: &str, first: &str, last: &str) -> SessionUser {
    SessionUser(Some(CurrentUser {
        id: id.into(),
        image_url: format!("https://img.clerk.com/{id}"),
        first_name: Some(first.into()),
        last_name: Some(last.into()),
    }))
}

#[tokio::test]
async fn entries_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trellis.db");
    let path = path.to_str().unwrap();

    let id = {
        let db = TrellisDb::open_local(path).await.unwrap();
        let recorder = AuditRecorder::new(&db, user("user_ada", "Ada", "Lovelace"));
        recorder
            .record(NewAuditLog::new("org_1", Action::Create, 1, EntityType::Board, "Roadmap"))
            .await
            .unwrap()
            .id
    };

    let db = TrellisDb::open_local(path).await.unwrap();
    let log = db.get_audit_log("org_1", id).await.unwrap();
    assert_eq!(log.user_name, "Ada Lovelace");
    assert_eq!(log.message(), "created board \"Roadmap\"");
}

#[tokio::test]
async fn activity_is_isolated_per_org() {
    let db = TrellisDb::open_local(":memory:").await.unwrap();

    AuditRecorder::new(&db, user("user_ada", "Ada", "Lovelace"))
        .record(NewAuditLog::new("org_1", Action::Create, 1, EntityType::Card, "Ours"))
        .await
        .unwrap();
    let theirs = AuditRecorder::new(&db, user("user_eve", "Eve", "Smith"))
        .record(NewAuditLog::new("org_2", Action::Create, 1, EntityType::Card, "Theirs"))
        .await
        .unwrap();

    let ours = db
        .list_audit_logs("org_1", &AuditLogFilter::default())
        .await
        .unwrap();
    assert_eq!(ours.len(), 1);
    assert_eq!(ours[0].entity_title, "Ours");

    let cross = db.get_audit_log("org_1", theirs.id).await;
    assert!(matches!(cross, Err(DatabaseError::NoResult)));
}

#[tokio::test]
async fn card_activity_panel_shows_latest_first() {
    let db = TrellisDb::open_local(":memory:").await.unwrap();
    let recorder = AuditRecorder::new(&db, user("user_ada", "Ada", "Lovelace"));

    for action in [Action::Create, Action::Update, Action::Update, Action::Delete] {
        recorder
            .record(NewAuditLog::new("org_1", action, 5, EntityType::Card, "Ship it"))
            .await
            .unwrap();
    }
    recorder
        .record(NewAuditLog::new("org_1", Action::Create, 6, EntityType::Card, "Other card"))
        .await
        .unwrap();

    let panel = db
        .list_audit_logs(
            "org_1",
            &AuditLogFilter::for_entity(EntityType::Card, 5).with_limit(3),
        )
        .await
        .unwrap();

    let messages: Vec<String> = panel.iter().map(trellis_core::entities::AuditLog::message).collect();
    assert_eq!(
        messages,
        vec![
            "deleted card \"Ship it\"",
            "updated card \"Ship it\"",
            "updated card \"Ship it\"",
        ]
    );
}

#[tokio::test]
async fn signed_out_record_writes_nothing() {
    let db = TrellisDb::open_local(":memory:").await.unwrap();

    let err = AuditRecorder::new(&db, SessionUser(None))
        .record(NewAuditLog::new("org_1", Action::Update, 1, EntityType::List, "Todo"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuditError::UnauthenticatedActor));
    assert_eq!(err.code(), ErrorCode::Unauthorized);
    let logs = db
        .list_audit_logs("org_1", &AuditLogFilter::default())
        .await
        .unwrap();
    assert!(logs.is_empty());
}

#[rstest]
#[case::empty_org("", Action::Create)]
#[case::unknown_action("org_1", Action::from("ARCHIVE"))]
#[tokio::test]
async fn invalid_entries_are_bad_requests(#[case] org_id: &str, #[case] action: Action) {
    let db = TrellisDb::open_local(":memory:").await.unwrap();

    let err = AuditRecorder::new(&db, user("user_ada", "Ada", "Lovelace"))
        .record(NewAuditLog::new(org_id, action, 1, EntityType::Board, "b"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuditError::InvalidEntry(_)));
    assert_eq!(err.code(), ErrorCode::BadRequest);
}

#[rstest]
#[case::plain("org_2abc")]
#[case::padded(" org_2abc ")]
#[case::whitespace_only("   ")]
#[tokio::test]
async fn validated_org_id_is_always_recordable(#[case] raw: &str) {
    let db = TrellisDb::open_local(":memory:").await.unwrap();
    let ctx = RequestContext::new(AuthIdentity {
        user_id: Some("user_ada".into()),
        org_id: Some(raw.into()),
        ..Default::default()
    });

    let org_id = validate_org_id(&ctx).unwrap();
    let log = AuditRecorder::new(&db, user("user_ada", "Ada", "Lovelace"))
        .record(NewAuditLog::new(org_id.clone(), Action::Update, 1, EntityType::Card, "c"))
        .await
        .unwrap();

    assert_eq!(log.org_id, raw);
    assert_eq!(db.get_audit_log(&org_id, log.id).await.unwrap(), log);
}
