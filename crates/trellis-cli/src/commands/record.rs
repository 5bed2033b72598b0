use trellis_auth::jwks::SessionValidator;
use trellis_auth::{ClerkUserResolver, validate_org_id};
use trellis_config::TrellisConfig;
use trellis_core::entities::NewAuditLog;
use trellis_core::enums::EntityType;
use trellis_db::AuditRecorder;

use crate::bootstrap::open_db;
use crate::cli::{GlobalFlags, RecordArgs};
use crate::commands::shared::parse::{parse_action, parse_enum};
use crate::output::{ActivityEntry, output};

const EXPIRY_WARNING_SECS: i64 = 60;

/// Handle `trellis record`.
pub async fn handle(
    args: &RecordArgs,
    config: &TrellisConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let action = parse_action(&args.action)?;
    let entity_type = parse_enum::<EntityType>(&args.entity_type, "entity-type")?;
    let clerk = config.require_clerk()?;

    let claims = SessionValidator::new(&clerk.secret_key)
        .validate(&args.token)
        .await?;
    if claims.is_near_expiry(EXPIRY_WARNING_SECS) {
        tracing::warn!(expires_at = %claims.expires_at, "session token is about to expire");
    }

    let ctx = claims.to_request_context();
    let org_id = validate_org_id(&ctx)?;
    let resolver = ClerkUserResolver::for_context(&clerk.api_url, &clerk.secret_key, &ctx);

    let db = open_db(config).await?;
    let entry = NewAuditLog::new(org_id, action, args.entity_id, entity_type, &args.title);
    let log = AuditRecorder::new(&db, resolver).record(entry).await?;

    output(&ActivityEntry::from(log), flags.format)
}
