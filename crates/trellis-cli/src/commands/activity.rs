use trellis_config::TrellisConfig;
use trellis_core::enums::EntityType;
use trellis_db::AuditLogFilter;

use crate::bootstrap::open_db;
use crate::cli::{ActivityArgs, GlobalFlags};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{parse_action, parse_enum};
use crate::output::{ActivityEntry, output};

/// Handle `trellis activity`.
pub async fn handle(
    args: &ActivityArgs,
    config: &TrellisConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = build_filter(args, flags.limit, config.general.activity_limit)?;
    let db = open_db(config).await?;

    let entries: Vec<ActivityEntry> = db
        .list_audit_logs(&args.org, &filter)
        .await?
        .into_iter()
        .map(ActivityEntry::from)
        .collect();

    tracing::debug!(org_id = %args.org, count = entries.len(), "loaded activity");
    output(&entries, flags.format)
}

fn build_filter(
    args: &ActivityArgs,
    limit: Option<u32>,
    configured_limit: u32,
) -> anyhow::Result<AuditLogFilter> {
    if args.org.is_empty() {
        anyhow::bail!("--org must not be empty");
    }

    Ok(AuditLogFilter {
        entity_type: args
            .entity_type
            .as_deref()
            .map(|value| parse_enum::<EntityType>(value, "entity-type"))
            .transpose()?,
        entity_id: args.entity_id,
        action: args.action.as_deref().map(parse_action).transpose()?,
        limit: Some(effective_limit(limit, configured_limit)),
    })
}
