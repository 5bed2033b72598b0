//! Activity feed message formatting.

use crate::entities::AuditLog;
use crate::enums::Action;

/// Render an audit entry as a one-line message such as `created card "Fix bug"`.
///
/// Total: an action outside the known set renders as `unknown action ...`
/// instead of failing.
#[must_use]
pub fn generate_log_message(log: &AuditLog) -> String {
    let entity_type = log.entity_type.as_str().to_lowercase();
    let title = &log.entity_title;

    match log.action {
        Action::Create => format!("created {entity_type} \"{title}\""),
        Action::Update => format!("updated {entity_type} \"{title}\""),
        Action::Delete => format!("deleted {entity_type} \"{title}\""),
        Action::Unrecognized(_) => format!("unknown action {entity_type} \"{title}\""),
    }
}
