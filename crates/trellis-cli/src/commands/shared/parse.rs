use serde::de::DeserializeOwned;
use trellis_core::enums::Action;

/// Parse an upper-case wire enum from user input (`card`, `Card`, `CARD`).
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_").to_uppercase();
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an audit action, rejecting anything outside the recordable set.
pub fn parse_action(raw: &str) -> anyhow::Result<Action> {
    let action: Action = parse_enum(raw, "action")?;
    if !action.is_known() {
        anyhow::bail!("invalid action '{raw}': expected one of create, update, delete");
    }
    Ok(action)
}
