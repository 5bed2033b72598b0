use std::path::Path;

use anyhow::Context;
use trellis_config::TrellisConfig;
use trellis_db::TrellisDb;

pub fn load_config() -> anyhow::Result<TrellisConfig> {
    TrellisConfig::load_with_dotenv().context("failed to load trellis configuration")
}

/// Open the configured database, creating its parent directory on first use.
pub async fn open_db(config: &TrellisConfig) -> anyhow::Result<TrellisDb> {
    let path = config.database.path.as_str();

    if !config.database.is_in_memory()
        && let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("failed to create database directory {}", parent.display())
        })?;
    }

    TrellisDb::open_local(path)
        .await
        .with_context(|| format!("failed to open audit log database at {path}"))
}
