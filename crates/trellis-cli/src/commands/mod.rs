pub mod activity;
pub mod record;
pub mod shared;

use trellis_config::TrellisConfig;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &TrellisConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Activity(args) => activity::handle(&args, config, flags).await,
        Commands::Record(args) => record::handle(&args, config, flags).await,
    }
}
