use clap::{Args, Parser, Subcommand};

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `trellis` binary.
#[derive(Debug, Parser)]
#[command(name = "trellis", version, about = "Trellis - organization audit log")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw, text
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show an organization's activity feed, newest first.
    Activity(ActivityArgs),
    /// Record an audit entry as the signed-in session user.
    Record(RecordArgs),
}

/// Arguments for `trellis activity`.
#[derive(Clone, Debug, Args)]
pub struct ActivityArgs {
    /// Organization id to read activity for
    #[arg(long)]
    pub org: String,
    /// Only entries about this entity type (board, list, card)
    #[arg(long)]
    pub entity_type: Option<String>,
    /// Only entries about this entity id
    #[arg(long, requires = "entity_type")]
    pub entity_id: Option<i64>,
    /// Only entries with this action (create, update, delete)
    #[arg(long)]
    pub action: Option<String>,
}

/// Arguments for `trellis record`.
#[derive(Clone, Debug, Args)]
pub struct RecordArgs {
    /// Clerk session token of the acting user
    #[arg(long)]
    pub token: String,
    /// Mutation performed (create, update, delete)
    #[arg(long)]
    pub action: String,
    /// Kind of entity mutated (board, list, card)
    #[arg(long)]
    pub entity_type: String,
    #[arg(long)]
    pub entity_id: i64,
    /// Entity title at the time of the mutation
    #[arg(long)]
    pub title: String,
}
