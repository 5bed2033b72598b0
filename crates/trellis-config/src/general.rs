//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default number of entries shown in an activity feed.
const fn default_activity_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for activity listings.
    #[serde(default = "default_activity_limit")]
    pub activity_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            activity_limit: default_activity_limit(),
        }
    }
}
