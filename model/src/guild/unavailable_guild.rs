use serde::{Deserialize, Serialize};

use crate::Snowflake;

/// Body of `GUILD_DELETE`. `unavailable` is missing when the bot was removed
/// from the guild and `true` during an outage.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct UnavailableGuild {
    pub id: Snowflake,
    #[serde(default)]
    pub unavailable: Option<bool>,
}

impl UnavailableGuild {
    pub fn is_removal(&self) -> bool {
        !self.unavailable.unwrap_or(false)
    }
}
