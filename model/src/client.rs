use async_trait::async_trait;

use crate::guild::{EditEmoji, Emoji};
use crate::Snowflake;

/// The REST side of the bot. Implementations own transport, auth, rate limits
/// and retries; errors are surfaced as-is to whoever made the call.
#[async_trait]
pub trait Client: Send + Sync {
    type Error: Send;

    async fn delete_guild_emoji(
        &self,
        guild_id: Snowflake,
        emoji_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<(), Self::Error>;

    async fn edit_guild_emoji(
        &self,
        guild_id: Snowflake,
        emoji_id: Snowflake,
        options: &EditEmoji,
        reason: Option<&str>,
    ) -> Result<Emoji, Self::Error>;
}
