use crate::Result;
use model::guild::{EmojiPayload, GuildPayload, UnavailableGuild};
use model::user::UserPayload;
use model::Snowflake;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildEmoji {
    pub guild_id: Snowflake,
    pub emoji: EmojiPayload,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct GuildEmojiDelete {
    pub guild_id: Snowflake,
    pub emoji_id: Snowflake,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildEmojisUpdate {
    pub guild_id: Snowflake,
    pub emojis: Vec<EmojiPayload>,
}

/// Gateway events the cache reacts to.
#[derive(Debug, Clone)]
pub enum Event {
    GuildCreate(GuildPayload),
    GuildUpdate(GuildPayload),
    GuildDelete(UnavailableGuild),
    GuildEmojiCreate(GuildEmoji),
    GuildEmojiUpdate(GuildEmoji),
    GuildEmojiDelete(GuildEmojiDelete),
    GuildEmojisUpdate(GuildEmojisUpdate),
    UserUpdate(UserPayload),
}

#[derive(Deserialize, Debug)]
struct Dispatch {
    #[serde(rename = "t")]
    event_type: Option<String>,

    #[serde(rename = "d", default)]
    data: Value,
}

impl Event {
    /// Parses a `{"t": ..., "d": ...}` dispatch. Returns `Ok(None)` for event
    /// types the cache does not track.
    pub fn from_dispatch(raw: &str) -> Result<Option<Event>> {
        let dispatch: Dispatch = serde_json::from_str(raw)?;
        let data = dispatch.data;

        let event = match dispatch.event_type.as_deref() {
            Some("GUILD_CREATE") => Event::GuildCreate(serde_json::from_value(data)?),
            Some("GUILD_UPDATE") => Event::GuildUpdate(serde_json::from_value(data)?),
            Some("GUILD_DELETE") => Event::GuildDelete(serde_json::from_value(data)?),
            Some("GUILD_EMOJI_CREATE") => Event::GuildEmojiCreate(serde_json::from_value(data)?),
            Some("GUILD_EMOJI_UPDATE") => Event::GuildEmojiUpdate(serde_json::from_value(data)?),
            Some("GUILD_EMOJI_DELETE") => Event::GuildEmojiDelete(serde_json::from_value(data)?),
            Some("GUILD_EMOJIS_UPDATE") => Event::GuildEmojisUpdate(serde_json::from_value(data)?),
            Some("USER_UPDATE") => Event::UserUpdate(serde_json::from_value(data)?),
            _ => return Ok(None),
        };

        Ok(Some(event))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Event::GuildCreate(_) => "GUILD_CREATE",
            Event::GuildUpdate(_) => "GUILD_UPDATE",
            Event::GuildDelete(_) => "GUILD_DELETE",
            Event::GuildEmojiCreate(_) => "GUILD_EMOJI_CREATE",
            Event::GuildEmojiUpdate(_) => "GUILD_EMOJI_UPDATE",
            Event::GuildEmojiDelete(_) => "GUILD_EMOJI_DELETE",
            Event::GuildEmojisUpdate(_) => "GUILD_EMOJIS_UPDATE",
            Event::UserUpdate(_) => "USER_UPDATE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Field;

    #[test]
    fn test_parse_emoji_update() {
        let raw = r#"{"op":0,"s":4,"t":"GUILD_EMOJI_UPDATE","d":{"guild_id":"10","emoji":{"id":"42","available":false}}}"#;

        match Event::from_dispatch(raw).unwrap() {
            Some(Event::GuildEmojiUpdate(ev)) => {
                assert_eq!(ev.guild_id, Snowflake(10));
                assert_eq!(ev.emoji.id, Snowflake(42));
                assert_eq!(ev.emoji.available, Field::Value(false));
                assert!(ev.emoji.name.is_unset());
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_event_is_skipped() {
        let raw = r#"{"t":"MESSAGE_CREATE","d":{"id":"1"}}"#;
        assert!(Event::from_dispatch(raw).unwrap().is_none());

        let raw = r#"{"op":11,"d":null}"#;
        assert!(Event::from_dispatch(raw).unwrap().is_none());
    }

    #[test]
    fn test_bad_payload_is_an_error() {
        let raw = r#"{"t":"GUILD_EMOJI_DELETE","d":{"guild_id":"10"}}"#;
        assert!(Event::from_dispatch(raw).is_err());
    }
}
