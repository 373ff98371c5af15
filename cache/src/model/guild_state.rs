use super::EmojiMap;
use model::guild::{Guild, GuildPayload};

pub struct GuildState {
    pub guild: Guild,
    pub emojis: EmojiMap,
}

impl From<&GuildPayload> for GuildState {
    fn from(other: &GuildPayload) -> Self {
        Self {
            guild: Guild::new(other),
            emojis: EmojiMap::new(),
        }
    }
}
