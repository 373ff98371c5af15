use serde::{Deserialize, Serialize};

use super::EmojiPayload;
use crate::{Entity, Field, Snowflake};

/// `GUILD_CREATE` / `GUILD_UPDATE` body. `emojis` is only present on the
/// initial snapshot and on full refreshes.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildPayload {
    pub id: Snowflake,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub owner_id: Field<Snowflake>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub unavailable: Field<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emojis: Option<Vec<EmojiPayload>>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Guild {
    id: Snowflake,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub owner_id: Field<Snowflake>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub unavailable: Field<bool>,
}

impl Guild {
    pub fn new(data: &GuildPayload) -> Self {
        let mut guild = Self {
            id: data.id,
            name: Field::Unset,
            owner_id: Field::Unset,
            unavailable: Field::Unset,
        };

        guild.update(data);
        guild
    }

    pub fn update(&mut self, data: &GuildPayload) {
        self.name.merge(&data.name);
        self.owner_id.merge(&data.owner_id);
        self.unavailable.merge(&data.unavailable);
    }
}

impl Entity for Guild {
    const FIELDS: &'static [&'static str] = &["name", "owner_id", "unavailable"];

    fn id(&self) -> Snowflake {
        self.id
    }
}
