use serde::{Deserialize, Serialize};
use std::fmt;

use super::EditEmoji;
use crate::client::Client;
use crate::user::{UserPayload, UserResolver};
use crate::{Entity, Field, Snowflake};

const CDN_URL: &str = "https://cdn.discordapp.com";

/// A custom emoji as sent by the gateway. Only `id` is required. Role ids are
/// kept as the opaque strings the gateway sends.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmojiPayload {
    pub id: Snowflake,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub roles: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub user: Field<UserPayload>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub require_colons: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub managed: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub animated: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub available: Field<bool>,
}

impl EmojiPayload {
    pub fn new(id: Snowflake) -> Self {
        Self {
            id,
            name: Field::Unset,
            roles: Field::Unset,
            user: Field::Unset,
            require_colons: Field::Unset,
            managed: Field::Unset,
            animated: Field::Unset,
            available: Field::Unset,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Emoji {
    id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    guild_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub roles: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub require_colons: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub managed: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub animated: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub available: Field<bool>,
}

impl Emoji {
    /// Builds an emoji from a full or partial payload. The embedded user, if
    /// any, is handed to `users` and only its id is kept. A malformed user
    /// object is not resolved.
    pub fn new<R>(data: &EmojiPayload, guild_id: Option<Snowflake>, users: &R) -> Self
    where
        R: UserResolver + ?Sized,
    {
        let user_id = data.user.value().map(|user| users.resolve(user.clone()));

        let mut emoji = Self {
            id: data.id,
            guild_id,
            user_id,
            name: Field::Unset,
            roles: Field::Unset,
            require_colons: Field::Unset,
            managed: Field::Unset,
            animated: Field::Unset,
            available: Field::Unset,
        };

        emoji.update(data);
        emoji
    }

    /// Applies every key the payload carries. The embedded user and the id
    /// are ignored here; both are fixed at construction.
    pub fn update(&mut self, data: &EmojiPayload) {
        self.name.merge(&data.name);
        self.roles.merge(&data.roles);
        self.require_colons.merge(&data.require_colons);
        self.managed.merge(&data.managed);
        self.animated.merge(&data.animated);
        self.available.merge(&data.available);
    }

    pub fn guild_id(&self) -> Option<Snowflake> {
        self.guild_id
    }

    pub fn user_id(&self) -> Option<Snowflake> {
        self.user_id
    }

    pub fn is_animated(&self) -> bool {
        self.animated.get().unwrap_or(false)
    }

    /// Markup that renders the emoji in a message, e.g. `<a:pepe:42>`.
    pub fn format(&self) -> String {
        let prefix = if self.is_animated() { "a" } else { "" };
        format!(
            "<{}:{}:{}>",
            prefix,
            self.name.as_deref().unwrap_or_default(),
            self.id
        )
    }

    pub fn url(&self) -> String {
        let ext = if self.is_animated() { "gif" } else { "png" };
        format!("{}/emojis/{}.{}", CDN_URL, self.id, ext)
    }

    /// Asks the client to delete this emoji. The cached value is left alone;
    /// removal happens when the matching gateway event arrives.
    ///
    /// # Panics
    ///
    /// Panics if the emoji was built without an owning guild.
    pub async fn delete<C>(&self, client: &C, reason: Option<&str>) -> Result<(), C::Error>
    where
        C: Client + ?Sized,
    {
        client
            .delete_guild_emoji(self.owning_guild(), self.id, reason)
            .await
    }

    /// Asks the client to edit this emoji and returns what the client returns.
    ///
    /// # Panics
    ///
    /// Panics if the emoji was built without an owning guild.
    pub async fn edit<C>(
        &self,
        client: &C,
        options: &EditEmoji,
        reason: Option<&str>,
    ) -> Result<Emoji, C::Error>
    where
        C: Client + ?Sized,
    {
        client
            .edit_guild_emoji(self.owning_guild(), self.id, options, reason)
            .await
    }

    fn owning_guild(&self) -> Snowflake {
        match self.guild_id {
            Some(guild_id) => guild_id,
            None => panic!("emoji {} does not belong to a guild", self.id),
        }
    }
}

impl Entity for Emoji {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "roles",
        "user_id",
        "require_colons",
        "managed",
        "animated",
        "available",
    ];

    fn id(&self) -> Snowflake {
        self.id
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
