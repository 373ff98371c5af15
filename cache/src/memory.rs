use crate::model::{GuildState, UserRef, UserStore};
use crate::{CacheError, Event, Options, Result};
use dashmap::mapref::one::RefMut;
use dashmap::DashMap;
use model::guild::{Emoji, EmojiPayload, Guild, GuildPayload};
use model::user::{UserPayload, UserResolver};
use model::{Entity, Field, Snowflake};
use serde_json::{Map, Value};
use tracing::{debug, warn};

#[cfg(feature = "metrics")]
use crate::metrics;

pub struct MemoryCache {
    opts: Options,
    guilds: DashMap<Snowflake, GuildState>,
    users: UserStore,
}

impl MemoryCache {
    pub fn new(opts: Options) -> Self {
        MemoryCache {
            opts,
            guilds: DashMap::new(),
            users: UserStore::new(),
        }
    }

    pub fn options(&self) -> Options {
        self.opts
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }

    fn guild_mut(&self, id: Snowflake) -> Option<RefMut<Snowflake, GuildState>> {
        self.guilds.get_mut(&id)
    }

    /// Applies one gateway event. Events must be fed in the order they were
    /// received.
    pub fn handle(&self, event: Event) -> Result<()> {
        debug!(event = event.name(), "Applying event to cache");

        #[cfg(feature = "metrics")]
        metrics::EVENTS.with_label_values(&[event.name()]).inc();

        match event {
            Event::GuildCreate(guild) | Event::GuildUpdate(guild) => self.store_guild(guild),
            Event::GuildDelete(guild) => {
                if guild.is_removal() {
                    self.delete_guild(guild.id).map(|_| ())
                } else {
                    self.mark_unavailable(guild.id)
                }
            }
            Event::GuildEmojiCreate(ev) | Event::GuildEmojiUpdate(ev) => {
                self.store_emoji(ev.guild_id, &ev.emoji)
            }
            Event::GuildEmojiDelete(ev) => self.delete_emoji(ev.guild_id, ev.emoji_id).map(|_| ()),
            Event::GuildEmojisUpdate(ev) => self.store_emojis(ev.guild_id, &ev.emojis),
            Event::UserUpdate(user) => self.store_user(user),
        }
    }

    pub fn store_guild(&self, data: GuildPayload) -> Result<()> {
        if !self.opts.guilds {
            return Ok(());
        }

        let state = self
            .guilds
            .entry(data.id)
            .and_modify(|state| state.guild.update(&data))
            .or_insert_with(|| GuildState::from(&data));

        if let (Some(emojis), true) = (&data.emojis, self.opts.emojis) {
            state.emojis.sync(emojis, data.id, self);
        }

        Ok(())
    }

    pub fn get_guild(&self, id: Snowflake) -> Result<Option<Guild>> {
        if !self.opts.guilds {
            return CacheError::StoreDisabled.into();
        }

        Ok(self.guilds.get(&id).map(|state| state.guild.clone()))
    }

    /// Drops the guild and every emoji it owns, returning the last known guild.
    pub fn delete_guild(&self, id: Snowflake) -> Result<Option<Guild>> {
        if !self.opts.guilds {
            return Ok(None);
        }

        Ok(self.guilds.remove(&id).map(|(_, state)| state.guild))
    }

    fn mark_unavailable(&self, id: Snowflake) -> Result<()> {
        if !self.opts.guilds {
            return Ok(());
        }

        match self.guild_mut(id) {
            Some(mut state) => {
                state.guild.unavailable = Field::Value(true);
                Ok(())
            }
            None => CacheError::GuildNotFound(id).into(),
        }
    }

    pub fn get_guild_count(&self) -> Result<usize> {
        Ok(self.guilds.len())
    }

    pub fn get_guild_ids(&self) -> Result<Vec<Snowflake>> {
        if !self.opts.guilds {
            return CacheError::StoreDisabled.into();
        }

        Ok(self.guilds.iter().map(|state| *state.key()).collect())
    }

    pub fn store_emoji(&self, guild_id: Snowflake, data: &EmojiPayload) -> Result<()> {
        if !self.opts.guilds || !self.opts.emojis {
            return Ok(());
        }

        match self.guild_mut(guild_id) {
            Some(guild) => {
                guild.emojis.upsert(data, guild_id, self);
                Ok(())
            }
            None => {
                warn!(%guild_id, emoji_id = %data.id, "Received emoji for uncached guild");
                CacheError::GuildNotFound(guild_id).into()
            }
        }
    }

    pub fn store_emojis(&self, guild_id: Snowflake, emojis: &[EmojiPayload]) -> Result<()> {
        if !self.opts.guilds || !self.opts.emojis {
            return Ok(());
        }

        match self.guild_mut(guild_id) {
            Some(guild) => {
                guild.emojis.sync(emojis, guild_id, self);
                Ok(())
            }
            None => {
                warn!(%guild_id, count = emojis.len(), "Received emoji list for uncached guild");
                CacheError::GuildNotFound(guild_id).into()
            }
        }
    }

    pub fn get_emoji(&self, guild_id: Snowflake, emoji_id: Snowflake) -> Result<Option<Emoji>> {
        if !self.opts.guilds || !self.opts.emojis {
            return CacheError::StoreDisabled.into();
        }

        Ok(self
            .guilds
            .get(&guild_id)
            .and_then(|guild| guild.emojis.get_cloned(emoji_id)))
    }

    pub fn get_guild_emojis(&self, guild_id: Snowflake) -> Result<Vec<Emoji>> {
        if !self.opts.guilds || !self.opts.emojis {
            return CacheError::StoreDisabled.into();
        }

        let emojis = self
            .guilds
            .get(&guild_id)
            .ok_or(CacheError::GuildNotFound(guild_id))?
            .emojis
            .get_all_cloned();

        Ok(emojis)
    }

    /// Removes the emoji from its guild and hands back its last known state.
    pub fn delete_emoji(&self, guild_id: Snowflake, emoji_id: Snowflake) -> Result<Option<Emoji>> {
        if !self.opts.guilds || !self.opts.emojis {
            return Ok(None);
        }

        let removed = self
            .guild_mut(guild_id)
            .ok_or(CacheError::GuildNotFound(guild_id))?
            .emojis
            .remove(&emoji_id)
            .map(|(_, emoji)| emoji);

        if removed.is_none() {
            debug!(%guild_id, %emoji_id, "Deleted emoji was not cached");
        }

        Ok(removed)
    }

    pub fn store_user(&self, data: UserPayload) -> Result<()> {
        if !self.opts.users {
            return Ok(());
        }

        self.users.update(data);
        Ok(())
    }

    pub fn get_user(&self, id: Snowflake) -> Result<Option<UserRef>> {
        if !self.opts.users {
            return CacheError::StoreDisabled.into();
        }

        Ok(self.users.get(id))
    }

    /// Looks up the shared user that created `emoji`.
    pub fn emoji_user(&self, emoji: &Emoji) -> Result<Option<UserRef>> {
        match emoji.user_id() {
            Some(id) => self.get_user(id),
            None => Ok(None),
        }
    }

    /// Serializes `emoji` with its creator inlined under `user`. When the
    /// creator is not cached, `user_id` is kept instead.
    pub fn emoji_json(&self, emoji: &Emoji, props: &[&str]) -> Map<String, Value> {
        let mut json = emoji.to_json(props);

        if let Ok(Some(user)) = self.emoji_user(emoji) {
            json.remove("user_id");
            json.insert("user".to_string(), Value::Object(user.read().to_json(&[])));
        }

        json
    }
}

impl UserResolver for MemoryCache {
    fn resolve(&self, user: UserPayload) -> Snowflake {
        if self.opts.users {
            self.users.resolve(user)
        } else {
            user.id
        }
    }
}
