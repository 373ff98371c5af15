use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use model::guild::{Emoji, EmojiPayload};
use model::user::{User, UserPayload, UserResolver};
use model::Snowflake;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;
use tracing::warn;

// ========================
// EmojiMap
// ========================
pub struct EmojiMap(DashMap<Snowflake, Emoji>);

impl EmojiMap {
    pub fn new() -> Self {
        Self(DashMap::new())
    }

    /// Merges `data` into the cached emoji with the same id, or builds a new
    /// one. Returns the resulting state.
    pub fn upsert<R>(&self, data: &EmojiPayload, guild_id: Snowflake, users: &R) -> Emoji
    where
        R: UserResolver + ?Sized,
    {
        if data.user.is_malformed() {
            warn!(%guild_id, emoji_id = %data.id, "Emoji carries a malformed user, creator left unresolved");
        }

        match self.0.entry(data.id) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().update(data);
                entry.get().clone()
            }
            Entry::Vacant(entry) => entry
                .insert(Emoji::new(data, Some(guild_id), users))
                .value()
                .clone(),
        }
    }

    /// Applies a full emoji list: every entry is upserted and cached emojis
    /// missing from the list are dropped.
    pub fn sync<R>(&self, emojis: &[EmojiPayload], guild_id: Snowflake, users: &R)
    where
        R: UserResolver + ?Sized,
    {
        let ids: HashSet<Snowflake> = emojis.iter().map(|emoji| emoji.id).collect();
        self.0.retain(|id, _| ids.contains(id));

        emojis.iter().for_each(|emoji| {
            self.upsert(emoji, guild_id, users);
        });
    }

    pub fn get_cloned(&self, id: Snowflake) -> Option<Emoji> {
        self.0.get(&id).map(|emoji| emoji.value().clone())
    }

    pub fn get_all_cloned(&self) -> Vec<Emoji> {
        self.0.iter().map(|emoji| emoji.value().clone()).collect()
    }
}

impl Default for EmojiMap {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for EmojiMap {
    type Target = DashMap<Snowflake, Emoji>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<(Snowflake, Emoji)> for EmojiMap {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (Snowflake, Emoji)>,
    {
        let map = DashMap::from_iter(iter);
        Self(map)
    }
}

// ========================
// UserStore
// ========================
pub type UserRef = Arc<RwLock<User>>;

/// Process-wide user cache. Each id maps to exactly one shared `User`, which
/// later payloads are merged into.
#[derive(Debug, Default)]
pub struct UserStore(DashMap<Snowflake, UserRef>);

impl UserStore {
    pub fn new() -> Self {
        UserStore(DashMap::new())
    }

    /// Inserts the user if unseen, otherwise merges `data` into the existing
    /// instance. Always returns the canonical reference for the id.
    pub fn update(&self, data: UserPayload) -> UserRef {
        match self.0.entry(data.id) {
            Entry::Occupied(entry) => {
                entry.get().write().update(&data);
                Arc::clone(entry.get())
            }
            Entry::Vacant(entry) => {
                let user = Arc::new(RwLock::new(User::new(&data)));
                Arc::clone(entry.insert(user).value())
            }
        }
    }

    pub fn get(&self, id: Snowflake) -> Option<UserRef> {
        self.0.get(&id).map(|user| Arc::clone(user.value()))
    }

    pub fn get_cloned(&self, id: Snowflake) -> Option<User> {
        self.0.get(&id).map(|user| user.value().read().clone())
    }
}

impl UserResolver for UserStore {
    fn resolve(&self, user: UserPayload) -> Snowflake {
        let id = user.id;
        self.update(user);
        id
    }
}

impl Deref for UserStore {
    type Target = DashMap<Snowflake, UserRef>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Field;

    fn user(json: &str) -> UserPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_update_is_reference_stable() {
        let store = UserStore::new();

        let first = store.update(user(r#"{"id":"1","username":"bob"}"#));
        let second = store.update(user(r#"{"id":"1","global_name":"Bob"}"#));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.len(), 1);

        let merged = first.read();
        assert_eq!(merged.username.as_deref(), Some("bob"));
        assert_eq!(merged.global_name.as_deref(), Some("Bob"));
    }

    #[test]
    fn test_update_is_idempotent() {
        let store = UserStore::new();
        let data = user(r#"{"id":"1","username":"bob","bot":true}"#);

        store.update(data.clone());
        let once = store.get_cloned(Snowflake(1));
        store.update(data);

        assert_eq!(store.get_cloned(Snowflake(1)), once);
    }

    #[test]
    fn test_emoji_sync_prunes_missing() {
        let users = UserStore::new();
        let emojis = EmojiMap::new();
        let guild_id = Snowflake(100);

        let a: EmojiPayload = serde_json::from_str(r#"{"id":"1","name":"a"}"#).unwrap();
        let b: EmojiPayload = serde_json::from_str(r#"{"id":"2","name":"b"}"#).unwrap();
        emojis.sync(&[a, b], guild_id, &users);
        assert_eq!(emojis.len(), 2);

        let a: EmojiPayload = serde_json::from_str(r#"{"id":"1","animated":true}"#).unwrap();
        emojis.sync(&[a], guild_id, &users);

        assert_eq!(emojis.len(), 1);
        let a = emojis.get_cloned(Snowflake(1)).unwrap();
        assert_eq!(a.name.as_deref(), Some("a"));
        assert_eq!(a.animated, Field::Value(true));
    }

    #[test]
    fn test_malformed_creator_is_skipped() {
        let users = UserStore::new();
        let emojis = EmojiMap::new();

        let data: EmojiPayload =
            serde_json::from_str(r#"{"id":"2","name":"b","user":{"id":"u1","username":"bob"}}"#)
                .unwrap();
        let emoji = emojis.upsert(&data, Snowflake(100), &users);

        assert_eq!(emoji.user_id(), None);
        assert_eq!(emoji.name.as_deref(), Some("b"));
        assert!(users.is_empty());
    }
}
