use serde::{Deserialize, Serialize};

use crate::{Entity, Field, Snowflake};

const CDN_URL: &str = "https://cdn.discordapp.com";

/// A user as seen in gateway payloads. Every key except `id` may be missing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserPayload {
    pub id: Snowflake,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub username: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub discriminator: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub global_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub avatar: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub bot: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub system: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub public_flags: Field<u64>,
}

impl UserPayload {
    pub fn new(id: Snowflake) -> Self {
        Self {
            id,
            username: Field::Unset,
            discriminator: Field::Unset,
            global_name: Field::Unset,
            avatar: Field::Unset,
            bot: Field::Unset,
            system: Field::Unset,
            public_flags: Field::Unset,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct User {
    id: Snowflake,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub username: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub discriminator: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub global_name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub avatar: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub bot: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub system: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub public_flags: Field<u64>,
}

impl User {
    pub fn new(data: &UserPayload) -> Self {
        let mut user = Self {
            id: data.id,
            username: Field::Unset,
            discriminator: Field::Unset,
            global_name: Field::Unset,
            avatar: Field::Unset,
            bot: Field::Unset,
            system: Field::Unset,
            public_flags: Field::Unset,
        };

        user.update(data);
        user
    }

    pub fn update(&mut self, data: &UserPayload) {
        self.username.merge(&data.username);
        self.discriminator.merge(&data.discriminator);
        self.global_name.merge(&data.global_name);
        self.avatar.merge(&data.avatar);
        self.bot.merge(&data.bot);
        self.system.merge(&data.system);
        self.public_flags.merge(&data.public_flags);
    }

    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }

    /// Animated avatar hashes are prefixed with `a_`.
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar.value().map(|hash| {
            let ext = if hash.starts_with("a_") { "gif" } else { "png" };
            format!("{}/avatars/{}/{}.{}", CDN_URL, self.id, hash, ext)
        })
    }
}

impl Entity for User {
    const FIELDS: &'static [&'static str] = &[
        "username",
        "discriminator",
        "global_name",
        "avatar",
        "bot",
        "system",
        "public_flags",
    ];

    fn id(&self) -> Snowflake {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_keeps_missing_fields() {
        let data: UserPayload =
            serde_json::from_str(r#"{"id":"80351110224678912","username":"nelly","bot":false}"#)
                .unwrap();
        let mut user = User::new(&data);

        let patch: UserPayload =
            serde_json::from_str(r#"{"id":"80351110224678912","global_name":"Nelly"}"#).unwrap();
        user.update(&patch);

        assert_eq!(user.username.as_deref(), Some("nelly"));
        assert_eq!(user.global_name.as_deref(), Some("Nelly"));
        assert_eq!(user.bot, Field::Value(false));
        assert_eq!(user.system, Field::Unset);
    }

    #[test]
    fn test_avatar_url() {
        let mut data = UserPayload::new(Snowflake(7));
        data.avatar = Field::Value("a_1269e74af4df7417b13759eae50c83dc".to_string());
        let user = User::new(&data);

        assert_eq!(
            user.avatar_url().unwrap(),
            "https://cdn.discordapp.com/avatars/7/a_1269e74af4df7417b13759eae50c83dc.gif"
        );
        assert_eq!(user.mention(), "<@7>");
    }

    #[test]
    fn test_to_json_keeps_null_and_skips_unset() {
        let mut data = UserPayload::new(Snowflake(7));
        data.username = Field::Value("bob".to_string());
        data.avatar = Field::Null;
        let json = User::new(&data).to_json(&[]);

        assert_eq!(json["id"], "7");
        assert_eq!(json["username"], "bob");
        assert!(json.contains_key("createdAt"));
        assert_eq!(json["avatar"], serde_json::Value::Null);
        assert!(!json.contains_key("bot"));
    }
}
