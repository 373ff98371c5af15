use crate::Snowflake;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// A remotely backed object identified by a snowflake.
pub trait Entity: Serialize {
    /// Fields emitted by [`Entity::to_json`] in addition to `id` and `createdAt`.
    const FIELDS: &'static [&'static str];

    fn id(&self) -> Snowflake;

    fn created_at(&self) -> DateTime<Utc> {
        self.id().created_at()
    }

    /// Copies `FIELDS` plus `props` into a plain map. Fields that have never
    /// been set are left out; fields cleared by a `null` are written as `null`.
    fn to_json(&self, props: &[&str]) -> Map<String, Value> {
        let mut out = Map::new();
        out.insert("id".to_string(), Value::String(self.id().to_string()));
        out.insert(
            "createdAt".to_string(),
            Value::from(self.id().timestamp_millis()),
        );

        let full = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => return out,
        };

        for prop in Self::FIELDS.iter().chain(props.iter()) {
            if let Some(value) = full.get(*prop) {
                out.insert(prop.to_string(), value.clone());
            }
        }

        out
    }
}
