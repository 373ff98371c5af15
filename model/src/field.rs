use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::ops::Deref;

/// A payload key or entity field that tells "never sent" apart from `null`.
///
/// Payloads carry all four states. Entities only ever hold `Unset`, `Null` or
/// `Value`, because [`Field::merge`] turns a malformed key into `Unset`.
/// Pair payload fields with `#[serde(default)]` so a missing key is `Unset`,
/// and every field with `skip_serializing_if = "Field::is_unset"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field<T> {
    Unset,
    Null,
    Malformed,
    Value(T),
}

impl<T> Field<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    /// The key was present but its value had the wrong shape.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Field::Malformed)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_deref(&self) -> Option<&T::Target>
    where
        T: Deref,
    {
        self.value().map(Deref::deref)
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Field::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Overwrites `self` if the payload carried the key. A malformed value
    /// leaves the field unset.
    pub fn merge(&mut self, incoming: &Field<T>)
    where
        T: Clone,
    {
        match incoming {
            Field::Unset => {}
            Field::Malformed => *self = Field::Unset,
            other => *self = other.clone(),
        }
    }
}

impl<T: Copy> Field<T> {
    pub fn get(&self) -> Option<T> {
        self.value().copied()
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Value(value) => value.serialize(serializer),
            _ => serializer.serialize_none(),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Field::Null);
        }

        Ok(serde_json::from_value(value)
            .map(Field::Value)
            .unwrap_or(Field::Malformed))
    }
}
