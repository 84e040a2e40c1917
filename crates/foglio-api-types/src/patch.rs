//! Three-state patch fields for partial updates.
//!
//! JSON cannot distinguish "field omitted" from "field set to null" once a
//! value has been deserialized into `Option<T>`. [`Patch`] keeps the
//! distinction: an absent field deserializes to [`Patch::Keep`] (via
//! `#[serde(default)]`), an explicit `null` to [`Patch::Clear`], and a value
//! to [`Patch::Set`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the stored value unchanged.
    #[default]
    Keep,
    /// Reset the stored value to null.
    Clear,
    /// Replace the stored value.
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    /// Resolve the patch against the current value.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Patch::Keep => current,
            Patch::Clear => None,
            Patch::Set(value) => Some(value),
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        })
    }
}

// `Keep` only survives serialization when the field carries
// `#[serde(skip_serializing_if = "Patch::is_keep")]`; a bare `Keep` would
// otherwise collapse into `null` and read back as `Clear`.
impl<T> Serialize for Patch<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Keep | Patch::Clear => serializer.serialize_none(),
            Patch::Set(value) => serializer.serialize_some(value),
        }
    }
}
