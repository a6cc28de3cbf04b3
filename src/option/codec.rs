//! JSON encoding for `Maybe`
//!
//! An empty container encodes as `null` and a present one encodes as its
//! value. Because the container picks its own encoding, a `Maybe` field in a
//! larger record is always written out, either as a value or as `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::maybe::Maybe;
use crate::error::Result;

impl<T> Serialize for Maybe<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Maybe::Some(v) => v.serialize(serializer),
            Maybe::None => serializer.serialize_none(),
        }
    }
}

// Going through `Option` means a missing struct field also decodes as `None`.
impl<'de, T> Deserialize<'de> for Maybe<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Maybe::from)
    }
}

impl<T> Maybe<T>
where
    T: for<'de> Deserialize<'de>,
{
    /// Replace this container with one decoded from `data`.
    ///
    /// The whole container is swapped out; on error it is left unchanged.
    pub fn replace_from_json(&mut self, data: &[u8]) -> Result<()> {
        *self = from_json(data)?;
        Ok(())
    }
}

/// Encode a container as JSON text
pub fn to_json<T: Serialize>(opt: &Maybe<T>) -> Result<String> {
    Ok(serde_json::to_string(opt)?)
}

/// Decode a container from JSON.
///
/// Empty input and `null` both decode to `None`; anything else must decode
/// as `T`.
pub fn from_json<T>(data: &[u8]) -> Result<Maybe<T>>
where
    T: for<'de> Deserialize<'de>,
{
    if data.iter().all(u8::is_ascii_whitespace) {
        log::trace!("empty JSON input, decoding as none");
        return Ok(Maybe::None);
    }

    let value = serde_json::from_slice::<Maybe<T>>(data)?;
    log::trace!("decoded JSON input, present: {}", value.is_some());
    Ok(value)
}
