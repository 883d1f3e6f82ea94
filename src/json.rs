//! JSON (de)serialization for `Opt<T>`
//!
//! `Some(v)` encodes exactly like `v` and `None` encodes as `null`. There is no
//! envelope; decoding relies on the declared `T`. Inside a derived record a
//! missing key decodes to `None`, the same as a `std::option::Option` field.

use crate::Opt;
use anyhow::{Context, Result};
use log::{debug, trace};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::any::type_name;

impl<T: Serialize> Serialize for Opt<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Opt::Some(value) => serializer.serialize_some(value),
            Opt::None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Opt<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Opt::from)
    }
}

/// Encode an option as a JSON string.
pub fn to_json<T: Serialize>(value: &Opt<T>) -> Result<String> {
    let json = serde_json::to_string(value)
        .with_context(|| format!("Failed to serialize {}", type_name::<Opt<T>>()))?;

    trace!("Encoded {}: {}", type_name::<Opt<T>>(), json);
    Ok(json)
}

/// Decode an option from a JSON string. `null` becomes `None`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<Opt<T>> {
    let value: Opt<T> = serde_json::from_str(json)
        .with_context(|| format!("Failed to parse {} from JSON: {}", type_name::<Opt<T>>(), json))?;

    debug!(
        "Decoded {} ({})",
        type_name::<Opt<T>>(),
        if value.is_some() { "some" } else { "none" }
    );
    Ok(value)
}
