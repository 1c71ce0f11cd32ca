//! Serde helpers for byte strings that travel as upper-case hex.

use serde::{de, Deserialize, Deserializer, Serializer};
use subtle_encoding::{Encoding, Hex};

pub fn ser_hex_upper<S, T>(data: T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: AsRef<[u8]>,
{
    let hex = Hex::upper_case()
        .encode_to_string(data)
        .map_err(|e| serde::ser::Error::custom(format!("failed to serialize hex: {e}")))?;
    serializer.serialize_str(&hex)
}

pub fn de_hex_upper<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let hex = String::deserialize(deserializer)?;
    Hex::upper_case()
        .decode(hex.to_uppercase())
        .map_err(|e| de::Error::custom(format!("failed to deserialize hex: {e}")))
}
