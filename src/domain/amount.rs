//! Serde helpers for money amounts.
//!
//! `fastnum` only accepts decimal strings, while datasets carry plain JSON
//! numbers. Numbers are parsed from their textual form, never through `f64`
//! arithmetic.

use std::str::FromStr;

use fastnum::D128;
use serde::{Deserialize, Deserializer, Serializer, de, ser};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(serde_json::Number),
    Text(String),
}

impl RawAmount {
    fn parse<E: de::Error>(self) -> Result<D128, E> {
        let text = match self {
            RawAmount::Number(number) => number.to_string(),
            RawAmount::Text(text) => text,
        };
        <D128 as FromStr>::from_str(text.trim())
            .map_err(|err| E::custom(format!("invalid amount '{text}': {err}")))
    }
}

pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<D128>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawAmount>::deserialize(deserializer)?
        .map(RawAmount::parse)
        .transpose()
}

/// Writes an amount as a JSON number.
pub fn serialize_number<S>(amount: &D128, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let text = amount.to_string();
    let number = f64::from_str(&text)
        .map_err(|err| ser::Error::custom(format!("invalid amount '{text}': {err}")))?;
    serializer.serialize_f64(number)
}
