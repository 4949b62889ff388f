//! Lenient field decoders.
//!
//! The game API is inconsistent about quoting: ids, counters and scores
//! show up as JSON strings in some responses and as numbers in others.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Int(i64),
    Float(f64),
    Str(String),
}

pub(crate) fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Raw::deserialize(deserializer)? {
        Raw::Int(v) => Ok(v),
        Raw::Float(v) if v.fract() == 0.0 && v.is_finite() => Ok(v as i64),
        Raw::Float(v) => Err(de::Error::custom(format!("expected an integer, got {v}"))),
        Raw::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected an integer, got {s:?}"))),
    }
}

pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Raw::deserialize(deserializer)? {
        Raw::Int(v) => Ok(v.to_string()),
        Raw::Float(v) => Ok(v.to_string()),
        Raw::Str(s) => Ok(s),
    }
}
