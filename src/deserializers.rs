//! Lenient integer fields. The bundled front-end sends ids and difficulty as numbers or numeric strings.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(i64),
    String(String),
}

fn to_i32(value: NumberOrString) -> Result<Option<i32>, String> {
    match value {
        NumberOrString::Number(n) => i32::try_from(n)
            .map(Some)
            .map_err(|_| format!("{n} is out of range")),
        NumberOrString::String(s) if s.trim().is_empty() => Ok(None),
        NumberOrString::String(s) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| format!("Wrong value {s}, can not parse to integer")),
    }
}

pub fn deserialize_lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(value) => to_i32(value).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// List element that accepts `4` or `"4"`.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "NumberOrString")]
pub struct LenientI32(pub i32);

impl TryFrom<NumberOrString> for LenientI32 {
    type Error = String;

    fn try_from(value: NumberOrString) -> Result<Self, Self::Error> {
        to_i32(value)?
            .map(LenientI32)
            .ok_or_else(|| "empty value where an id was expected".to_string())
    }
}
