use std::{fmt::Display, str::FromStr};

use serde::{de, Deserialize, Deserializer};

/// HTML forms submit untouched inputs as `name=`; those count as "not set".
pub fn deserialize_optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    s.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.parse::<T>().map_err(de::Error::custom))
        }
    })
    .transpose()
}

/// Only an empty input counts as "not set"; any other text is kept verbatim,
/// surrounding whitespace included.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}
